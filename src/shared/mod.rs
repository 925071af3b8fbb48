pub mod api;
pub mod multipart;
pub mod storage;
