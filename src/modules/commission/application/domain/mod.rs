pub mod entities;
pub mod status;
pub mod views;
