pub mod auth;
pub mod catalog;
pub mod commission;
pub mod email;
pub mod request;
pub mod user;
