pub mod accept_request;
pub mod get_request;
pub mod my_requests;
pub mod submit_request;

pub use accept_request::{accept_request_handler, AcceptRequestDto};
pub use get_request::get_request_handler;
pub use my_requests::my_requests_handler;
pub use submit_request::submit_request_handler;
