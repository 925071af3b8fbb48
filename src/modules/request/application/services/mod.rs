mod accept_request_service;
mod get_request_service;
mod list_my_requests_service;
mod submit_request_service;

pub use accept_request_service::AcceptRequestService;
pub use get_request_service::GetRequestService;
pub use list_my_requests_service::ListMyRequestsService;
pub use submit_request_service::SubmitRequestService;
