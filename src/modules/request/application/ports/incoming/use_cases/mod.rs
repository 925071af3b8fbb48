mod accept_request;
mod get_request;
mod list_my_requests;
mod submit_request;

pub use accept_request::{
    AcceptRequestCommand, AcceptRequestError, AcceptRequestUseCase, AcceptedRequest,
};
pub use get_request::{GetRequestError, GetRequestUseCase};
pub use list_my_requests::{ListMyRequestsError, ListMyRequestsUseCase};
pub use submit_request::{
    Requester, RequesterIdentity, SubmitRequestCommand, SubmitRequestCommandError,
    SubmitRequestError, SubmitRequestUseCase, SubmittedRequest,
};
