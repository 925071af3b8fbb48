mod auth;

pub(crate) use auth::extract_token_from_header;
pub use auth::{AuthenticatedUser, OperatorUser, OptionalUser};
