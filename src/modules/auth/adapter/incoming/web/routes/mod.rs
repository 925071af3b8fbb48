pub mod login_user;
pub mod register_user;
pub mod validate_token;

pub use login_user::{login_user_handler, LoginRequestDto};
pub use register_user::{register_error_response, register_user_handler, RegisterRequestDto};
pub use validate_token::{validate_token_handler, ValidateTokenResponse};
