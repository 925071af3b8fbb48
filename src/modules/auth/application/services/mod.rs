mod login_user_service;
mod register_user_service;
mod validate_token_service;

pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use validate_token_service::ValidateTokenService;
