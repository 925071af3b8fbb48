mod login_user;
mod register_user;
mod validate_token;

pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginUserUseCase};
pub use register_user::{
    RegisterCommand, RegisterCommandError, RegisterError, RegisterUserUseCase, MAX_USERNAME_LEN,
};
pub use validate_token::{ValidateTokenError, ValidateTokenUseCase};
