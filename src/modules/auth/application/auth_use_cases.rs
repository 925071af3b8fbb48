use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginUserUseCase, RegisterUserUseCase, ValidateTokenUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub validate: Arc<dyn ValidateTokenUseCase + Send + Sync>,
}
