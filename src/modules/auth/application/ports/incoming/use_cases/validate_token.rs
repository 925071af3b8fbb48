use async_trait::async_trait;

use crate::auth::application::domain::entities::UserInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidateTokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Resolves a raw bearer token to the account it was issued for.
#[async_trait]
pub trait ValidateTokenUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<UserInfo, ValidateTokenError>;
}
