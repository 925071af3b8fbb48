use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::ProfileOverview;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Failed to load profile: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<ProfileOverview, GetProfileError>;
}
