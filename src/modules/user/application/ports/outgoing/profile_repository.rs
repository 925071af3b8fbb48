use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::ProfileImageKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn update_details(
        &self,
        user_id: UserId,
        username: &str,
        description: Option<&str>,
    ) -> Result<(), ProfileRepositoryError>;

    async fn set_image(
        &self,
        user_id: UserId,
        kind: ProfileImageKind,
        path: &str,
    ) -> Result<(), ProfileRepositoryError>;
}
