use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserInfo;

// Input DTO for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_vip: bool,
    pub is_operator: bool,
}

impl From<UserResult> for UserInfo {
    fn from(user: UserResult) -> Self {
        UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            is_vip: user.is_vip,
            is_operator: user.is_operator,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
}
