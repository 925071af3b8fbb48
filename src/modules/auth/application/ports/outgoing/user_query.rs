// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserInfo;

/// Result DTO for user queries
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_vip: bool,
    pub is_operator: bool,
    pub profile_picture: Option<String>,
    pub banner: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            is_vip: self.is_vip,
            is_operator: self.is_operator,
        }
    }
}

/// Which of a candidate username/email pair is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserConflicts {
    pub is_email_taken: bool,
    pub is_username_taken: bool,
}

impl UserConflicts {
    pub fn any(&self) -> bool {
        self.is_email_taken || self.is_username_taken
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_conflicts(
        &self,
        username: &str,
        email: &str,
    ) -> Result<UserConflicts, UserQueryError>;
}
