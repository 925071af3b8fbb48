use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::{ProfileCommission, UserProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_profile(&self, user_id: UserId) -> Result<Option<UserProfile>, ProfileQueryError>;

    /// Commissions opened from the user's requests, newest first.
    async fn list_commissions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ProfileCommission>, ProfileQueryError>;
}
