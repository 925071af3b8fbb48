use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::request::application::domain::entities::{RequestDetail, RequestSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RequestQuery: Send + Sync {
    /// Newest first.
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<RequestSummary>, RequestQueryError>;

    async fn find_by_id(&self, request_id: Uuid) -> Result<Option<RequestDetail>, RequestQueryError>;
}
