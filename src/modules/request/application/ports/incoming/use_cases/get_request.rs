use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::request::application::domain::entities::RequestDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRequestError {
    #[error("Request not found")]
    NotFound,

    #[error("Access denied")]
    Forbidden,

    #[error("Failed to fetch request: {0}")]
    QueryFailed(String),
}

/// Only the owner may read a request.
#[async_trait]
pub trait GetRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        request_id: Uuid,
        viewer: UserId,
    ) -> Result<RequestDetail, GetRequestError>;
}
