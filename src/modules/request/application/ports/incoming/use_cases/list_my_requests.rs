use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::request::application::domain::entities::RequestSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMyRequestsError {
    #[error("Failed to list requests: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListMyRequestsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<RequestSummary>, ListMyRequestsError>;
}
