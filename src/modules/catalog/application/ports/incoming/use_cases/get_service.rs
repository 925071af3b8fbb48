use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::Service;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Failed to fetch service: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetServiceUseCase: Send + Sync {
    async fn execute(&self, service_id: Uuid) -> Result<Service, GetServiceError>;
}
