use async_trait::async_trait;

use crate::catalog::application::domain::entities::Service;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListServicesError {
    #[error("Failed to fetch services: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListServicesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Service>, ListServicesError>;
}
