use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::Service;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read access to the service catalogue. Only active services and active
/// options are ever returned.
#[async_trait]
pub trait ServiceQuery: Send + Sync {
    /// Active services ordered by name, each with its active options.
    async fn list_active(&self) -> Result<Vec<Service>, ServiceQueryError>;

    async fn find_active(&self, service_id: Uuid) -> Result<Option<Service>, ServiceQueryError>;
}
