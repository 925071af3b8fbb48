use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::{
    domain::entities::Service,
    ports::{
        incoming::use_cases::{GetServiceError, GetServiceUseCase},
        outgoing::ServiceQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetServiceService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetServiceService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetServiceUseCase for GetServiceService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(&self, service_id: Uuid) -> Result<Service, GetServiceError> {
        self.query
            .find_active(service_id)
            .await
            .map_err(|e| GetServiceError::QueryFailed(e.to_string()))?
            .ok_or(GetServiceError::NotFound)
    }
}
