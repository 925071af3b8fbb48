use async_trait::async_trait;

use crate::catalog::application::{
    domain::entities::Service,
    ports::{
        incoming::use_cases::{ListServicesError, ListServicesUseCase},
        outgoing::ServiceQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListServicesService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListServicesService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListServicesUseCase for ListServicesService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Service>, ListServicesError> {
        self.query
            .list_active()
            .await
            .map_err(|e| ListServicesError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::application::services::test_fixtures::{
        character_illustration, MockServiceQuery,
    };

    #[tokio::test]
    async fn returns_active_services() {
        let service = ListServicesService::new(MockServiceQuery::with(vec![
            character_illustration(),
        ]));

        let services = service.execute().await.unwrap();

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].options.len(), 2);
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let service = ListServicesService::new(MockServiceQuery::failing("boom"));

        assert!(matches!(
            service.execute().await,
            Err(ListServicesError::QueryFailed(msg)) if msg.contains("boom")
        ));
    }
}
