use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::request::application::{
    domain::entities::RequestSummary,
    ports::{
        incoming::use_cases::{ListMyRequestsError, ListMyRequestsUseCase},
        outgoing::RequestQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListMyRequestsService<Q>
where
    Q: RequestQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListMyRequestsService<Q>
where
    Q: RequestQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListMyRequestsUseCase for ListMyRequestsService<Q>
where
    Q: RequestQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<RequestSummary>, ListMyRequestsError> {
        self.query
            .list_for_user(owner)
            .await
            .map_err(|e| ListMyRequestsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::application::domain::entities::RequestStatus;
    use crate::request::application::services::test_fixtures::{request_detail, MockRequestQuery};
    use uuid::Uuid;

    #[tokio::test]
    async fn returns_only_callers_requests() {
        let owner = Uuid::new_v4();
        let query = MockRequestQuery::with(vec![
            request_detail(owner, RequestStatus::Requested),
            request_detail(Uuid::new_v4(), RequestStatus::Requested),
        ]);

        let result = ListMyRequestsService::new(query)
            .execute(UserId::from(owner))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let service = ListMyRequestsService::new(MockRequestQuery::failing("db down"));

        assert!(matches!(
            service.execute(UserId::from(Uuid::new_v4())).await,
            Err(ListMyRequestsError::QueryFailed(msg)) if msg.contains("db down")
        ));
    }
}
