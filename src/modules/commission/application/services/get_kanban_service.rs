use async_trait::async_trait;

use crate::commission::application::{
    domain::{entities::Viewer, views::KanbanBoard},
    ports::{
        incoming::use_cases::{GetKanbanError, GetKanbanUseCase},
        outgoing::CommissionQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetKanbanService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetKanbanService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetKanbanUseCase for GetKanbanService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    async fn execute(&self, viewer: Viewer) -> Result<KanbanBoard, GetKanbanError> {
        let pending = self
            .query
            .list_pending_requests()
            .await
            .map_err(|e| GetKanbanError::QueryFailed(e.to_string()))?;

        let commissions = self
            .query
            .list(None)
            .await
            .map_err(|e| GetKanbanError::QueryFailed(e.to_string()))?;

        Ok(KanbanBoard::build(viewer, pending, commissions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::application::domain::status::CommissionStatus;
    use crate::commission::application::services::test_fixtures::{
        pending, record, MockCommissionQuery,
    };

    #[tokio::test]
    async fn builds_all_columns() {
        let query = MockCommissionQuery {
            records: vec![
                record(CommissionStatus::Accepted, false, false),
                record(CommissionStatus::Finished, false, true),
            ],
            pending: vec![pending(false), pending(true)],
            ..Default::default()
        };
        let service = GetKanbanService::new(query);

        let board = service.execute(Viewer::Anonymous).await.unwrap();

        assert_eq!(board.requested.len(), 1);
        assert_eq!(board.accepted.len(), 1);
        assert_eq!(board.finished.len(), 1);
        assert!(board.working.is_empty());
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        let service = GetKanbanService::new(MockCommissionQuery::failing("timeout"));

        assert!(matches!(
            service.execute(Viewer::Anonymous).await,
            Err(GetKanbanError::QueryFailed(_))
        ));
    }
}
