use async_trait::async_trait;
use uuid::Uuid;

use crate::commission::application::{
    domain::{
        entities::{DetailAccess, Viewer},
        views::{CommissionView, FullCommissionView},
    },
    ports::{
        incoming::use_cases::{GetCommissionError, GetCommissionUseCase},
        outgoing::CommissionQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetCommissionService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCommissionService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn query_failed(e: impl ToString) -> GetCommissionError {
    GetCommissionError::QueryFailed(e.to_string())
}

#[async_trait]
impl<Q> GetCommissionUseCase for GetCommissionService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    async fn execute(
        &self,
        commission_id: Uuid,
        viewer: Viewer,
    ) -> Result<CommissionView, GetCommissionError> {
        let record = self
            .query
            .find_by_id(commission_id)
            .await
            .map_err(query_failed)?
            .ok_or(GetCommissionError::NotFound)?;

        let is_owner = match record.access_for(viewer) {
            DetailAccess::Denied => return Err(GetCommissionError::AuthRequired),
            DetailAccess::Limited => return Ok(CommissionView::Limited(record.into())),
            DetailAccess::Full { is_owner } => is_owner,
        };

        let updates = self
            .query
            .list_updates(commission_id)
            .await
            .map_err(query_failed)?;
        let tags = self
            .query
            .list_tags(commission_id)
            .await
            .map_err(query_failed)?;

        Ok(CommissionView::Full(Box::new(FullCommissionView::new(
            record, is_owner, updates, tags,
        ))))
    }
}
