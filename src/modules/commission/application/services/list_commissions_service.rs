use async_trait::async_trait;

use crate::commission::application::{
    domain::{
        entities::Viewer,
        status::CommissionStatus,
        views::{present_commissions, CommissionListItem},
    },
    ports::{
        incoming::use_cases::{ListCommissionsError, ListCommissionsUseCase},
        outgoing::CommissionQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListCommissionsService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCommissionsService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCommissionsUseCase for ListCommissionsService<Q>
where
    Q: CommissionQuery + Send + Sync,
{
    async fn execute(
        &self,
        viewer: Viewer,
        status: Option<CommissionStatus>,
    ) -> Result<Vec<CommissionListItem>, ListCommissionsError> {
        let commissions = self
            .query
            .list(status)
            .await
            .map_err(|e| ListCommissionsError::QueryFailed(e.to_string()))?;

        Ok(present_commissions(viewer, commissions))
    }
}
