use async_trait::async_trait;
use uuid::Uuid;

use crate::commission::application::domain::{
    entities::{CommissionRecord, CommissionSummary, CommissionUpdate, PendingRequest, Tag},
    status::CommissionStatus,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommissionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommissionQuery: Send + Sync {
    /// Newest first; every commission when `status` is `None`.
    async fn list(
        &self,
        status: Option<CommissionStatus>,
    ) -> Result<Vec<CommissionSummary>, CommissionQueryError>;

    /// Requests not yet accepted, newest first.
    async fn list_pending_requests(&self) -> Result<Vec<PendingRequest>, CommissionQueryError>;

    async fn find_by_id(
        &self,
        commission_id: Uuid,
    ) -> Result<Option<CommissionRecord>, CommissionQueryError>;

    /// Newest first.
    async fn list_updates(
        &self,
        commission_id: Uuid,
    ) -> Result<Vec<CommissionUpdate>, CommissionQueryError>;

    async fn list_tags(&self, commission_id: Uuid) -> Result<Vec<Tag>, CommissionQueryError>;
}
