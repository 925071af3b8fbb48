use async_trait::async_trait;
use uuid::Uuid;

use crate::commission::application::domain::{entities::Viewer, views::CommissionView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommissionError {
    #[error("Commission not found")]
    NotFound,

    /// Private NSFW work requested without a token.
    #[error("Authentication required to view this commission")]
    AuthRequired,

    #[error("Failed to fetch commission: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCommissionUseCase: Send + Sync {
    async fn execute(
        &self,
        commission_id: Uuid,
        viewer: Viewer,
    ) -> Result<CommissionView, GetCommissionError>;
}
