use async_trait::async_trait;

use crate::commission::application::domain::{
    entities::Viewer, status::CommissionStatus, views::CommissionListItem,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommissionsError {
    #[error("Failed to list commissions: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListCommissionsUseCase: Send + Sync {
    async fn execute(
        &self,
        viewer: Viewer,
        status: Option<CommissionStatus>,
    ) -> Result<Vec<CommissionListItem>, ListCommissionsError>;
}
