use async_trait::async_trait;

use crate::commission::application::domain::{entities::Viewer, views::KanbanBoard};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetKanbanError {
    #[error("Failed to build kanban board: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetKanbanUseCase: Send + Sync {
    async fn execute(&self, viewer: Viewer) -> Result<KanbanBoard, GetKanbanError>;
}
