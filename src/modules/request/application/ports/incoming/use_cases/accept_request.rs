use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::application::domain::pricing::Complexity;
use crate::commission::application::domain::status::CommissionStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct AcceptRequestCommand {
    pub request_id: Uuid,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub is_public_work: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AcceptedRequest {
    pub commission_id: Uuid,
    pub request_id: Uuid,
    pub status: CommissionStatus,
    pub complexity: Complexity,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AcceptRequestError {
    #[error("Request not found")]
    NotFound,

    #[error("Request has already been accepted")]
    AlreadyAccepted,

    #[error("Failed to fetch request: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AcceptRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AcceptRequestCommand,
    ) -> Result<AcceptedRequest, AcceptRequestError>;
}
