use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::commission::application::domain::status::CommissionStatus;

const MAX_PROGRESS_CHARS: usize = 100;

/// Operator edit of a commission. Absent fields stay unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCommissionCommand {
    pub commission_id: Uuid,
    pub status: Option<CommissionStatus>,
    pub progress: Option<String>,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub is_public_work: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateCommissionCommandError {
    #[error("No changes supplied")]
    NoChanges,

    #[error("Progress cannot be empty")]
    EmptyProgress,

    #[error("Progress cannot exceed 100 characters")]
    ProgressTooLong,
}

impl UpdateCommissionCommand {
    pub fn new(
        commission_id: Uuid,
        status: Option<CommissionStatus>,
        progress: Option<String>,
        expected_completion_date: Option<DateTime<Utc>>,
        is_public_work: Option<bool>,
    ) -> Result<Self, UpdateCommissionCommandError> {
        let progress = progress.map(|p| p.trim().to_string());

        match &progress {
            Some(p) if p.is_empty() => return Err(UpdateCommissionCommandError::EmptyProgress),
            Some(p) if p.chars().count() > MAX_PROGRESS_CHARS => {
                return Err(UpdateCommissionCommandError::ProgressTooLong)
            }
            _ => {}
        }

        if status.is_none()
            && progress.is_none()
            && expected_completion_date.is_none()
            && is_public_work.is_none()
        {
            return Err(UpdateCommissionCommandError::NoChanges);
        }

        Ok(Self {
            commission_id,
            status,
            progress,
            expected_completion_date,
            is_public_work,
        })
    }
}

/// Commission fields after an edit.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommissionState {
    pub id: Uuid,
    pub status: CommissionStatus,
    pub progress: String,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub actual_completion_date: Option<DateTime<Utc>>,
    pub is_public_work: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCommissionError {
    #[error("Commission not found")]
    NotFound,

    #[error("Cannot move a commission from {from} to {to}")]
    InvalidTransition {
        from: CommissionStatus,
        to: CommissionStatus,
    },

    #[error("Failed to read commission: {0}")]
    QueryFailed(String),

    #[error("Failed to update commission: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCommissionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateCommissionCommand,
    ) -> Result<CommissionState, UpdateCommissionError>;
}
