use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::commission::application::domain::{entities::Tag, status::CommissionStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct NewCommissionUpdate {
    pub commission_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub video_path: Option<String>,
}

/// Columns to overwrite; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommissionChanges {
    pub status: Option<CommissionStatus>,
    pub progress: Option<String>,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub actual_completion_date: Option<DateTime<Utc>>,
    pub is_public_work: Option<bool>,
}

impl CommissionChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommissionRepositoryError {
    #[error("Commission not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommissionRepository: Send + Sync {
    /// Stores the update and bumps the commission's `updated_at`.
    async fn add_update(&self, update: NewCommissionUpdate)
        -> Result<Uuid, CommissionRepositoryError>;

    async fn apply_changes(
        &self,
        commission_id: Uuid,
        changes: CommissionChanges,
    ) -> Result<(), CommissionRepositoryError>;

    /// Attaches the tag, creating it on first use. Attaching twice is a no-op.
    async fn attach_tag(
        &self,
        commission_id: Uuid,
        name: &str,
    ) -> Result<Tag, CommissionRepositoryError>;
}
