//! Viewer-dependent projections of commissions and pending requests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::entities::{
    CommissionRecord, CommissionSummary, CommissionUpdate, PendingRequest, Tag, Viewer,
};
use super::status::CommissionStatus;
use crate::catalog::application::domain::pricing::Complexity;
use crate::request::application::domain::entities::RequestCounts;

/// Commission row as shown to anonymous viewers.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PublicCommissionSummary {
    pub id: Uuid,
    pub status: CommissionStatus,
    pub progress: String,
    pub complexity: Complexity,
    #[serde(flatten)]
    pub counts: RequestCounts,
    /// Only present for public work.
    pub latest_update: Option<String>,
}

impl From<CommissionSummary> for PublicCommissionSummary {
    fn from(c: CommissionSummary) -> Self {
        Self {
            id: c.id,
            status: c.status,
            progress: c.progress,
            complexity: c.complexity,
            counts: c.counts,
            latest_update: if c.is_public_work {
                c.latest_update
            } else {
                None
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CommissionListItem {
    Full(CommissionSummary),
    Public(PublicCommissionSummary),
}

impl CommissionListItem {
    pub fn status(&self) -> CommissionStatus {
        match self {
            CommissionListItem::Full(c) => c.status,
            CommissionListItem::Public(c) => c.status,
        }
    }
}

/// Drops rows an anonymous viewer may not see and redacts the rest.
pub fn present_commissions(
    viewer: Viewer,
    commissions: Vec<CommissionSummary>,
) -> Vec<CommissionListItem> {
    if !viewer.is_anonymous() {
        return commissions.into_iter().map(CommissionListItem::Full).collect();
    }

    commissions
        .into_iter()
        .filter(CommissionSummary::is_publicly_visible)
        .map(|c| CommissionListItem::Public(c.into()))
        .collect()
}

/// Pending request as shown to anonymous viewers. The complexity is the
/// count-based estimate so no price leaks.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PublicPendingRequest {
    pub request_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub counts: RequestCounts,
    pub complexity: Complexity,
}

impl From<PendingRequest> for PublicPendingRequest {
    fn from(r: PendingRequest) -> Self {
        Self {
            request_id: r.request_id,
            date: r.request_date,
            complexity: r.counts.estimated_complexity(),
            counts: r.counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QueueEntry {
    Full(PendingRequest),
    Public(PublicPendingRequest),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct KanbanBoard {
    #[serde(rename = "Requested")]
    pub requested: Vec<QueueEntry>,
    #[serde(rename = "Accepted")]
    pub accepted: Vec<CommissionListItem>,
    #[serde(rename = "Working")]
    pub working: Vec<CommissionListItem>,
    #[serde(rename = "Waiting")]
    pub waiting: Vec<CommissionListItem>,
    #[serde(rename = "Finished")]
    pub finished: Vec<CommissionListItem>,
}

impl KanbanBoard {
    /// Commission columns are ordered by most recent activity.
    pub fn build(
        viewer: Viewer,
        pending: Vec<PendingRequest>,
        mut commissions: Vec<CommissionSummary>,
    ) -> Self {
        commissions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let requested = if viewer.is_anonymous() {
            pending
                .into_iter()
                .filter(|r| !r.is_nsfw)
                .map(|r| QueueEntry::Public(r.into()))
                .collect()
        } else {
            pending.into_iter().map(QueueEntry::Full).collect()
        };

        let mut board = KanbanBoard {
            requested,
            ..Default::default()
        };

        for item in present_commissions(viewer, commissions) {
            board.column_mut(item.status()).push(item);
        }

        board
    }

    fn column_mut(&mut self, status: CommissionStatus) -> &mut Vec<CommissionListItem> {
        match status {
            CommissionStatus::Accepted => &mut self.accepted,
            CommissionStatus::Working => &mut self.working,
            CommissionStatus::Waiting => &mut self.waiting,
            CommissionStatus::Finished => &mut self.finished,
        }
    }
}

/// Detail view for viewers allowed to see everything.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FullCommissionView {
    pub id: Uuid,
    pub request_id: Uuid,
    pub status: CommissionStatus,
    pub progress: String,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub actual_completion_date: Option<DateTime<Utc>>,
    pub complexity: Complexity,
    pub is_public_work: bool,
    pub description: String,
    #[serde(flatten)]
    pub counts: RequestCounts,
    pub references: Vec<String>,
    pub is_nsfw: bool,
    pub total_price: Option<f64>,
    pub client_id: Uuid,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    pub is_owner: bool,
    pub updates: Vec<CommissionUpdate>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FullCommissionView {
    /// The client email is kept for the owner only.
    pub fn new(
        record: CommissionRecord,
        is_owner: bool,
        updates: Vec<CommissionUpdate>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            id: record.id,
            request_id: record.request_id,
            status: record.status,
            progress: record.progress,
            expected_completion_date: record.expected_completion_date,
            actual_completion_date: record.actual_completion_date,
            complexity: record.complexity,
            is_public_work: record.is_public_work,
            description: record.description,
            counts: record.counts,
            references: record.references,
            is_nsfw: record.is_nsfw,
            total_price: record.total_price,
            client_id: record.client_id.value(),
            client_name: record.client_name,
            client_email: is_owner.then_some(record.client_email),
            is_owner,
            updates,
            tags,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Detail view for anonymous viewers of private work: no updates, no references.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LimitedCommissionView {
    pub id: Uuid,
    pub status: CommissionStatus,
    pub progress: String,
    pub complexity: Complexity,
    #[serde(flatten)]
    pub counts: RequestCounts,
    pub is_nsfw: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CommissionRecord> for LimitedCommissionView {
    fn from(r: CommissionRecord) -> Self {
        Self {
            id: r.id,
            status: r.status,
            progress: r.progress,
            complexity: r.complexity,
            counts: r.counts,
            is_nsfw: r.is_nsfw,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CommissionView {
    Full(Box<FullCommissionView>),
    Limited(LimitedCommissionView),
}
