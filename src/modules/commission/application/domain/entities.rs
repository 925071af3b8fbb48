use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::status::CommissionStatus;
use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::pricing::Complexity;
use crate::request::application::domain::entities::RequestCounts;

/// Who is reading. Anonymous viewers get filtered and redacted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Authenticated(UserId),
}

impl Viewer {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Viewer::Anonymous)
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Authenticated(id) => Some(*id),
        }
    }
}

impl From<Option<UserId>> for Viewer {
    fn from(user: Option<UserId>) -> Self {
        user.map_or(Viewer::Anonymous, Viewer::Authenticated)
    }
}

/// One commission row of the list and kanban views, joined with its request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommissionSummary {
    pub id: Uuid,
    pub request_id: Uuid,
    pub status: CommissionStatus,
    pub progress: String,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub complexity: Complexity,
    pub is_public_work: bool,
    pub description: String,
    #[serde(flatten)]
    pub counts: RequestCounts,
    pub is_nsfw: bool,
    pub total_price: Option<f64>,
    pub client_name: String,
    /// Image of the most recent update, if any.
    pub latest_update: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommissionSummary {
    pub fn is_publicly_visible(&self) -> bool {
        !self.is_nsfw || self.is_public_work
    }
}

/// A request still waiting in the `Requested` column.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PendingRequest {
    pub request_id: Uuid,
    pub description: String,
    #[serde(flatten)]
    pub counts: RequestCounts,
    pub is_nsfw: bool,
    pub total_price: Option<f64>,
    pub request_date: DateTime<Utc>,
    pub client_name: String,
}

/// Everything known about one commission, used for the detail view and for
/// client notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionRecord {
    pub id: Uuid,
    pub request_id: Uuid,
    pub client_id: UserId,
    pub client_name: String,
    pub client_email: String,
    pub status: CommissionStatus,
    pub progress: String,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub actual_completion_date: Option<DateTime<Utc>>,
    pub complexity: Complexity,
    pub is_public_work: bool,
    pub description: String,
    pub counts: RequestCounts,
    pub references: Vec<String>,
    pub is_nsfw: bool,
    pub total_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How much of a commission a viewer may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAccess {
    /// NSFW work hidden from anonymous viewers.
    Denied,
    Limited,
    Full { is_owner: bool },
}

impl CommissionRecord {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.client_id == user
    }

    pub fn access_for(&self, viewer: Viewer) -> DetailAccess {
        match viewer {
            Viewer::Anonymous if self.is_public_work => DetailAccess::Full { is_owner: false },
            Viewer::Anonymous if self.is_nsfw => DetailAccess::Denied,
            Viewer::Anonymous => DetailAccess::Limited,
            Viewer::Authenticated(user) => DetailAccess::Full {
                is_owner: self.is_owned_by(user),
            },
        }
    }
}

/// Append-only progress post on a commission.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommissionUpdate {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub video_path: Option<String>,
    pub update_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}
