use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::application::domain::pricing::Complexity;
use crate::commission::application::domain::status::CommissionStatus;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub banner: Option<String>,
    pub description: Option<String>,
    pub is_vip: bool,
    pub is_operator: bool,
    pub created_at: DateTime<Utc>,
}

/// One of the caller's commissions as shown on their profile page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileCommission {
    pub id: Uuid,
    pub status: CommissionStatus,
    pub progress: String,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub complexity: Complexity,
    pub is_public_work: bool,
    pub description: String,
    pub total_price: Option<f64>,
    pub is_nsfw: bool,
    /// Image of the most recent update, if any.
    pub latest_update: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileOverview {
    pub user: UserProfile,
    pub commissions: Vec<ProfileCommission>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileImageKind {
    ProfilePicture,
    Banner,
}

impl ProfileImageKind {
    /// Multipart field carrying the file; also the response key.
    pub fn field_name(&self) -> &'static str {
        match self {
            ProfileImageKind::ProfilePicture => "profile_picture",
            ProfileImageKind::Banner => "banner",
        }
    }
}
