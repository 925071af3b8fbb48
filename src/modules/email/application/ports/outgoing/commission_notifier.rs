use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Operator-facing summary of a freshly submitted request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequestNotice {
    pub username: String,
    pub service_name: String,
    pub character_count: i32,
    pub alternative_count: i32,
    pub pose_count: i32,
    pub total_price: f64,
    pub is_nsfw: bool,
    pub description: String,
}

/// Client-facing state of a commission after a change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdateNotice {
    pub client_email: String,
    pub status: String,
    pub progress: String,
    pub expected_completion_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Email sending failed: {0}")]
    SendFailed(String),
}

#[async_trait]
pub trait CommissionNotifier: Send + Sync {
    async fn notify_new_request(&self, notice: NewRequestNotice) -> Result<(), NotificationError>;

    async fn notify_status_update(
        &self,
        notice: StatusUpdateNotice,
    ) -> Result<(), NotificationError>;
}
