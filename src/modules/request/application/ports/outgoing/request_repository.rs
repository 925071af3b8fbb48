use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::pricing::Complexity;
use crate::request::application::domain::entities::RequestCounts;

#[derive(Debug, Clone, PartialEq)]
pub struct NewRequest {
    pub owner: UserId,
    pub service_id: Uuid,
    pub description: String,
    pub counts: RequestCounts,
    pub references: Vec<String>,
    pub is_nsfw: bool,
    /// Charged price, after any VIP discount.
    pub total_price: f64,
    pub complexity: Complexity,
}

/// Commission row created when a request is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCommission {
    pub request_id: Uuid,
    pub complexity: Complexity,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub is_public_work: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestRepositoryError {
    #[error("Request not found")]
    NotFound,

    #[error("Request has already been accepted")]
    AlreadyAccepted,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Stores a new `Requested` row and returns its id.
    async fn create_request(&self, data: NewRequest) -> Result<Uuid, RequestRepositoryError>;

    /// Atomically marks the request `Accepted` and inserts its commission.
    /// Returns the new commission id.
    async fn accept_request(&self, data: NewCommission) -> Result<Uuid, RequestRepositoryError>;
}
