use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{RegisterCommand, RegisterError};
use crate::catalog::application::domain::entities::OptionSelection;
use crate::request::application::domain::entities::RequestCounts;
use crate::shared::storage::{UploadPolicy, UploadRejection, UploadedFile};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Already-authenticated client.
#[derive(Debug, Clone, PartialEq)]
pub struct Requester {
    pub user_id: UserId,
    pub username: String,
    pub is_vip: bool,
}

/// Who is submitting: a known client, or a visitor who registers inline.
#[derive(Debug, Clone)]
pub enum RequesterIdentity {
    Known(Requester),
    NewAccount(RegisterCommand),
}

#[derive(Debug, Clone)]
pub struct SubmitRequestCommand {
    service_id: Uuid,
    description: String,
    counts: RequestCounts,
    is_nsfw: bool,
    selections: Vec<OptionSelection>,
    references: Vec<UploadedFile>,
    requester: RequesterIdentity,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitRequestCommandError {
    #[error("Service ID and description are required")]
    MissingFields,

    #[error("Invalid reference upload: {0}")]
    InvalidReference(#[from] UploadRejection),
}

impl SubmitRequestCommand {
    pub fn new(
        service_id: Option<Uuid>,
        description: Option<String>,
        counts: RequestCounts,
        is_nsfw: bool,
        selections: Vec<OptionSelection>,
        references: Vec<UploadedFile>,
        requester: RequesterIdentity,
    ) -> Result<Self, SubmitRequestCommandError> {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let (Some(service_id), Some(description)) = (service_id, description) else {
            return Err(SubmitRequestCommandError::MissingFields);
        };

        UploadPolicy::reference_image().check_all(&references)?;

        Ok(Self {
            service_id,
            description,
            counts,
            is_nsfw,
            selections,
            references,
            requester,
        })
    }

    pub fn service_id(&self) -> Uuid {
        self.service_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn counts(&self) -> RequestCounts {
        self.counts
    }

    pub fn is_nsfw(&self) -> bool {
        self.is_nsfw
    }

    pub fn selections(&self) -> &[OptionSelection] {
        &self.selections
    }

    pub fn references(&self) -> &[UploadedFile] {
        &self.references
    }

    pub fn requester(&self) -> &RequesterIdentity {
        &self.requester
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmittedRequest {
    pub request_id: Uuid,
    pub total_price: f64,
    /// Set only when the submitter was registered by this request.
    pub token: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitRequestError {
    #[error("Service not found")]
    ServiceNotFound,

    #[error("Registration failed: {0}")]
    Registration(RegisterError),

    #[error("Failed to store reference: {0}")]
    StorageFailed(String),

    #[error("Failed to load service: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitRequestCommand,
    ) -> Result<SubmittedRequest, SubmitRequestError>;
}
