use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::shared::storage::{UploadPolicy, UploadRejection, UploadedFile};
use crate::user::application::domain::entities::ProfileImageKind;

#[derive(Debug, Clone)]
pub struct UploadProfileImageCommand {
    user_id: UserId,
    kind: ProfileImageKind,
    file: UploadedFile,
}

impl UploadProfileImageCommand {
    pub fn new(
        user_id: UserId,
        kind: ProfileImageKind,
        file: UploadedFile,
    ) -> Result<Self, UploadRejection> {
        UploadPolicy::profile_image().check(&file)?;
        Ok(Self {
            user_id,
            kind,
            file,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn kind(&self) -> ProfileImageKind {
        self.kind
    }

    pub fn file(&self) -> &UploadedFile {
        &self.file
    }
}

/// Public path of the stored image.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UploadedImage {
    pub path: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadProfileImageError {
    #[error("User not found")]
    NotFound,

    #[error("Failed to store image: {0}")]
    StorageFailed(String),

    #[error("Failed to save image path: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UploadProfileImageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UploadProfileImageCommand,
    ) -> Result<UploadedImage, UploadProfileImageError>;
}
