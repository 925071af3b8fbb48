use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::storage::{FileStorage, UploadPolicy};
use crate::user::application::ports::{
    incoming::use_cases::{
        UploadProfileImageCommand, UploadProfileImageError, UploadProfileImageUseCase,
        UploadedImage,
    },
    outgoing::{ProfileRepository, ProfileRepositoryError},
};

/// Stores a profile picture or banner and points the user row at it.
pub struct UploadProfileImageService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
    storage: Arc<dyn FileStorage + Send + Sync>,
}

impl<R> UploadProfileImageService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R, storage: Arc<dyn FileStorage + Send + Sync>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R> UploadProfileImageUseCase for UploadProfileImageService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UploadProfileImageCommand,
    ) -> Result<UploadedImage, UploadProfileImageError> {
        let file = command.file();
        let prefix = format!("user-{}", command.user_id());

        let path = self
            .storage
            .store(
                UploadPolicy::profile_image().directory,
                &file.stored_name(&prefix),
                &file.bytes,
            )
            .await
            .map_err(|e| UploadProfileImageError::StorageFailed(e.to_string()))?;

        self.repository
            .set_image(command.user_id(), command.kind(), &path)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UploadProfileImageError::NotFound,
                other => UploadProfileImageError::RepositoryError(other.to_string()),
            })?;

        Ok(UploadedImage { path })
    }
}
