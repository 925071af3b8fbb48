use async_trait::async_trait;
use std::sync::Arc;

use crate::commission::application::{
    domain::entities::CommissionRecord,
    ports::{
        incoming::use_cases::{AddUpdateCommand, AddUpdateError, AddUpdateUseCase, AddedUpdate},
        outgoing::{
            CommissionQuery, CommissionRepository, CommissionRepositoryError, NewCommissionUpdate,
        },
    },
};
use crate::email::application::ports::outgoing::{CommissionNotifier, StatusUpdateNotice};
use crate::shared::storage::{FileStorage, UploadPolicy};

/// Posts a progress update and tells the client where the commission stands.
pub struct AddUpdateService<Q, R>
where
    Q: CommissionQuery + Send + Sync,
    R: CommissionRepository + Send + Sync,
{
    query: Q,
    repository: R,
    storage: Arc<dyn FileStorage + Send + Sync>,
    notifier: Arc<dyn CommissionNotifier + Send + Sync>,
}

impl<Q, R> AddUpdateService<Q, R>
where
    Q: CommissionQuery + Send + Sync,
    R: CommissionRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        storage: Arc<dyn FileStorage + Send + Sync>,
        notifier: Arc<dyn CommissionNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            storage,
            notifier,
        }
    }

    /// Returns `(image_path, video_path)`; at most one is set.
    async fn store_media(
        &self,
        command: &AddUpdateCommand,
    ) -> Result<(Option<String>, Option<String>), AddUpdateError> {
        let Some(file) = command.media() else {
            return Ok((None, None));
        };

        let prefix = format!("commission-{}-update", command.commission_id());
        let url = self
            .storage
            .store(
                UploadPolicy::commission_media().directory,
                &file.stored_name(&prefix),
                &file.bytes,
            )
            .await
            .map_err(|e| AddUpdateError::StorageFailed(e.to_string()))?;

        if file.is_video() {
            Ok((None, Some(url)))
        } else {
            Ok((Some(url), None))
        }
    }

    async fn notify_client(&self, record: CommissionRecord) {
        let commission_id = record.id;
        let notice = StatusUpdateNotice {
            client_email: record.client_email,
            status: record.status.to_string(),
            progress: record.progress,
            expected_completion_date: record.expected_completion_date,
        };

        if let Err(e) = self.notifier.notify_status_update(notice).await {
            tracing::warn!(error = %e, %commission_id, "Failed to email client about update");
        }
    }
}

#[async_trait]
impl<Q, R> AddUpdateUseCase for AddUpdateService<Q, R>
where
    Q: CommissionQuery + Send + Sync,
    R: CommissionRepository + Send + Sync,
{
    async fn execute(&self, command: AddUpdateCommand) -> Result<AddedUpdate, AddUpdateError> {
        let record = self
            .query
            .find_by_id(command.commission_id())
            .await
            .map_err(|e| AddUpdateError::QueryFailed(e.to_string()))?
            .ok_or(AddUpdateError::NotFound)?;

        let (image_path, video_path) = self.store_media(&command).await?;

        let update_id = self
            .repository
            .add_update(NewCommissionUpdate {
                commission_id: command.commission_id(),
                title: command.title().to_string(),
                description: command.description().map(str::to_string),
                image_path,
                video_path,
            })
            .await
            .map_err(|e| match e {
                CommissionRepositoryError::NotFound => AddUpdateError::NotFound,
                CommissionRepositoryError::DatabaseError(msg) => {
                    AddUpdateError::RepositoryError(msg)
                }
            })?;

        tracing::info!(%update_id, commission_id = %record.id, "Commission update posted");

        self.notify_client(record).await;

        Ok(AddedUpdate { update_id })
    }
}
