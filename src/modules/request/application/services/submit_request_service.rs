use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
use crate::catalog::application::domain::pricing::{
    PriceCalculator, PriceQuote, COUNT_ESTIMATE_BASE,
};
use crate::catalog::application::ports::incoming::use_cases::{
    GetServiceError, GetServiceUseCase,
};
use crate::email::application::ports::outgoing::{CommissionNotifier, NewRequestNotice};
use crate::request::application::ports::{
    incoming::use_cases::{
        RequesterIdentity, SubmitRequestCommand, SubmitRequestError, SubmitRequestUseCase,
        SubmittedRequest,
    },
    outgoing::{NewRequest, RequestRepository},
};
use crate::shared::storage::{FileStorage, UploadPolicy};

/// Prices, stores and announces a new commission request.
pub struct SubmitRequestService<R>
where
    R: RequestRepository + Send + Sync,
{
    repository: R,
    services: Arc<dyn GetServiceUseCase + Send + Sync>,
    register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    storage: Arc<dyn FileStorage + Send + Sync>,
    notifier: Arc<dyn CommissionNotifier + Send + Sync>,
}

impl<R> SubmitRequestService<R>
where
    R: RequestRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        services: Arc<dyn GetServiceUseCase + Send + Sync>,
        register: Arc<dyn RegisterUserUseCase + Send + Sync>,
        storage: Arc<dyn FileStorage + Send + Sync>,
        notifier: Arc<dyn CommissionNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            services,
            register,
            storage,
            notifier,
        }
    }

    async fn store_references(
        &self,
        command: &SubmitRequestCommand,
    ) -> Result<Vec<String>, SubmitRequestError> {
        let directory = UploadPolicy::reference_image().directory;
        let mut urls = Vec::with_capacity(command.references().len());

        for file in command.references() {
            let url = self
                .storage
                .store(directory, &file.stored_name("reference"), &file.bytes)
                .await
                .map_err(|e| SubmitRequestError::StorageFailed(e.to_string()))?;
            urls.push(url);
        }

        Ok(urls)
    }
}

#[async_trait]
impl<R> SubmitRequestUseCase for SubmitRequestService<R>
where
    R: RequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitRequestCommand,
    ) -> Result<SubmittedRequest, SubmitRequestError> {
        let service = self
            .services
            .execute(command.service_id())
            .await
            .map_err(|e| match e {
                GetServiceError::NotFound => SubmitRequestError::ServiceNotFound,
                GetServiceError::QueryFailed(msg) => SubmitRequestError::QueryFailed(msg),
            })?;

        let (owner, username, is_vip, token) = match command.requester() {
            RequesterIdentity::Known(requester) => (
                requester.user_id,
                requester.username.clone(),
                requester.is_vip,
                None,
            ),
            RequesterIdentity::NewAccount(registration) => {
                let session = self
                    .register
                    .execute(registration.clone())
                    .await
                    .map_err(SubmitRequestError::Registration)?;

                tracing::info!(user_id = %session.user.id, "Registered client during request submission");

                (
                    UserId::from(session.user.id),
                    session.user.username,
                    session.user.is_vip,
                    Some(session.token),
                )
            }
        };

        let references = self.store_references(&command).await?;

        let counts = command.counts();
        let quote = if command.selections().is_empty() {
            PriceQuote::from_total(COUNT_ESTIMATE_BASE, counts.estimated_total(), is_vip)
        } else {
            PriceCalculator::new(service.base_price, &service.options)
                .quote(command.selections(), is_vip)
        };

        let request_id = self
            .repository
            .create_request(NewRequest {
                owner,
                service_id: service.id,
                description: command.description().to_string(),
                counts,
                references,
                is_nsfw: command.is_nsfw(),
                total_price: quote.total_price,
                complexity: quote.complexity,
            })
            .await
            .map_err(|e| SubmitRequestError::RepositoryError(e.to_string()))?;

        tracing::info!(
            %request_id,
            user_id = %owner,
            total_price = quote.total_price,
            complexity = %quote.complexity,
            "Commission request submitted"
        );

        let notice = NewRequestNotice {
            username,
            service_name: service.name,
            character_count: counts.character_count,
            alternative_count: counts.alternative_count,
            pose_count: counts.pose_count,
            total_price: quote.total_price,
            is_nsfw: command.is_nsfw(),
            description: command.description().to_string(),
        };

        if let Err(e) = self.notifier.notify_new_request(notice).await {
            tracing::warn!(%request_id, error = %e, "New request notification failed");
        }

        Ok(SubmittedRequest {
            request_id,
            total_price: quote.total_price,
            token,
        })
    }
}
