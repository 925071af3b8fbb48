use async_trait::async_trait;

use crate::commission::application::domain::status::CommissionStatus;
use crate::request::application::{
    domain::entities::RequestStatus,
    ports::{
        incoming::use_cases::{
            AcceptRequestCommand, AcceptRequestError, AcceptRequestUseCase, AcceptedRequest,
        },
        outgoing::{NewCommission, RequestQuery, RequestRepository, RequestRepositoryError},
    },
};

/// Turns a `Requested` row into an `Accepted` commission.
#[derive(Debug, Clone)]
pub struct AcceptRequestService<Q, R>
where
    Q: RequestQuery + Send + Sync,
    R: RequestRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> AcceptRequestService<Q, R>
where
    Q: RequestQuery + Send + Sync,
    R: RequestRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> AcceptRequestUseCase for AcceptRequestService<Q, R>
where
    Q: RequestQuery + Send + Sync,
    R: RequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AcceptRequestCommand,
    ) -> Result<AcceptedRequest, AcceptRequestError> {
        let request = self
            .query
            .find_by_id(command.request_id)
            .await
            .map_err(|e| AcceptRequestError::QueryFailed(e.to_string()))?
            .ok_or(AcceptRequestError::NotFound)?;

        if request.status == RequestStatus::Accepted {
            return Err(AcceptRequestError::AlreadyAccepted);
        }

        let complexity = request.complexity();

        let commission_id = self
            .repository
            .accept_request(NewCommission {
                request_id: request.id,
                complexity,
                expected_completion_date: command.expected_completion_date,
                is_public_work: command.is_public_work,
            })
            .await
            .map_err(|e| match e {
                RequestRepositoryError::NotFound => AcceptRequestError::NotFound,
                RequestRepositoryError::AlreadyAccepted => AcceptRequestError::AlreadyAccepted,
                RequestRepositoryError::DatabaseError(msg) => {
                    AcceptRequestError::RepositoryError(msg)
                }
            })?;

        tracing::info!(
            request_id = %request.id,
            %commission_id,
            complexity = %complexity,
            "Request accepted"
        );

        Ok(AcceptedRequest {
            commission_id,
            request_id: request.id,
            status: CommissionStatus::Accepted,
            complexity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::application::domain::pricing::Complexity;
    use crate::request::application::services::test_fixtures::{
        request_detail, MockRequestQuery, MockRequestRepository,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn command(request_id: Uuid) -> AcceptRequestCommand {
        AcceptRequestCommand {
            request_id,
            expected_completion_date: Some(Utc::now()),
            is_public_work: true,
        }
    }

    #[tokio::test]
    async fn creates_commission_with_price_complexity() {
        let mut request = request_detail(Uuid::new_v4(), RequestStatus::Requested);
        request.total_price = Some(120.0);
        let repository = MockRequestRepository::default();

        let service = AcceptRequestService::new(
            MockRequestQuery::with(vec![request.clone()]),
            repository.clone(),
        );

        let accepted = service.execute(command(request.id)).await.unwrap();

        assert_eq!(accepted.status, CommissionStatus::Accepted);
        assert_eq!(accepted.complexity, Complexity::UltraHigh);

        let written = repository.accepted.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].request_id, request.id);
        assert!(written[0].is_public_work);
    }

    #[tokio::test]
    async fn stored_tier_wins_over_discounted_price() {
        let mut request = request_detail(Uuid::new_v4(), RequestStatus::Requested);
        request.total_price = Some(36.0);
        request.stored_complexity = Some(Complexity::Mid);
        let repository = MockRequestRepository::default();

        let service = AcceptRequestService::new(
            MockRequestQuery::with(vec![request.clone()]),
            repository.clone(),
        );

        let accepted = service.execute(command(request.id)).await.unwrap();

        assert_eq!(accepted.complexity, Complexity::Mid);
        assert_eq!(repository.accepted.lock().unwrap()[0].complexity, Complexity::Mid);
    }

    #[tokio::test]
    async fn missing_price_falls_back_to_count_estimate() {
        let mut request = request_detail(Uuid::new_v4(), RequestStatus::Requested);
        request.total_price = None;

        let service = AcceptRequestService::new(
            MockRequestQuery::with(vec![request.clone()]),
            MockRequestRepository::default(),
        );

        let accepted = service.execute(command(request.id)).await.unwrap();

        assert_eq!(accepted.complexity, Complexity::Low);
    }

    #[tokio::test]
    async fn accepted_request_is_rejected() {
        let request = request_detail(Uuid::new_v4(), RequestStatus::Accepted);
        let repository = MockRequestRepository::default();

        let service = AcceptRequestService::new(
            MockRequestQuery::with(vec![request.clone()]),
            repository.clone(),
        );

        assert!(matches!(
            service.execute(command(request.id)).await,
            Err(AcceptRequestError::AlreadyAccepted)
        ));
        assert!(repository.accepted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_accept_surfaces_conflict() {
        let request = request_detail(Uuid::new_v4(), RequestStatus::Requested);
        let repository = MockRequestRepository {
            accept_error: Some(|| RequestRepositoryError::AlreadyAccepted),
            ..Default::default()
        };

        let service =
            AcceptRequestService::new(MockRequestQuery::with(vec![request.clone()]), repository);

        assert!(matches!(
            service.execute(command(request.id)).await,
            Err(AcceptRequestError::AlreadyAccepted)
        ));
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let service = AcceptRequestService::new(
            MockRequestQuery::default(),
            MockRequestRepository::default(),
        );

        assert!(matches!(
            service.execute(command(Uuid::new_v4())).await,
            Err(AcceptRequestError::NotFound)
        ));
    }
}
