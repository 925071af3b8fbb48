use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::commission::application::{
    domain::status::CommissionStatus,
    ports::{
        incoming::use_cases::{
            CommissionState, UpdateCommissionCommand, UpdateCommissionError,
            UpdateCommissionUseCase,
        },
        outgoing::{CommissionChanges, CommissionQuery, CommissionRepository, CommissionRepositoryError},
    },
};
use crate::email::application::ports::outgoing::{CommissionNotifier, StatusUpdateNotice};

/// Operator edits. Status only moves forward and a status change emails the client.
pub struct UpdateCommissionService<Q, R>
where
    Q: CommissionQuery + Send + Sync,
    R: CommissionRepository + Send + Sync,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn CommissionNotifier + Send + Sync>,
}

impl<Q, R> UpdateCommissionService<Q, R>
where
    Q: CommissionQuery + Send + Sync,
    R: CommissionRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, notifier: Arc<dyn CommissionNotifier + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateCommissionUseCase for UpdateCommissionService<Q, R>
where
    Q: CommissionQuery + Send + Sync,
    R: CommissionRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCommissionCommand,
    ) -> Result<CommissionState, UpdateCommissionError> {
        let record = self
            .query
            .find_by_id(command.commission_id)
            .await
            .map_err(|e| UpdateCommissionError::QueryFailed(e.to_string()))?
            .ok_or(UpdateCommissionError::NotFound)?;

        // Re-sending the current status is not a transition.
        let new_status = command.status.filter(|s| *s != record.status);

        if let Some(next) = new_status {
            if !record.status.can_transition_to(next) {
                return Err(UpdateCommissionError::InvalidTransition {
                    from: record.status,
                    to: next,
                });
            }
        }

        let changes = CommissionChanges {
            status: new_status,
            progress: command.progress,
            expected_completion_date: command.expected_completion_date,
            actual_completion_date: new_status
                .filter(CommissionStatus::is_finished)
                .map(|_| Utc::now()),
            is_public_work: command.is_public_work,
        };

        if !changes.is_empty() {
            self.repository
                .apply_changes(record.id, changes.clone())
                .await
                .map_err(|e| match e {
                    CommissionRepositoryError::NotFound => UpdateCommissionError::NotFound,
                    CommissionRepositoryError::DatabaseError(msg) => {
                        UpdateCommissionError::RepositoryError(msg)
                    }
                })?;
        }

        let state = CommissionState {
            id: record.id,
            status: new_status.unwrap_or(record.status),
            progress: changes.progress.unwrap_or(record.progress),
            expected_completion_date: changes
                .expected_completion_date
                .or(record.expected_completion_date),
            actual_completion_date: changes
                .actual_completion_date
                .or(record.actual_completion_date),
            is_public_work: changes.is_public_work.unwrap_or(record.is_public_work),
        };

        if let Some(status) = new_status {
            tracing::info!(commission_id = %state.id, from = %record.status, to = %status, "Commission status changed");

            let notice = StatusUpdateNotice {
                client_email: record.client_email,
                status: status.to_string(),
                progress: state.progress.clone(),
                expected_completion_date: state.expected_completion_date,
            };
            if let Err(e) = self.notifier.notify_status_update(notice).await {
                tracing::warn!(error = %e, commission_id = %state.id, "Failed to email client about status change");
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::application::services::test_fixtures::{
        record, MockCommissionQuery, MockCommissionRepository, RecordingNotifier,
    };
    use uuid::Uuid;

    struct Harness {
        repository: MockCommissionRepository,
        notifier: Arc<RecordingNotifier>,
        service: UpdateCommissionService<MockCommissionQuery, MockCommissionRepository>,
    }

    fn harness(status: CommissionStatus) -> (Uuid, Harness) {
        let commission = record(status, false, false);
        let id = commission.id;
        let repository = MockCommissionRepository::default();
        let notifier = Arc::new(RecordingNotifier::default());
        let service = UpdateCommissionService::new(
            MockCommissionQuery::with(vec![commission]),
            repository.clone(),
            notifier.clone(),
        );

        (
            id,
            Harness {
                repository,
                notifier,
                service,
            },
        )
    }

    fn status_change(id: Uuid, status: CommissionStatus) -> UpdateCommissionCommand {
        UpdateCommissionCommand::new(id, Some(status), None, None, None).unwrap()
    }

    #[tokio::test]
    async fn forward_move_is_saved_and_emailed() {
        let (id, h) = harness(CommissionStatus::Accepted);

        let state = h
            .service
            .execute(status_change(id, CommissionStatus::Working))
            .await
            .unwrap();

        assert_eq!(state.status, CommissionStatus::Working);
        assert!(state.actual_completion_date.is_none());

        let changes = h.repository.changes.lock().unwrap();
        assert_eq!(changes[0].1.status, Some(CommissionStatus::Working));

        let notices = h.notifier.notices.lock().unwrap();
        assert_eq!(notices[0].status, "Working");
    }

    #[tokio::test]
    async fn finishing_stamps_completion_date() {
        let (id, h) = harness(CommissionStatus::Waiting);

        let state = h
            .service
            .execute(status_change(id, CommissionStatus::Finished))
            .await
            .unwrap();

        assert!(state.actual_completion_date.is_some());
        let changes = h.repository.changes.lock().unwrap();
        assert!(changes[0].1.actual_completion_date.is_some());
    }

    #[tokio::test]
    async fn backward_move_is_rejected() {
        let (id, h) = harness(CommissionStatus::Waiting);

        let result = h
            .service
            .execute(status_change(id, CommissionStatus::Working))
            .await;

        assert!(matches!(
            result,
            Err(UpdateCommissionError::InvalidTransition {
                from: CommissionStatus::Waiting,
                to: CommissionStatus::Working
            })
        ));
        assert!(h.repository.changes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn progress_only_edit_sends_no_email() {
        let (id, h) = harness(CommissionStatus::Working);
        let command =
            UpdateCommissionCommand::new(id, None, Some("Coloring".into()), None, Some(true))
                .unwrap();

        let state = h.service.execute(command).await.unwrap();

        assert_eq!(state.progress, "Coloring");
        assert!(state.is_public_work);
        assert!(h.notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn same_status_is_not_a_transition() {
        let (id, h) = harness(CommissionStatus::Working);

        let state = h
            .service
            .execute(status_change(id, CommissionStatus::Working))
            .await
            .unwrap();

        assert_eq!(state.status, CommissionStatus::Working);
        assert!(h.repository.changes.lock().unwrap().is_empty());
        assert!(h.notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_commission() {
        let (_, h) = harness(CommissionStatus::Working);

        assert!(matches!(
            h.service
                .execute(status_change(Uuid::new_v4(), CommissionStatus::Finished))
                .await,
            Err(UpdateCommissionError::NotFound)
        ));
    }
}
