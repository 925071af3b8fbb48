use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::requests;
use crate::auth::adapter::outgoing::user_repository_postgres::is_unique_violation;
use crate::commission::application::domain::status::CommissionStatus;
use crate::request::application::{
    domain::entities::RequestStatus,
    ports::outgoing::{NewCommission, NewRequest, RequestRepository, RequestRepositoryError},
};

#[derive(Debug, Clone)]
pub struct RequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> RequestRepositoryError {
        RequestRepositoryError::DatabaseError(e.to_string())
    }

    /// Flips `Requested` to `Accepted`; affects no row when the request is
    /// missing or was accepted already.
    fn mark_accepted_stmt(request_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE requests
            SET status = $2
            WHERE id = $1
              AND status = $3
            "#,
            vec![
                request_id.into(),
                RequestStatus::Accepted.as_str().into(),
                RequestStatus::Requested.as_str().into(),
            ],
        )
    }

    fn request_exists_stmt(request_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS(SELECT 1 FROM requests WHERE id = $1) AS request_exists
            "#,
            vec![request_id.into()],
        )
    }

    fn insert_commission_stmt(commission_id: Uuid, data: &NewCommission) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO commissions (
                id,
                request_id,
                status,
                expected_completion_date,
                complexity,
                is_public_work
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
            vec![
                commission_id.into(),
                data.request_id.into(),
                CommissionStatus::Accepted.as_str().into(),
                data.expected_completion_date.into(),
                data.complexity.as_str().into(),
                data.is_public_work.into(),
            ],
        )
    }

    async fn resolve_not_accepted<C: ConnectionTrait>(
        conn: &C,
        request_id: Uuid,
    ) -> RequestRepositoryError {
        let exists = conn
            .query_one(Self::request_exists_stmt(request_id))
            .await
            .and_then(|row| match row {
                Some(row) => row.try_get::<bool>("", "request_exists"),
                None => Ok(false),
            });

        match exists {
            Ok(true) => RequestRepositoryError::AlreadyAccepted,
            Ok(false) => RequestRepositoryError::NotFound,
            Err(e) => Self::map_db_err(e),
        }
    }
}

#[async_trait]
impl RequestRepository for RequestRepositoryPostgres {
    async fn create_request(&self, data: NewRequest) -> Result<Uuid, RequestRepositoryError> {
        let id = Uuid::new_v4();

        let model = requests::ActiveModel {
            id: Set(id),
            user_id: Set(data.owner.value()),
            service_id: Set(data.service_id),
            description: Set(data.description),
            character_count: Set(data.counts.character_count),
            alternative_count: Set(data.counts.alternative_count),
            pose_count: Set(data.counts.pose_count),
            references: Set(serde_json::json!(data.references)),
            is_nsfw: Set(data.is_nsfw),
            total_price: Set(Some(data.total_price)),
            complexity: Set(Some(data.complexity.as_str().to_string())),
            status: Set(RequestStatus::Requested.as_str().to_string()),
            request_date: NotSet,
        };

        requests::Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(id)
    }

    async fn accept_request(&self, data: NewCommission) -> Result<Uuid, RequestRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let updated = match txn.execute(Self::mark_accepted_stmt(data.request_id)).await {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if updated.rows_affected() == 0 {
            let err = Self::resolve_not_accepted(&txn, data.request_id).await;
            let _ = txn.rollback().await;
            return Err(err);
        }

        let commission_id = Uuid::new_v4();

        if let Err(e) = txn
            .execute(Self::insert_commission_stmt(commission_id, &data))
            .await
        {
            let _ = txn.rollback().await;
            if is_unique_violation(&e) {
                return Err(RequestRepositoryError::AlreadyAccepted);
            }
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(commission_id)
    }
}
