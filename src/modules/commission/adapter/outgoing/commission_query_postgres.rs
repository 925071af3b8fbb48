use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::pricing::Complexity;
use crate::commission::application::{
    domain::{
        entities::{CommissionRecord, CommissionSummary, CommissionUpdate, PendingRequest, Tag},
        status::CommissionStatus,
    },
    ports::outgoing::{CommissionQuery, CommissionQueryError},
};
use crate::request::application::domain::entities::{RequestCounts, RequestStatus};

#[derive(Debug, Clone)]
pub struct CommissionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommissionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_stmt(status: Option<CommissionStatus>) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                c.id,
                c.request_id,
                c.status,
                c.progress,
                c.expected_completion_date,
                c.complexity,
                c.is_public_work,
                c.created_at,
                c.updated_at,
                r.description,
                r.character_count,
                r.alternative_count,
                r.pose_count,
                r.is_nsfw,
                r.total_price,
                u.username AS client_name,
                (
                    SELECT cu.image_path
                    FROM commission_updates cu
                    WHERE cu.commission_id = c.id
                    ORDER BY cu.update_date DESC
                    LIMIT 1
                ) AS latest_update
            FROM commissions c
            INNER JOIN requests r ON r.id = c.request_id
            INNER JOIN users u ON u.id = r.user_id
            WHERE ($1::text IS NULL OR c.status = $1)
            ORDER BY c.created_at DESC
            "#,
            vec![status.map(|s| s.as_str().to_string()).into()],
        )
    }

    fn pending_requests_stmt() -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                r.id AS request_id,
                r.description,
                r.character_count,
                r.alternative_count,
                r.pose_count,
                r.is_nsfw,
                r.total_price,
                r.request_date,
                u.username AS client_name
            FROM requests r
            INNER JOIN users u ON u.id = r.user_id
            WHERE r.status = $1
            ORDER BY r.request_date DESC
            "#,
            vec![RequestStatus::Requested.as_str().into()],
        )
    }

    fn find_by_id_stmt(commission_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                c.id,
                c.request_id,
                c.status,
                c.progress,
                c.expected_completion_date,
                c.actual_completion_date,
                c.complexity,
                c.is_public_work,
                c.created_at,
                c.updated_at,
                r.description,
                r.character_count,
                r.alternative_count,
                r.pose_count,
                r."references",
                r.is_nsfw,
                r.total_price,
                r.user_id AS client_id,
                u.username AS client_name,
                u.email AS client_email
            FROM commissions c
            INNER JOIN requests r ON r.id = c.request_id
            INNER JOIN users u ON u.id = r.user_id
            WHERE c.id = $1
            "#,
            vec![commission_id.into()],
        )
    }

    fn updates_stmt(commission_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT id, title, description, image_path, video_path, update_date
            FROM commission_updates
            WHERE commission_id = $1
            ORDER BY update_date DESC
            "#,
            vec![commission_id.into()],
        )
    }

    fn tags_stmt(commission_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT t.id, t.name
            FROM commission_tags ct
            INNER JOIN tags t ON t.id = ct.tag_id
            WHERE ct.commission_id = $1
            ORDER BY t.name ASC
            "#,
            vec![commission_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> CommissionQueryError {
        CommissionQueryError::DatabaseError(e.to_string())
    }

    fn get<T: sea_orm::TryGetable>(row: &QueryResult, col: &str) -> Result<T, CommissionQueryError> {
        row.try_get("", col).map_err(Self::map_db_err)
    }

    fn utc(row: &QueryResult, col: &str) -> Result<DateTime<Utc>, CommissionQueryError> {
        Self::get::<DateTime<FixedOffset>>(row, col).map(|d| d.with_timezone(&Utc))
    }

    fn utc_opt(row: &QueryResult, col: &str) -> Result<Option<DateTime<Utc>>, CommissionQueryError> {
        Self::get::<Option<DateTime<FixedOffset>>>(row, col)
            .map(|d| d.map(|d| d.with_timezone(&Utc)))
    }

    fn status(row: &QueryResult) -> Result<CommissionStatus, CommissionQueryError> {
        Self::get::<String>(row, "status")?
            .parse()
            .map_err(|e: crate::commission::application::domain::status::UnknownCommissionStatus| {
                CommissionQueryError::DatabaseError(e.to_string())
            })
    }

    fn complexity(row: &QueryResult) -> Result<Complexity, CommissionQueryError> {
        Self::get::<String>(row, "complexity")?
            .parse()
            .map_err(|e: crate::catalog::application::domain::pricing::UnknownComplexity| {
                CommissionQueryError::DatabaseError(e.to_string())
            })
    }

    fn counts(row: &QueryResult) -> Result<RequestCounts, CommissionQueryError> {
        Ok(RequestCounts {
            character_count: Self::get(row, "character_count")?,
            alternative_count: Self::get(row, "alternative_count")?,
            pose_count: Self::get(row, "pose_count")?,
        })
    }

    fn map_summary(row: &QueryResult) -> Result<CommissionSummary, CommissionQueryError> {
        Ok(CommissionSummary {
            id: Self::get(row, "id")?,
            request_id: Self::get(row, "request_id")?,
            status: Self::status(row)?,
            progress: Self::get(row, "progress")?,
            expected_completion_date: Self::utc_opt(row, "expected_completion_date")?,
            complexity: Self::complexity(row)?,
            is_public_work: Self::get(row, "is_public_work")?,
            description: Self::get(row, "description")?,
            counts: Self::counts(row)?,
            is_nsfw: Self::get(row, "is_nsfw")?,
            total_price: Self::get(row, "total_price")?,
            client_name: Self::get(row, "client_name")?,
            latest_update: Self::get(row, "latest_update")?,
            created_at: Self::utc(row, "created_at")?,
            updated_at: Self::utc(row, "updated_at")?,
        })
    }

    fn map_pending(row: &QueryResult) -> Result<PendingRequest, CommissionQueryError> {
        Ok(PendingRequest {
            request_id: Self::get(row, "request_id")?,
            description: Self::get(row, "description")?,
            counts: Self::counts(row)?,
            is_nsfw: Self::get(row, "is_nsfw")?,
            total_price: Self::get(row, "total_price")?,
            request_date: Self::utc(row, "request_date")?,
            client_name: Self::get(row, "client_name")?,
        })
    }

    fn map_record(row: &QueryResult) -> Result<CommissionRecord, CommissionQueryError> {
        let references: Option<serde_json::Value> = Self::get(row, "references")?;
        let client_id: Uuid = Self::get(row, "client_id")?;

        Ok(CommissionRecord {
            id: Self::get(row, "id")?,
            request_id: Self::get(row, "request_id")?,
            client_id: UserId::from(client_id),
            client_name: Self::get(row, "client_name")?,
            client_email: Self::get(row, "client_email")?,
            status: Self::status(row)?,
            progress: Self::get(row, "progress")?,
            expected_completion_date: Self::utc_opt(row, "expected_completion_date")?,
            actual_completion_date: Self::utc_opt(row, "actual_completion_date")?,
            complexity: Self::complexity(row)?,
            is_public_work: Self::get(row, "is_public_work")?,
            description: Self::get(row, "description")?,
            counts: Self::counts(row)?,
            // Unreadable lists degrade to empty.
            references: references
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default(),
            is_nsfw: Self::get(row, "is_nsfw")?,
            total_price: Self::get(row, "total_price")?,
            created_at: Self::utc(row, "created_at")?,
            updated_at: Self::utc(row, "updated_at")?,
        })
    }

    fn map_update(row: &QueryResult) -> Result<CommissionUpdate, CommissionQueryError> {
        Ok(CommissionUpdate {
            id: Self::get(row, "id")?,
            title: Self::get(row, "title")?,
            description: Self::get(row, "description")?,
            image_path: Self::get(row, "image_path")?,
            video_path: Self::get(row, "video_path")?,
            update_date: Self::utc(row, "update_date")?,
        })
    }

    fn map_tag(row: &QueryResult) -> Result<Tag, CommissionQueryError> {
        Ok(Tag {
            id: Self::get(row, "id")?,
            name: Self::get(row, "name")?,
        })
    }
}

#[async_trait]
impl CommissionQuery for CommissionQueryPostgres {
    async fn list(
        &self,
        status: Option<CommissionStatus>,
    ) -> Result<Vec<CommissionSummary>, CommissionQueryError> {
        let rows = self
            .db
            .query_all(Self::list_stmt(status))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter().map(Self::map_summary).collect()
    }

    async fn list_pending_requests(&self) -> Result<Vec<PendingRequest>, CommissionQueryError> {
        let rows = self
            .db
            .query_all(Self::pending_requests_stmt())
            .await
            .map_err(Self::map_db_err)?;

        rows.iter().map(Self::map_pending).collect()
    }

    async fn find_by_id(
        &self,
        commission_id: Uuid,
    ) -> Result<Option<CommissionRecord>, CommissionQueryError> {
        let row = self
            .db
            .query_one(Self::find_by_id_stmt(commission_id))
            .await
            .map_err(Self::map_db_err)?;

        row.as_ref().map(Self::map_record).transpose()
    }

    async fn list_updates(
        &self,
        commission_id: Uuid,
    ) -> Result<Vec<CommissionUpdate>, CommissionQueryError> {
        let rows = self
            .db
            .query_all(Self::updates_stmt(commission_id))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter().map(Self::map_update).collect()
    }

    async fn list_tags(&self, commission_id: Uuid) -> Result<Vec<Tag>, CommissionQueryError> {
        let rows = self
            .db
            .query_all(Self::tags_stmt(commission_id))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter().map(Self::map_tag).collect()
    }
}
