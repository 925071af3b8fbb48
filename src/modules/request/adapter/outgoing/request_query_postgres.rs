use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::pricing::Complexity;
use crate::request::application::{
    domain::entities::{RequestCounts, RequestDetail, RequestStatus, RequestSummary},
    ports::outgoing::{RequestQuery, RequestQueryError},
};

#[derive(Debug, Clone)]
pub struct RequestQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RequestQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_for_user_stmt(owner: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                r.id,
                r.service_id,
                s.name AS service_name,
                r.description,
                r.character_count,
                r.alternative_count,
                r.pose_count,
                r.is_nsfw,
                r.total_price,
                r.status,
                r.request_date
            FROM requests r
            INNER JOIN services s ON s.id = r.service_id
            WHERE r.user_id = $1
            ORDER BY r.request_date DESC
            "#,
            vec![owner.into()],
        )
    }

    fn find_by_id_stmt(request_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                r.id,
                r.user_id,
                r.service_id,
                s.name AS service_name,
                r.description,
                r.character_count,
                r.alternative_count,
                r.pose_count,
                r."references",
                r.is_nsfw,
                r.total_price,
                r.complexity,
                r.status,
                r.request_date
            FROM requests r
            INNER JOIN services s ON s.id = r.service_id
            WHERE r.id = $1
            "#,
            vec![request_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> RequestQueryError {
        RequestQueryError::DatabaseError(e.to_string())
    }

    fn parse_status(raw: &str) -> Result<RequestStatus, RequestQueryError> {
        raw.parse::<RequestStatus>()
            .map_err(|e| RequestQueryError::DatabaseError(e.to_string()))
    }

    fn parse_complexity(raw: Option<String>) -> Result<Option<Complexity>, RequestQueryError> {
        raw.map(|value| value.parse::<Complexity>())
            .transpose()
            .map_err(|e| RequestQueryError::DatabaseError(e.to_string()))
    }

    /// Unreadable reference lists degrade to empty rather than failing the read.
    fn parse_references(raw: Option<serde_json::Value>) -> Vec<String> {
        raw.and_then(|value| serde_json::from_value::<Vec<String>>(value).ok())
            .unwrap_or_default()
    }

    fn counts(row: &QueryResult) -> Result<RequestCounts, RequestQueryError> {
        Ok(RequestCounts {
            character_count: row.try_get("", "character_count").map_err(Self::map_db_err)?,
            alternative_count: row
                .try_get("", "alternative_count")
                .map_err(Self::map_db_err)?,
            pose_count: row.try_get("", "pose_count").map_err(Self::map_db_err)?,
        })
    }

    fn map_summary(row: &QueryResult) -> Result<RequestSummary, RequestQueryError> {
        let status: String = row.try_get("", "status").map_err(Self::map_db_err)?;
        let request_date: DateTime<FixedOffset> =
            row.try_get("", "request_date").map_err(Self::map_db_err)?;

        Ok(RequestSummary {
            id: row.try_get("", "id").map_err(Self::map_db_err)?,
            service_id: row.try_get("", "service_id").map_err(Self::map_db_err)?,
            service_name: row.try_get("", "service_name").map_err(Self::map_db_err)?,
            description: row.try_get("", "description").map_err(Self::map_db_err)?,
            counts: Self::counts(row)?,
            is_nsfw: row.try_get("", "is_nsfw").map_err(Self::map_db_err)?,
            total_price: row.try_get("", "total_price").map_err(Self::map_db_err)?,
            status: Self::parse_status(&status)?,
            request_date: request_date.with_timezone(&Utc),
        })
    }

    fn map_detail(row: &QueryResult) -> Result<RequestDetail, RequestQueryError> {
        let summary = Self::map_summary(row)?;
        let references: Option<serde_json::Value> =
            row.try_get("", "references").map_err(Self::map_db_err)?;
        let complexity: Option<String> =
            row.try_get("", "complexity").map_err(Self::map_db_err)?;

        Ok(RequestDetail {
            id: summary.id,
            user_id: row.try_get("", "user_id").map_err(Self::map_db_err)?,
            service_id: summary.service_id,
            service_name: summary.service_name,
            description: summary.description,
            counts: summary.counts,
            references: Self::parse_references(references),
            is_nsfw: summary.is_nsfw,
            total_price: summary.total_price,
            stored_complexity: Self::parse_complexity(complexity)?,
            status: summary.status,
            request_date: summary.request_date,
        })
    }
}

#[async_trait]
impl RequestQuery for RequestQueryPostgres {
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<RequestSummary>, RequestQueryError> {
        let rows = self
            .db
            .query_all(Self::list_for_user_stmt(owner.value()))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter().map(Self::map_summary).collect()
    }

    async fn find_by_id(&self, request_id: Uuid) -> Result<Option<RequestDetail>, RequestQueryError> {
        let row = self
            .db
            .query_one(Self::find_by_id_stmt(request_id))
            .await
            .map_err(Self::map_db_err)?;

        row.as_ref().map(Self::map_detail).transpose()
    }
}
