use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::commissions;
use crate::commission::application::{
    domain::entities::Tag,
    ports::outgoing::{
        CommissionChanges, CommissionRepository, CommissionRepositoryError, NewCommissionUpdate,
    },
};

#[derive(Debug, Clone)]
pub struct CommissionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommissionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CommissionRepositoryError {
        CommissionRepositoryError::DatabaseError(e.to_string())
    }

    fn touch_commission_stmt(commission_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE commissions
            SET updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            "#,
            vec![commission_id.into()],
        )
    }

    fn insert_update_stmt(update_id: Uuid, data: &NewCommissionUpdate) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO commission_updates (
                id,
                commission_id,
                title,
                description,
                image_path,
                video_path
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
            vec![
                update_id.into(),
                data.commission_id.into(),
                data.title.clone().into(),
                data.description.clone().into(),
                data.image_path.clone().into(),
                data.video_path.clone().into(),
            ],
        )
    }

    fn commission_exists_stmt(commission_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS(SELECT 1 FROM commissions WHERE id = $1) AS commission_exists
            "#,
            vec![commission_id.into()],
        )
    }

    /// Returns the existing tag when the name is taken.
    fn upsert_tag_stmt(name: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO tags (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
            vec![name.into()],
        )
    }

    fn link_tag_stmt(commission_id: Uuid, tag_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO commission_tags (commission_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
            vec![commission_id.into(), tag_id.into()],
        )
    }

    async fn fail(txn: DatabaseTransaction, err: CommissionRepositoryError) -> CommissionRepositoryError {
        let _ = txn.rollback().await;
        err
    }

    async fn upsert_and_link(
        txn: &DatabaseTransaction,
        commission_id: Uuid,
        name: &str,
    ) -> Result<Tag, CommissionRepositoryError> {
        let exists = txn
            .query_one(Self::commission_exists_stmt(commission_id))
            .await
            .map_err(Self::map_db_err)?
            .map(|row| row.try_get::<bool>("", "commission_exists"))
            .transpose()
            .map_err(Self::map_db_err)?
            .unwrap_or(false);

        if !exists {
            return Err(CommissionRepositoryError::NotFound);
        }

        let row = txn
            .query_one(Self::upsert_tag_stmt(name))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                CommissionRepositoryError::DatabaseError("tag upsert returned no row".to_string())
            })?;

        let tag = Tag {
            id: row.try_get("", "id").map_err(Self::map_db_err)?,
            name: row.try_get("", "name").map_err(Self::map_db_err)?,
        };

        txn.execute(Self::link_tag_stmt(commission_id, tag.id))
            .await
            .map_err(Self::map_db_err)?;

        Ok(tag)
    }
}

#[async_trait]
impl CommissionRepository for CommissionRepositoryPostgres {
    async fn add_update(
        &self,
        update: NewCommissionUpdate,
    ) -> Result<Uuid, CommissionRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let touched = match txn
            .execute(Self::touch_commission_stmt(update.commission_id))
            .await
        {
            Ok(res) => res,
            Err(e) => return Err(Self::fail(txn, Self::map_db_err(e)).await),
        };

        if touched.rows_affected() == 0 {
            return Err(Self::fail(txn, CommissionRepositoryError::NotFound).await);
        }

        let update_id = Uuid::new_v4();

        if let Err(e) = txn
            .execute(Self::insert_update_stmt(update_id, &update))
            .await
        {
            return Err(Self::fail(txn, Self::map_db_err(e)).await);
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(update_id)
    }

    async fn apply_changes(
        &self,
        commission_id: Uuid,
        changes: CommissionChanges,
    ) -> Result<(), CommissionRepositoryError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut update = commissions::Entity::update_many()
            .filter(commissions::Column::Id.eq(commission_id));

        if let Some(status) = changes.status {
            update = update.col_expr(commissions::Column::Status, Expr::value(status.as_str()));
        }
        if let Some(progress) = changes.progress {
            update = update.col_expr(commissions::Column::Progress, Expr::value(progress));
        }
        if let Some(date) = changes.expected_completion_date {
            update = update.col_expr(
                commissions::Column::ExpectedCompletionDate,
                Expr::value(date.fixed_offset()),
            );
        }
        if let Some(date) = changes.actual_completion_date {
            update = update.col_expr(
                commissions::Column::ActualCompletionDate,
                Expr::value(date.fixed_offset()),
            );
        }
        if let Some(is_public_work) = changes.is_public_work {
            update = update.col_expr(commissions::Column::IsPublicWork, Expr::value(is_public_work));
        }

        let result = update.exec(&*self.db).await.map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommissionRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn attach_tag(
        &self,
        commission_id: Uuid,
        name: &str,
    ) -> Result<Tag, CommissionRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::upsert_and_link(&txn, commission_id, name).await {
            Ok(tag) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(tag)
            }
            Err(e) => Err(Self::fail(txn, e).await),
        }
    }
}
