use async_trait::async_trait;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::adapter::outgoing::user_repository_postgres::is_unique_violation;
use crate::auth::application::domain::entities::UserId;
use crate::user::application::{
    domain::entities::ProfileImageKind,
    ports::outgoing::{ProfileRepository, ProfileRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ProfileRepositoryError {
        if is_unique_violation(&e) {
            return ProfileRepositoryError::UsernameTaken;
        }
        ProfileRepositoryError::DatabaseError(e.to_string())
    }

    fn image_column(kind: ProfileImageKind) -> UserColumn {
        match kind {
            ProfileImageKind::ProfilePicture => UserColumn::ProfilePicture,
            ProfileImageKind::Banner => UserColumn::Banner,
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn update_details(
        &self,
        user_id: UserId,
        username: &str,
        description: Option<&str>,
    ) -> Result<(), ProfileRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Username, Expr::value(username))
            .col_expr(
                UserColumn::Description,
                Expr::value(description.map(str::to_string)),
            )
            .col_expr(UserColumn::UpdatedAt, SimpleExpr::from(Expr::current_timestamp()))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn set_image(
        &self,
        user_id: UserId,
        kind: ProfileImageKind,
        path: &str,
    ) -> Result<(), ProfileRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(Self::image_column(kind), Expr::value(path))
            .col_expr(UserColumn::UpdatedAt, SimpleExpr::from(Expr::current_timestamp()))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    fn exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[tokio::test]
    async fn update_details_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(repo.update_details(user(), "ink", Some("hi")).await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_username_is_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"users_username_key\"".to_string(),
            )])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.update_details(user(), "taken", None).await,
            Err(ProfileRepositoryError::UsernameTaken)
        ));
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.update_details(user(), "ink", None).await,
            Err(ProfileRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn set_image_updates_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(repo
            .set_image(user(), ProfileImageKind::Banner, "/uploads/users/b.png")
            .await
            .is_ok());
    }
}
