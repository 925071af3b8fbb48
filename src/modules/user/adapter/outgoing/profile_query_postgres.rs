use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, QueryResult,
    Statement,
};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::user::application::{
    domain::entities::{ProfileCommission, UserProfile},
    ports::outgoing::{ProfileQuery, ProfileQueryError},
};

#[derive(Debug, Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ProfileQueryError {
        ProfileQueryError::DatabaseError(e.to_string())
    }

    fn map_profile(model: UserModel) -> UserProfile {
        UserProfile {
            id: model.id,
            username: model.username,
            email: model.email,
            profile_picture: model.profile_picture,
            banner: model.banner,
            description: model.description,
            is_vip: model.is_vip,
            is_operator: model.is_operator,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }

    fn commissions_stmt(user_id: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                c.id,
                c.status,
                c.progress,
                c.expected_completion_date,
                c.complexity,
                c.is_public_work,
                c.created_at,
                r.description,
                r.total_price,
                r.is_nsfw,
                (
                    SELECT cu.image_path
                    FROM commission_updates cu
                    WHERE cu.commission_id = c.id
                    ORDER BY cu.update_date DESC
                    LIMIT 1
                ) AS latest_update
            FROM commissions c
            INNER JOIN requests r ON r.id = c.request_id
            WHERE r.user_id = $1
            ORDER BY c.created_at DESC
            "#,
            vec![user_id.value().into()],
        )
    }

    fn map_commission(row: &QueryResult) -> Result<ProfileCommission, ProfileQueryError> {
        let status: String = row.try_get("", "status").map_err(Self::map_db_err)?;
        let complexity: String = row.try_get("", "complexity").map_err(Self::map_db_err)?;
        let expected: Option<DateTime<FixedOffset>> = row
            .try_get("", "expected_completion_date")
            .map_err(Self::map_db_err)?;
        let created_at: DateTime<FixedOffset> =
            row.try_get("", "created_at").map_err(Self::map_db_err)?;

        Ok(ProfileCommission {
            id: row.try_get("", "id").map_err(Self::map_db_err)?,
            status: status
                .parse()
                .map_err(|e: crate::commission::application::domain::status::UnknownCommissionStatus| {
                    ProfileQueryError::DatabaseError(e.to_string())
                })?,
            progress: row.try_get("", "progress").map_err(Self::map_db_err)?,
            expected_completion_date: expected.map(|d| d.with_timezone(&Utc)),
            complexity: complexity
                .parse()
                .map_err(|e: crate::catalog::application::domain::pricing::UnknownComplexity| {
                    ProfileQueryError::DatabaseError(e.to_string())
                })?,
            is_public_work: row.try_get("", "is_public_work").map_err(Self::map_db_err)?,
            description: row.try_get("", "description").map_err(Self::map_db_err)?,
            total_price: row.try_get("", "total_price").map_err(Self::map_db_err)?,
            is_nsfw: row.try_get("", "is_nsfw").map_err(Self::map_db_err)?,
            latest_update: row.try_get("", "latest_update").map_err(Self::map_db_err)?,
            created_at: created_at.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_profile(&self, user_id: UserId) -> Result<Option<UserProfile>, ProfileQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(user.map(Self::map_profile))
    }

    async fn list_commissions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ProfileCommission>, ProfileQueryError> {
        let rows = self
            .db
            .query_all(Self::commissions_stmt(user_id))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter().map(Self::map_commission).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::application::domain::pricing::Complexity;
    use crate::commission::application::domain::status::CommissionStatus;
    use maplit::btreemap;
    use sea_orm::{MockDatabase, Value};
    use uuid::Uuid;

    fn user_model(id: Uuid) -> UserModel {
        UserModel {
            id,
            username: "client".to_string(),
            email: "client@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_vip: true,
            is_operator: false,
            profile_picture: Some("/uploads/users/user-1.png".to_string()),
            banner: None,
            description: None,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn find_profile_maps_model() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id)]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let profile = query.find_profile(UserId::from(id)).await.unwrap().unwrap();

        assert_eq!(profile.id, id);
        assert!(profile.is_vip);
        assert_eq!(profile.profile_picture.as_deref(), Some("/uploads/users/user-1.png"));
    }

    #[tokio::test]
    async fn find_profile_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        assert!(query
            .find_profile(UserId::from(Uuid::new_v4()))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn list_commissions_maps_rows() {
        let now = Value::ChronoDateTimeWithTimeZone(Some(Box::new(Utc::now().fixed_offset())));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "id".to_string() => Value::Uuid(Some(Box::new(Uuid::new_v4()))),
                "status".to_string() => Value::String(Some(Box::new("Waiting".to_string()))),
                "progress".to_string() => Value::String(Some(Box::new("Colors".to_string()))),
                "expected_completion_date".to_string() => Value::ChronoDateTimeWithTimeZone(None),
                "complexity".to_string() => Value::String(Some(Box::new("Sistine Chapel".to_string()))),
                "is_public_work".to_string() => Value::Bool(Some(true)),
                "created_at".to_string() => now,
                "description".to_string() => Value::String(Some(Box::new("Ceiling mural".to_string()))),
                "total_price".to_string() => Value::Double(Some(950.0)),
                "is_nsfw".to_string() => Value::Bool(Some(false)),
                "latest_update".to_string() => Value::String(None),
            }]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let rows = query
            .list_commissions(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, CommissionStatus::Waiting);
        assert_eq!(rows[0].complexity, Complexity::SistineChapel);
        assert!(rows[0].latest_update.is_none());
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("gone".to_string())])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_commissions(UserId::from(Uuid::new_v4())).await,
            Err(ProfileQueryError::DatabaseError(_))
        ));
    }
}
