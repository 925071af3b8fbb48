use sea_orm::entity::prelude::*;

use crate::request::adapter::outgoing::sea_orm_entity::requests;

/// Accounts for clients and the operator. Profile columns are owned by the user module.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub is_vip: bool,
    pub is_operator: bool,
    pub profile_picture: Option<String>,
    pub banner: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::request::adapter::outgoing::sea_orm_entity::requests::Entity")]
    Requests,
}

impl Related<requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requests.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // Without the trigger the timestamp is stamped here on updates.
        if cfg!(feature = "no_db_triggers") && !insert {
            self.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().fixed_offset());
        }

        Ok(self)
    }
}
