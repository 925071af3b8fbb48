use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub character_count: i32,
    pub alternative_count: i32,
    pub pose_count: i32,
    /// JSON array of `/uploads/references/...` paths.
    #[sea_orm(column_type = "JsonBinary")]
    pub references: Json,
    pub is_nsfw: bool,
    #[sea_orm(column_type = "Double", nullable)]
    pub total_price: Option<f64>,
    /// Tier quoted at submission, before any VIP discount.
    pub complexity: Option<String>,
    pub status: String,
    pub request_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Users,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
