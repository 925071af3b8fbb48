use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "commissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub request_id: Uuid,
    pub status: String,
    pub progress: String,
    pub expected_completion_date: Option<DateTimeWithTimeZone>,
    pub actual_completion_date: Option<DateTimeWithTimeZone>,
    pub complexity: String,
    pub is_public_work: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::commission_updates::Entity")]
    CommissionUpdates,
}

impl Related<super::commission_updates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommissionUpdates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
