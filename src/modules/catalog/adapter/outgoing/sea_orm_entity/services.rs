use sea_orm::entity::prelude::*;

use crate::catalog::application::domain::entities::{Service, ServiceOption};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub base_price: f64,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service_options::Entity")]
    ServiceOptions,
}

impl Related<super::service_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceOptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self, options: Vec<ServiceOption>) -> Service {
        Service {
            id: self.id,
            name: self.name,
            description: self.description,
            base_price: self.base_price,
            options,
        }
    }
}
