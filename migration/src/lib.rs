pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_090000_create_services_tables;
mod m20250310_090100_create_requests_table;
mod m20250310_090200_create_commissions_tables;
mod m20250310_090300_create_tags_tables;
mod m20250310_090400_seed_default_service;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_090000_create_services_tables::Migration),
            Box::new(m20250310_090100_create_requests_table::Migration),
            Box::new(m20250310_090200_create_commissions_tables::Migration),
            Box::new(m20250310_090300_create_tags_tables::Migration),
            Box::new(m20250310_090400_seed_default_service::Migration),
        ]
    }
}
