use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create services table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Services::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Services::Description).text())
                    .col(ColumnDef::new(Services::BasePrice).double().not_null())
                    .col(
                        ColumnDef::new(Services::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create service_options table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ServiceOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceOptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ServiceOptions::ServiceId).uuid().not_null())
                    .col(
                        ColumnDef::new(ServiceOptions::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceOptions::Description).text())
                    .col(
                        ColumnDef::new(ServiceOptions::PriceFormula)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceOptions::MinValue)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiceOptions::MaxValue)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiceOptions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_options_service_id")
                            .from(ServiceOptions::Table, ServiceOptions::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_service_options_service_active
                ON service_options (service_id)
                WHERE is_active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_service_options_service_active;")
            .await?;

        manager
            .drop_table(Table::drop().table(ServiceOptions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    Description,
    BasePrice,
    IsActive,
}

#[derive(DeriveIden)]
enum ServiceOptions {
    Table,
    Id,
    ServiceId,
    Name,
    Description,
    PriceFormula,
    MinValue,
    MaxValue,
    IsActive,
}
