use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create commissions table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Commissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Commissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // One commission per request
                    .col(
                        ColumnDef::new(Commissions::RequestId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Commissions::Status)
                            .string_len(20)
                            .not_null()
                            .default("Accepted"),
                    )
                    .col(
                        ColumnDef::new(Commissions::Progress)
                            .string_len(100)
                            .not_null()
                            .default("Not started"),
                    )
                    .col(ColumnDef::new(Commissions::ExpectedCompletionDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Commissions::ActualCompletionDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Commissions::Complexity)
                            .string_len(20)
                            .not_null()
                            .default("Low"),
                    )
                    .col(
                        ColumnDef::new(Commissions::IsPublicWork)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Commissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Commissions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commissions_request_id")
                            .from(Commissions::Table, Commissions::RequestId)
                            .to(Requests::Table, Requests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create commission_updates table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CommissionUpdates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CommissionUpdates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CommissionUpdates::CommissionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CommissionUpdates::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CommissionUpdates::Description).text())
                    .col(ColumnDef::new(CommissionUpdates::ImagePath).string_len(255))
                    .col(ColumnDef::new(CommissionUpdates::VideoPath).string_len(255))
                    .col(
                        ColumnDef::new(CommissionUpdates::UpdateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commission_updates_commission_id")
                            .from(CommissionUpdates::Table, CommissionUpdates::CommissionId)
                            .to(Commissions::Table, Commissions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Status filter + kanban ordering
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_commissions_status_updated
                ON commissions (status, updated_at DESC);
                "#,
            )
            .await?;

        // Latest update lookup per commission
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_commission_updates_commission_date
                ON commission_updates (commission_id, update_date DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_commissions_updated_at
                BEFORE UPDATE ON commissions
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_commissions_updated_at ON commissions;
                DROP INDEX IF EXISTS idx_commissions_status_updated;
                DROP INDEX IF EXISTS idx_commission_updates_commission_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CommissionUpdates::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Commissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Commissions {
    Table,
    Id,
    RequestId,
    Status,
    Progress,
    ExpectedCompletionDate,
    ActualCompletionDate,
    Complexity,
    IsPublicWork,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CommissionUpdates {
    Table,
    Id,
    CommissionId,
    Title,
    Description,
    ImagePath,
    VideoPath,
    UpdateDate,
}

#[derive(DeriveIden)]
enum Requests {
    Table,
    Id,
}
