use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Requests::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Requests::UserId).uuid().not_null())
                    .col(ColumnDef::new(Requests::ServiceId).uuid().not_null())
                    .col(ColumnDef::new(Requests::Description).text().not_null())
                    .col(
                        ColumnDef::new(Requests::CharacterCount)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Requests::AlternativeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Requests::PoseCount)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Requests::References)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Requests::IsNsfw)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Requests::TotalPrice).double())
                    // Tier of the undiscounted quote
                    .col(ColumnDef::new(Requests::Complexity).string_len(20))
                    .col(
                        ColumnDef::new(Requests::Status)
                            .string_len(20)
                            .not_null()
                            .default("Requested"),
                    )
                    .col(
                        ColumnDef::new(Requests::RequestDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_user_id")
                            .from(Requests::Table, Requests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_service_id")
                            .from(Requests::Table, Requests::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // "My requests" listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_requests_user_date
                ON requests (user_id, request_date DESC);
                "#,
            )
            .await?;

        // Kanban "Requested" column
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_requests_pending
                ON requests (request_date DESC)
                WHERE status = 'Requested';
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
                DROP INDEX IF EXISTS idx_requests_user_date;
                DROP INDEX IF EXISTS idx_requests_pending;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Requests {
    Table,
    Id,
    UserId,
    ServiceId,
    Description,
    CharacterCount,
    AlternativeCount,
    PoseCount,
    References,
    IsNsfw,
    TotalPrice,
    Complexity,
    Status,
    RequestDate,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
}
