use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Tags::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create commission_tags join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CommissionTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CommissionTags::CommissionId).uuid().not_null())
                    .col(ColumnDef::new(CommissionTags::TagId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(CommissionTags::CommissionId)
                            .col(CommissionTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commission_tags_commission_id")
                            .from(CommissionTags::Table, CommissionTags::CommissionId)
                            .to(Commissions::Table, Commissions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commission_tags_tag_id")
                            .from(CommissionTags::Table, CommissionTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // All commissions carrying a tag
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_commission_tags_tag_id
                ON commission_tags (tag_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_commission_tags_tag_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(CommissionTags::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum CommissionTags {
    Table,
    CommissionId,
    TagId,
}

#[derive(DeriveIden)]
enum Commissions {
    Table,
    Id,
}
