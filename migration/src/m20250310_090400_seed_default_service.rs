use sea_orm_migration::prelude::*;

/// Seeds the single illustration service with the three count-driven options.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                WITH svc AS (
                    INSERT INTO services (name, description, base_price, is_active)
                    VALUES (
                        'Character Illustration',
                        'Full colour character illustration with optional extras.',
                        35,
                        true
                    )
                    RETURNING id
                )
                INSERT INTO service_options
                    (service_id, name, description, price_formula, min_value, max_value, is_active)
                SELECT svc.id, o.name, o.description, o.price_formula, o.min_value, o.max_value, true
                FROM svc, (VALUES
                    ('Additional characters', 'Characters beyond the first', '+3+([value]*2)', 0, 10),
                    ('Alternatives', 'Alternate versions of the piece', '+3*[value]', 0, 10),
                    ('Additional poses', 'Poses beyond the first', '+5+[value]', 0, 10)
                ) AS o(name, description, price_formula, min_value, max_value);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM services WHERE name = 'Character Illustration';")
            .await?;

        Ok(())
    }
}
