pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_guild_tables;
mod m20251001_000002_create_embed_tables;
mod m20251001_000003_create_form_tables;
mod m20251001_000004_create_giveaway_tables;
mod m20251001_000005_create_raffle_tables;
mod m20251001_000006_create_reaction_role_tables;
mod m20251001_000007_create_profile_tables;
mod m20251001_000008_create_position_tables;
mod m20251001_000009_create_glyph_message_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_guild_tables::Migration),
            Box::new(m20251001_000002_create_embed_tables::Migration),
            Box::new(m20251001_000003_create_form_tables::Migration),
            Box::new(m20251001_000004_create_giveaway_tables::Migration),
            Box::new(m20251001_000005_create_raffle_tables::Migration),
            Box::new(m20251001_000006_create_reaction_role_tables::Migration),
            Box::new(m20251001_000007_create_profile_tables::Migration),
            Box::new(m20251001_000008_create_position_tables::Migration),
            Box::new(m20251001_000009_create_glyph_message_tables::Migration),
        ]
    }
}
