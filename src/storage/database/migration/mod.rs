use sea_orm_migration::prelude::*;

mod m20250101_000001_create_profiles_table;
mod m20250101_000002_create_works_table;
mod m20250101_000003_create_addresses_table;
mod m20250101_000004_create_emails_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_profiles_table::Migration),
            Box::new(m20250101_000002_create_works_table::Migration),
            Box::new(m20250101_000003_create_addresses_table::Migration),
            Box::new(m20250101_000004_create_emails_table::Migration),
        ]
    }
}
