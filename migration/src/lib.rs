pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_account_table;
mod m20260810_000002_create_place_table;
mod m20260810_000003_create_favorite_table;
mod m20260810_000004_create_search_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_account_table::Migration),
            Box::new(m20260810_000002_create_place_table::Migration),
            Box::new(m20260810_000003_create_favorite_table::Migration),
            Box::new(m20260810_000004_create_search_history_table::Migration),
        ]
    }
}
