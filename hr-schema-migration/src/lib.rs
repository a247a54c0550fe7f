pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::MigrationStatus;

pub mod schema;
pub mod tables;

mod m20240101_000001_initial_schema;

pub use schema::Catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_initial_schema::Migration)]
    }
}
