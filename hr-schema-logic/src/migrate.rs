use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};

/// Applies pending migrations, all of them when `steps` is `None`.
pub async fn up(db: &DatabaseConnection, steps: Option<u32>) -> Result<(), DbErr> {
    tracing::info!(steps = ?steps, "applying migrations");
    Migrator::up(db, steps).await
}

/// Rolls back applied migrations, the last one when `steps` is `None`.
pub async fn down(db: &DatabaseConnection, steps: Option<u32>) -> Result<(), DbErr> {
    let steps = steps.unwrap_or(1);
    tracing::info!(steps, "rolling back migrations");
    Migrator::down(db, Some(steps)).await
}

/// Drops every table in the database and applies all migrations.
pub async fn fresh(db: &DatabaseConnection) -> Result<(), DbErr> {
    tracing::warn!("dropping all tables and reapplying migrations");
    Migrator::fresh(db).await
}

/// Rolls back all applied migrations.
pub async fn reset(db: &DatabaseConnection) -> Result<(), DbErr> {
    tracing::warn!("rolling back all migrations");
    Migrator::reset(db).await
}
