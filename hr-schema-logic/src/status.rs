use migration::{MigrationStatus, Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.applied { "applied" } else { "pending" };
        write!(f, "{:<8} {}", status, self.name)
    }
}

/// Every known migration in order, with its applied status. Creates the
/// bookkeeping table when it does not exist yet.
pub async fn migration_status(db: &DatabaseConnection) -> Result<Vec<MigrationState>, DbErr> {
    let migrations = Migrator::get_migration_with_status(db).await?;
    Ok(migrations
        .iter()
        .map(|migration| MigrationState {
            name: migration.name().to_string(),
            applied: migration.status() == MigrationStatus::Applied,
        })
        .collect())
}

pub async fn pending_count(db: &DatabaseConnection) -> Result<usize, DbErr> {
    Ok(Migrator::get_pending_migrations(db).await?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_display() {
        let state = MigrationState {
            name: "m20240101_000001_initial_schema".into(),
            applied: true,
        };
        assert_eq!(state.to_string(), "applied  m20240101_000001_initial_schema");

        let state = MigrationState {
            applied: false,
            ..state
        };
        assert_eq!(state.to_string(), "pending  m20240101_000001_initial_schema");
    }
}
