//! Declarative table model and the planner that turns it into ordered DDL.

mod catalog;
mod model;
pub mod naming;
mod plan;
mod statement;

pub use catalog::{Catalog, CatalogError};
pub use model::{
    Field, FieldDefault, FieldKind, OnDelete, Relation, TableDef, TableIndex, ID,
    ORGANIZATIONS, ORGANIZATION_ID,
};
pub use plan::{DeferredRelation, MigrationPlan, PlannedTable};
pub use statement::SchemaStatement;

use sea_orm_migration::prelude::{DbErr, SchemaManager};

/// Validates `catalog` and applies its up statements in order.
pub async fn create_all(manager: &SchemaManager<'_>, catalog: &Catalog) -> Result<(), DbErr> {
    catalog
        .validate()
        .map_err(|err| DbErr::Migration(err.to_string()))?;
    let plan = catalog.plan();
    tracing::info!(
        tables = plan.tables.len(),
        indexes = plan.index_count(),
        deferred_foreign_keys = plan.deferred.len(),
        "creating schema"
    );
    execute(manager, plan.up_statements()).await
}

/// Drops everything [`create_all`] created.
pub async fn drop_all(manager: &SchemaManager<'_>, catalog: &Catalog) -> Result<(), DbErr> {
    let plan = catalog.plan();
    tracing::info!(tables = plan.tables.len(), "dropping schema");
    execute(manager, plan.down_statements()).await
}

async fn execute(
    manager: &SchemaManager<'_>,
    statements: Vec<SchemaStatement>,
) -> Result<(), DbErr> {
    for statement in statements {
        let sql = statement.to_postgres();
        tracing::debug!(sql = %sql, "executing schema statement");
        statement
            .execute(manager)
            .await
            .map_err(|err| DbErr::Migration(format!("{err}\nQuery: {sql}")))?;
    }
    Ok(())
}
