//! Table definitions of the HR schema, one module per domain.
//!
//! Modules are listed in creation order. A reference to a table defined in
//! a later module is fine: the planner adds such foreign keys after all
//! tables exist.

mod approvals;
mod assets;
mod attendance;
mod audit;
mod benefits;
mod documents;
mod employees;
mod engagement;
mod expenses;
mod grievances;
mod identity;
mod leave;
mod notifications;
mod organization;
mod payroll;
mod performance;
mod recruitment;
mod surveys;
mod training;
mod webhooks;

use crate::schema::{Field, TableDef};

/// Domains in creation order with their tables.
pub fn domains() -> Vec<(&'static str, Vec<TableDef>)> {
    vec![
        ("organization", organization::tables()),
        ("identity", identity::tables()),
        ("employees", employees::tables()),
        ("recruitment", recruitment::tables()),
        ("attendance", attendance::tables()),
        ("leave", leave::tables()),
        ("payroll", payroll::tables()),
        ("benefits", benefits::tables()),
        ("performance", performance::tables()),
        ("expenses", expenses::tables()),
        ("assets", assets::tables()),
        ("grievances", grievances::tables()),
        ("surveys", surveys::tables()),
        ("training", training::tables()),
        ("documents", documents::tables()),
        ("approvals", approvals::tables()),
        ("engagement", engagement::tables()),
        ("notifications", notifications::tables()),
        ("webhooks", webhooks::tables()),
        ("audit", audit::tables()),
    ]
}

pub fn all() -> Vec<TableDef> {
    domains()
        .into_iter()
        .flat_map(|(_, tables)| tables)
        .collect()
}

/// Tenant-scoped lookup: code, name, description and an active flag. Codes
/// are unique per organization.
fn lookup(name: &'static str) -> TableDef {
    TableDef::entity(name)
        .field(Field::string("code", 32))
        .field(Field::string("name", 200))
        .field(Field::text("description").null())
        .field(active())
        .unique(&["organization_id", "code"])
}

fn active() -> Field {
    Field::boolean("is_active").default_bool(true)
}
