use migration::{
    schema::{naming::MAX_IDENTIFIER_LEN, SchemaStatement, ORGANIZATION_ID},
    tables, Catalog,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::{HashMap, HashSet};

#[test]
fn hr_catalog_is_valid() {
    let catalog = Catalog::hr();
    catalog.validate().expect("catalog must validate");
    assert!(
        catalog.len() >= 150,
        "expected a full schema, got {} tables",
        catalog.len()
    );
}

#[test]
fn domains_are_not_empty() {
    for (domain, tables) in tables::domains() {
        assert!(!tables.is_empty(), "domain '{domain}' has no tables");
    }
}

#[rstest]
#[case("organizations")]
#[case("users")]
#[case("employees")]
#[case("leave_requests")]
#[case("payroll_runs")]
#[case("payslips")]
#[case("approval_requests")]
#[case("webhook_deliveries")]
#[case("audit_logs")]
fn core_tables_exist(#[case] name: &str) {
    assert!(Catalog::hr().table(name).is_some(), "missing table '{name}'");
}

#[rstest]
#[case("currencies")]
#[case("permissions")]
fn global_tables_have_no_tenant(#[case] name: &str) {
    let catalog = Catalog::hr();
    let table = catalog.table(name).expect("table exists");
    assert!(!table.is_tenant_scoped());
}

#[test]
fn tenant_tables_have_indexed_organization_id() {
    let catalog = Catalog::hr();
    let global: HashSet<_> = ["currencies", "permissions", "organizations"].into();
    for table in catalog.tables() {
        if global.contains(table.name) {
            continue;
        }
        assert!(
            table.is_tenant_scoped(),
            "table '{}' is not tenant scoped",
            table.name
        );
        let field = table.get_field(ORGANIZATION_ID).expect("tenant column");
        assert!(!field.nullable, "'{}.organization_id' is nullable", table.name);
        assert!(
            table
                .effective_indexes()
                .iter()
                .any(|index| index.columns.first() == Some(&ORGANIZATION_ID)),
            "'{}.organization_id' is not indexed",
            table.name
        );
    }
}

#[test]
fn relations_are_inline_only_when_target_exists() {
    let catalog = Catalog::hr();
    let position: HashMap<_, _> = catalog
        .table_names()
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();
    let plan = catalog.plan();

    for (i, planned) in plan.tables.iter().enumerate() {
        for relation in &planned.inline {
            assert!(
                position[relation.references] <= i,
                "inline relation '{}.{}' points forward",
                planned.table.name,
                relation.column
            );
        }
    }
    for deferred in &plan.deferred {
        assert!(
            position[deferred.relation.references] > position[deferred.table.name],
            "deferred relation '{}.{}' could be inline",
            deferred.table.name,
            deferred.relation.column
        );
    }

    let total: usize = catalog.tables().iter().map(|t| t.relations.len()).sum();
    let inline: usize = plan.tables.iter().map(|t| t.inline.len()).sum();
    assert_eq!(inline + plan.deferred.len(), total);
}

#[test]
fn known_cycles_are_deferred() {
    let catalog = Catalog::hr();
    let plan = catalog.plan();
    let deferred: HashSet<_> = plan
        .deferred
        .iter()
        .map(|d| (d.table.name, d.relation.column))
        .collect();
    assert!(deferred.contains(&("users", "employee_id")));
    assert!(deferred.contains(&("departments", "head_employee_id")));
}

#[test]
fn down_drops_every_table_once_in_reverse_order() {
    let catalog = Catalog::hr();
    let plan = catalog.plan();
    let statements = plan.down_statements();

    let first_table_drop = statements
        .iter()
        .position(|s| matches!(s, SchemaStatement::DropTable(_)))
        .expect("tables are dropped");
    assert_eq!(first_table_drop, plan.deferred.len());
    assert!(statements[..first_table_drop]
        .iter()
        .all(|s| matches!(s, SchemaStatement::DropForeignKey(_))));

    let mut expected: Vec<_> = catalog
        .table_names()
        .into_iter()
        .map(|name| format!(r#"DROP TABLE "{name}""#))
        .collect();
    expected.reverse();
    let dropped: Vec<_> = statements[first_table_drop..]
        .iter()
        .map(SchemaStatement::to_postgres)
        .collect();
    assert_eq!(dropped, expected);
}

#[test]
fn up_creates_tables_then_indexes_then_foreign_keys() {
    let catalog = Catalog::hr();
    let plan = catalog.plan();
    let statements = plan.up_statements();
    assert_eq!(
        statements.len(),
        catalog.len() + plan.index_count() + plan.deferred.len()
    );

    let rank = |statement: &SchemaStatement| match statement {
        SchemaStatement::CreateTable(_) => 0,
        SchemaStatement::CreateIndex(_) => 1,
        SchemaStatement::CreateForeignKey(_) => 2,
        other => panic!("unexpected statement in up: {other:?}"),
    };
    let ranks: Vec<_> = statements.iter().map(rank).collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted);
}

#[test]
fn generated_identifiers_fit_postgres_limit() {
    let catalog = Catalog::hr();
    let mut seen = HashSet::new();
    for table in catalog.tables() {
        assert!(table.name.len() <= MAX_IDENTIFIER_LEN);
        let names = table
            .effective_indexes()
            .iter()
            .map(|index| index.name(table.name))
            .chain(table.relations.iter().map(|r| table.foreign_key_name(r)))
            .collect::<Vec<_>>();
        for name in names {
            assert!(name.len() <= MAX_IDENTIFIER_LEN, "'{name}' is too long");
            assert!(seen.insert(name.clone()), "'{name}' is not unique");
        }
    }
}
