//! Live schema introspection through the Postgres catalogs, and the
//! snapshot a [`Catalog`] is expected to produce.

use migration::schema::{Catalog, FieldKind, OnDelete};
use sea_orm::{DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement};
use serde::Serialize;
use std::collections::BTreeMap;

/// Bookkeeping table maintained by sea-orm-migration.
const MIGRATIONS_TABLE: &str = "seaql_migrations";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaSnapshot {
    pub tables: BTreeMap<String, TableSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub columns: BTreeMap<String, ColumnSnapshot>,
    /// Keyed by constraint name.
    pub foreign_keys: BTreeMap<String, ForeignKeySnapshot>,
    /// Keyed by index name. Primary key indexes are not included.
    pub indexes: BTreeMap<String, IndexSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSnapshot {
    pub data_type: String,
    pub nullable: bool,
    pub has_default: bool,
    pub max_length: Option<i32>,
    pub precision: Option<i32>,
    pub scale: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeySnapshot {
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
    pub on_delete: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSnapshot {
    pub columns: Vec<String>,
    pub unique: bool,
}

impl SchemaSnapshot {
    pub fn expected(catalog: &Catalog) -> Self {
        let tables = catalog
            .tables()
            .iter()
            .map(|table| {
                let columns = table
                    .fields
                    .iter()
                    .map(|field| {
                        let (max_length, precision, scale) = match field.kind {
                            FieldKind::String(len) => (Some(len as i32), None, None),
                            FieldKind::Decimal(precision, scale) => {
                                (None, Some(precision as i32), Some(scale as i32))
                            }
                            _ => (None, None, None),
                        };
                        let column = ColumnSnapshot {
                            data_type: field.kind.postgres_type().to_string(),
                            nullable: field.nullable,
                            has_default: field.default.is_some(),
                            max_length,
                            precision,
                            scale,
                        };
                        (field.name.to_string(), column)
                    })
                    .collect();
                let foreign_keys = table
                    .relations
                    .iter()
                    .map(|relation| {
                        let foreign_key = ForeignKeySnapshot {
                            column: relation.column.to_string(),
                            referenced_table: relation.references.to_string(),
                            referenced_column: relation.referenced_column.to_string(),
                            on_delete: action_name(relation.on_delete).to_string(),
                        };
                        (table.foreign_key_name(relation), foreign_key)
                    })
                    .collect();
                let indexes = table
                    .effective_indexes()
                    .into_iter()
                    .map(|index| {
                        let snapshot = IndexSnapshot {
                            columns: index.columns.iter().map(|c| c.to_string()).collect(),
                            unique: index.unique,
                        };
                        (index.name(table.name), snapshot)
                    })
                    .collect();
                let snapshot = TableSnapshot {
                    columns,
                    foreign_keys,
                    indexes,
                };
                (table.name.to_string(), snapshot)
            })
            .collect();
        Self { tables }
    }
}

fn action_name(action: OnDelete) -> &'static str {
    match action {
        OnDelete::Cascade => "CASCADE",
        OnDelete::Restrict => "RESTRICT",
        OnDelete::SetNull => "SET NULL",
        OnDelete::NoAction => "NO ACTION",
    }
}

fn action_from_code(code: &str) -> String {
    code.chars()
        .next()
        .and_then(OnDelete::from_postgres_code)
        .map(|action| action_name(action).to_string())
        .unwrap_or_else(|| format!("UNKNOWN({code})"))
}

#[derive(Debug, FromQueryResult)]
struct TableRow {
    table_name: String,
}

#[derive(Debug, FromQueryResult)]
struct ColumnRow {
    table_name: String,
    column_name: String,
    data_type: String,
    is_nullable: bool,
    has_default: bool,
    max_length: Option<i32>,
    numeric_precision: Option<i32>,
    numeric_scale: Option<i32>,
}

#[derive(Debug, FromQueryResult)]
struct ForeignKeyRow {
    name: String,
    table_name: String,
    column_name: String,
    referenced_table: String,
    referenced_column: String,
    on_delete: String,
}

#[derive(Debug, FromQueryResult)]
struct IndexRow {
    name: String,
    table_name: String,
    is_unique: bool,
    columns: String,
}

/// Reads the tables, columns, foreign keys and secondary indexes of the
/// current schema.
pub async fn inspect(db: &DatabaseConnection) -> Result<SchemaSnapshot, DbErr> {
    let mut tables: BTreeMap<String, TableSnapshot> = TableRow::find_by_statement(statement(
        r#"
        SELECT table_name::text AS table_name
        FROM information_schema.tables
        WHERE table_schema = current_schema()
            AND table_type = 'BASE TABLE'
        "#,
    ))
    .all(db)
    .await?
    .into_iter()
    .filter(|row| row.table_name != MIGRATIONS_TABLE)
    .map(|row| (row.table_name, TableSnapshot::default()))
    .collect();

    let columns = ColumnRow::find_by_statement(statement(
        r#"
        SELECT
            table_name::text AS table_name,
            column_name::text AS column_name,
            data_type::text AS data_type,
            is_nullable = 'YES' AS is_nullable,
            column_default IS NOT NULL AS has_default,
            character_maximum_length::int4 AS max_length,
            CASE WHEN data_type = 'numeric' THEN numeric_precision::int4 END AS numeric_precision,
            CASE WHEN data_type = 'numeric' THEN numeric_scale::int4 END AS numeric_scale
        FROM information_schema.columns
        WHERE table_schema = current_schema()
        "#,
    ))
    .all(db)
    .await?;
    for row in columns {
        if let Some(table) = tables.get_mut(&row.table_name) {
            table.columns.insert(
                row.column_name,
                ColumnSnapshot {
                    data_type: row.data_type,
                    nullable: row.is_nullable,
                    has_default: row.has_default,
                    max_length: row.max_length,
                    precision: row.numeric_precision,
                    scale: row.numeric_scale,
                },
            );
        }
    }

    let foreign_keys = ForeignKeyRow::find_by_statement(statement(
        r#"
        SELECT
            con.conname::text AS name,
            rel.relname::text AS table_name,
            att.attname::text AS column_name,
            frel.relname::text AS referenced_table,
            fatt.attname::text AS referenced_column,
            con.confdeltype::text AS on_delete
        FROM pg_constraint con
        JOIN pg_class rel ON rel.oid = con.conrelid
        JOIN pg_namespace ns ON ns.oid = rel.relnamespace
        JOIN pg_class frel ON frel.oid = con.confrelid
        JOIN pg_attribute att ON att.attrelid = con.conrelid AND att.attnum = con.conkey[1]
        JOIN pg_attribute fatt ON fatt.attrelid = con.confrelid AND fatt.attnum = con.confkey[1]
        WHERE con.contype = 'f'
            AND ns.nspname = current_schema()
        "#,
    ))
    .all(db)
    .await?;
    for row in foreign_keys {
        if let Some(table) = tables.get_mut(&row.table_name) {
            table.foreign_keys.insert(
                row.name,
                ForeignKeySnapshot {
                    column: row.column_name,
                    referenced_table: row.referenced_table,
                    referenced_column: row.referenced_column,
                    on_delete: action_from_code(&row.on_delete),
                },
            );
        }
    }

    let indexes = IndexRow::find_by_statement(statement(
        r#"
        SELECT
            idx.relname::text AS name,
            tbl.relname::text AS table_name,
            ix.indisunique AS is_unique,
            array_to_string(ARRAY(
                SELECT att.attname
                FROM unnest(ix.indkey::int2[]) WITH ORDINALITY AS k(attnum, ord)
                JOIN pg_attribute att ON att.attrelid = ix.indrelid AND att.attnum = k.attnum
                ORDER BY k.ord
            ), ',') AS columns
        FROM pg_index ix
        JOIN pg_class idx ON idx.oid = ix.indexrelid
        JOIN pg_class tbl ON tbl.oid = ix.indrelid
        JOIN pg_namespace ns ON ns.oid = tbl.relnamespace
        WHERE ns.nspname = current_schema()
            AND NOT ix.indisprimary
        "#,
    ))
    .all(db)
    .await?;
    for row in indexes {
        if let Some(table) = tables.get_mut(&row.table_name) {
            table.indexes.insert(
                row.name,
                IndexSnapshot {
                    columns: row.columns.split(',').map(str::to_string).collect(),
                    unique: row.is_unique,
                },
            );
        }
    }

    tracing::debug!(tables = tables.len(), "inspected database schema");
    Ok(SchemaSnapshot { tables })
}

fn statement(sql: &str) -> Statement {
    Statement::from_string(DbBackend::Postgres, sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::schema::{Field, OnDelete, TableDef};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn expected_snapshot_uses_postgres_types() {
        let catalog = Catalog::new(vec![
            TableDef::global("organizations"),
            TableDef::record("payslips")
                .field(Field::money("net_pay"))
                .field(Field::string("number", 32).null())
                .refers_to_with("approver_id", "organizations", OnDelete::Cascade)
                .unique(&["organization_id", "number"]),
        ]);
        let snapshot = SchemaSnapshot::expected(&catalog);
        let payslips = &snapshot.tables["payslips"];

        assert_eq!(
            payslips.columns["net_pay"],
            ColumnSnapshot {
                data_type: "numeric".into(),
                nullable: false,
                has_default: false,
                max_length: None,
                precision: Some(18),
                scale: Some(2),
            }
        );
        assert_eq!(payslips.columns["number"].data_type, "character varying");
        assert_eq!(payslips.columns["number"].max_length, Some(32));
        assert!(payslips.columns["created_at"].has_default);

        assert_eq!(
            payslips.foreign_keys["fk_payslips_approver_id"],
            ForeignKeySnapshot {
                column: "approver_id".into(),
                referenced_table: "organizations".into(),
                referenced_column: "id".into(),
                on_delete: "CASCADE".into(),
            }
        );
        let index_names: Vec<_> = payslips.indexes.keys().cloned().collect();
        assert_eq!(
            index_names,
            vec![
                "ix_payslips_approver_id".to_string(),
                "ux_payslips_organization_id_number".to_string(),
            ]
        );
    }

    #[rstest]
    #[case("c", "CASCADE")]
    #[case("r", "RESTRICT")]
    #[case("n", "SET NULL")]
    #[case("a", "NO ACTION")]
    #[case("x", "UNKNOWN(x)")]
    #[case("", "UNKNOWN()")]
    fn delete_action_codes(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(action_from_code(code), expected);
    }
}
