use crate::{
    error::SchemaError,
    inspect::{self, ColumnSnapshot, ForeignKeySnapshot, IndexSnapshot, SchemaSnapshot},
};
use migration::schema::Catalog;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Difference {
    MissingTable {
        table: String,
    },
    UnexpectedTable {
        table: String,
    },
    MissingColumn {
        table: String,
        column: String,
    },
    UnexpectedColumn {
        table: String,
        column: String,
    },
    ColumnMismatch {
        table: String,
        column: String,
        expected: ColumnSnapshot,
        actual: ColumnSnapshot,
    },
    MissingForeignKey {
        table: String,
        name: String,
    },
    UnexpectedForeignKey {
        table: String,
        name: String,
    },
    ForeignKeyMismatch {
        table: String,
        name: String,
        expected: ForeignKeySnapshot,
        actual: ForeignKeySnapshot,
    },
    MissingIndex {
        table: String,
        name: String,
    },
    UnexpectedIndex {
        table: String,
        name: String,
    },
    IndexMismatch {
        table: String,
        name: String,
        expected: IndexSnapshot,
        actual: IndexSnapshot,
    },
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::MissingTable { table } => write!(f, "missing table {table}"),
            Difference::UnexpectedTable { table } => write!(f, "unexpected table {table}"),
            Difference::MissingColumn { table, column } => {
                write!(f, "missing column {table}.{column}")
            }
            Difference::UnexpectedColumn { table, column } => {
                write!(f, "unexpected column {table}.{column}")
            }
            Difference::ColumnMismatch {
                table,
                column,
                expected,
                actual,
            } => write!(
                f,
                "column {table}.{column}: expected {}, found {}",
                describe_column(expected),
                describe_column(actual)
            ),
            Difference::MissingForeignKey { table, name } => {
                write!(f, "missing foreign key {name} on {table}")
            }
            Difference::UnexpectedForeignKey { table, name } => {
                write!(f, "unexpected foreign key {name} on {table}")
            }
            Difference::ForeignKeyMismatch {
                table,
                name,
                expected,
                actual,
            } => write!(
                f,
                "foreign key {name} on {table}: expected {}, found {}",
                describe_foreign_key(expected),
                describe_foreign_key(actual)
            ),
            Difference::MissingIndex { table, name } => {
                write!(f, "missing index {name} on {table}")
            }
            Difference::UnexpectedIndex { table, name } => {
                write!(f, "unexpected index {name} on {table}")
            }
            Difference::IndexMismatch {
                table,
                name,
                expected,
                actual,
            } => write!(
                f,
                "index {name} on {table}: expected {}, found {}",
                describe_index(expected),
                describe_index(actual)
            ),
        }
    }
}

fn describe_column(column: &ColumnSnapshot) -> String {
    let mut description = column.data_type.clone();
    match (column.max_length, column.precision, column.scale) {
        (Some(len), _, _) => description.push_str(&format!("({len})")),
        (None, Some(precision), Some(scale)) => {
            description.push_str(&format!("({precision}, {scale})"))
        }
        _ => {}
    }
    description.push_str(if column.nullable { " null" } else { " not null" });
    if column.has_default {
        description.push_str(" with default");
    }
    description
}

fn describe_foreign_key(foreign_key: &ForeignKeySnapshot) -> String {
    format!(
        "{} -> {}.{} on delete {}",
        foreign_key.column,
        foreign_key.referenced_table,
        foreign_key.referenced_column,
        foreign_key.on_delete
    )
}

fn describe_index(index: &IndexSnapshot) -> String {
    let kind = if index.unique { "unique " } else { "" };
    format!("{kind}({})", index.columns.join(", "))
}

/// Differences between the schema a catalog defines and a live database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaDiff {
    pub differences: Vec<Difference>,
}

impl SchemaDiff {
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }
}

impl fmt::Display for SchemaDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for difference in &self.differences {
            writeln!(f, "{difference}")?;
        }
        Ok(())
    }
}

pub fn diff(expected: &SchemaSnapshot, actual: &SchemaSnapshot) -> SchemaDiff {
    let mut differences = Vec::new();

    for (table, expected_table) in &expected.tables {
        let Some(actual_table) = actual.tables.get(table) else {
            differences.push(Difference::MissingTable {
                table: table.clone(),
            });
            continue;
        };

        compare(
            &expected_table.columns,
            &actual_table.columns,
            |column| Difference::MissingColumn {
                table: table.clone(),
                column,
            },
            |column| Difference::UnexpectedColumn {
                table: table.clone(),
                column,
            },
            |column, expected, actual| Difference::ColumnMismatch {
                table: table.clone(),
                column,
                expected: expected.clone(),
                actual: actual.clone(),
            },
            &mut differences,
        );
        compare(
            &expected_table.foreign_keys,
            &actual_table.foreign_keys,
            |name| Difference::MissingForeignKey {
                table: table.clone(),
                name,
            },
            |name| Difference::UnexpectedForeignKey {
                table: table.clone(),
                name,
            },
            |name, expected, actual| Difference::ForeignKeyMismatch {
                table: table.clone(),
                name,
                expected: expected.clone(),
                actual: actual.clone(),
            },
            &mut differences,
        );
        compare(
            &expected_table.indexes,
            &actual_table.indexes,
            |name| Difference::MissingIndex {
                table: table.clone(),
                name,
            },
            |name| Difference::UnexpectedIndex {
                table: table.clone(),
                name,
            },
            |name, expected, actual| Difference::IndexMismatch {
                table: table.clone(),
                name,
                expected: expected.clone(),
                actual: actual.clone(),
            },
            &mut differences,
        );
    }

    for table in actual.tables.keys() {
        if !expected.tables.contains_key(table) {
            differences.push(Difference::UnexpectedTable {
                table: table.clone(),
            });
        }
    }

    SchemaDiff { differences }
}

/// Walks two maps in key order. Keys only in `expected` are reported by
/// `missing`, keys only in `actual` by `unexpected`, and shared keys with
/// unequal values by `mismatch`.
fn compare<V: PartialEq>(
    expected: &BTreeMap<String, V>,
    actual: &BTreeMap<String, V>,
    missing: impl Fn(String) -> Difference,
    unexpected: impl Fn(String) -> Difference,
    mismatch: impl Fn(String, &V, &V) -> Difference,
    out: &mut Vec<Difference>,
) {
    for (key, expected_value) in expected {
        match actual.get(key) {
            None => out.push(missing(key.clone())),
            Some(actual_value) if actual_value != expected_value => {
                out.push(mismatch(key.clone(), expected_value, actual_value))
            }
            Some(_) => {}
        }
    }
    for key in actual.keys() {
        if !expected.contains_key(key) {
            out.push(unexpected(key.clone()));
        }
    }
}

/// Compares the live schema with `catalog`. Fails with
/// [`SchemaError::Drift`] when they differ.
pub async fn verify(db: &DatabaseConnection, catalog: &Catalog) -> Result<(), SchemaError> {
    catalog.validate()?;
    let expected = SchemaSnapshot::expected(catalog);
    let actual = inspect::inspect(db).await?;
    let diff = diff(&expected, &actual);
    if diff.is_empty() {
        tracing::info!(tables = actual.tables.len(), "schema matches catalog");
        Ok(())
    } else {
        tracing::warn!(differences = diff.len(), "schema drift detected");
        Err(SchemaError::Drift(diff))
    }
}
