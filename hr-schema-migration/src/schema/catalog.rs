use super::{
    model::{OnDelete, TableDef, ID},
    naming::MAX_IDENTIFIER_LEN,
};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("table '{0}' is defined more than once")]
    DuplicateTable(String),
    #[error("table '{table}' defines column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },
    #[error("table '{0}' must have exactly one primary key column named 'id'")]
    InvalidPrimaryKey(String),
    #[error("relation '{table}.{column}' has no matching column")]
    MissingRelationColumn { table: String, column: String },
    #[error("relation '{table}.{column}' references unknown table '{references}'")]
    UnknownReferencedTable {
        table: String,
        column: String,
        references: String,
    },
    #[error("relation '{table}.{column}' must reference the primary key of '{references}'")]
    NotPrimaryKeyReference {
        table: String,
        column: String,
        references: String,
    },
    #[error("relation '{table}.{column}' type differs from the referenced key")]
    RelationTypeMismatch { table: String, column: String },
    #[error("relation '{table}.{column}' sets null on delete but the column is not nullable")]
    SetNullOnRequiredColumn { table: String, column: String },
    #[error("index on '{table}' uses unknown column '{column}'")]
    UnknownIndexColumn { table: String, column: String },
    #[error("index '{0}' is defined more than once")]
    DuplicateIndex(String),
    #[error("identifier '{0}' is used by more than one constraint or index")]
    DuplicateIdentifier(String),
    #[error("identifier '{0}' is longer than {MAX_IDENTIFIER_LEN} bytes")]
    IdentifierTooLong(String),
}

/// Ordered set of table definitions. Order matters: tables are created in
/// this order and dropped in reverse.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<TableDef>,
}

impl Catalog {
    pub fn new(tables: Vec<TableDef>) -> Self {
        Self { tables }
    }

    /// The complete HR schema.
    pub fn hr() -> Self {
        Self::new(crate::tables::all())
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|table| table.name).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut by_name: HashMap<&str, &TableDef> = HashMap::new();
        for table in &self.tables {
            if by_name.insert(table.name, table).is_some() {
                return Err(CatalogError::DuplicateTable(table.name.to_string()));
            }
        }

        let mut identifiers = HashSet::new();
        for table in &self.tables {
            validate_columns(table)?;
            validate_relations(table, &by_name)?;

            let mut declared = HashSet::new();
            for index in &table.indexes {
                if !declared.insert((index.columns.clone(), index.unique)) {
                    return Err(CatalogError::DuplicateIndex(index.name(table.name)));
                }
            }

            let index_names = table
                .effective_indexes()
                .into_iter()
                .map(|index| {
                    for column in &index.columns {
                        if table.get_field(column).is_none() {
                            return Err(CatalogError::UnknownIndexColumn {
                                table: table.name.to_string(),
                                column: column.to_string(),
                            });
                        }
                    }
                    Ok(index.name(table.name))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let foreign_key_names = table
                .relations
                .iter()
                .map(|relation| table.foreign_key_name(relation));

            for name in index_names.into_iter().chain(foreign_key_names) {
                if !identifiers.insert(name.clone()) {
                    return Err(CatalogError::DuplicateIdentifier(name));
                }
            }
        }

        Ok(())
    }
}

fn validate_columns(table: &TableDef) -> Result<(), CatalogError> {
    // generated constraint names are shortened, table and column names are not
    if table.name.len() > MAX_IDENTIFIER_LEN {
        return Err(CatalogError::IdentifierTooLong(table.name.to_string()));
    }

    let mut seen = HashSet::new();
    for field in &table.fields {
        if field.name.len() > MAX_IDENTIFIER_LEN {
            return Err(CatalogError::IdentifierTooLong(field.name.to_string()));
        }
        if !seen.insert(field.name) {
            return Err(CatalogError::DuplicateColumn {
                table: table.name.to_string(),
                column: field.name.to_string(),
            });
        }
    }

    let primary_keys: Vec<_> = table.fields.iter().filter(|f| f.primary_key).collect();
    match primary_keys.as_slice() {
        [pk] if pk.name == ID && !pk.nullable => Ok(()),
        _ => Err(CatalogError::InvalidPrimaryKey(table.name.to_string())),
    }
}

fn validate_relations(
    table: &TableDef,
    by_name: &HashMap<&str, &TableDef>,
) -> Result<(), CatalogError> {
    for relation in &table.relations {
        let error_location = || (table.name.to_string(), relation.column.to_string());

        let field = table.get_field(relation.column).ok_or_else(|| {
            let (table, column) = error_location();
            CatalogError::MissingRelationColumn { table, column }
        })?;

        let referenced = by_name.get(relation.references).ok_or_else(|| {
            let (table, column) = error_location();
            CatalogError::UnknownReferencedTable {
                table,
                column,
                references: relation.references.to_string(),
            }
        })?;

        let key = referenced
            .primary_key()
            .filter(|key| key.name == relation.referenced_column)
            .ok_or_else(|| {
                let (table, column) = error_location();
                CatalogError::NotPrimaryKeyReference {
                    table,
                    column,
                    references: relation.references.to_string(),
                }
            })?;

        if key.kind != field.kind {
            let (table, column) = error_location();
            return Err(CatalogError::RelationTypeMismatch { table, column });
        }

        if relation.on_delete == OnDelete::SetNull && !field.nullable {
            let (table, column) = error_location();
            return Err(CatalogError::SetNullOnRequiredColumn { table, column });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::model::{Field, FieldKind};
    use pretty_assertions::assert_eq;

    fn organizations() -> TableDef {
        TableDef::global("organizations").field(Field::string("name", 200))
    }

    #[test]
    fn minimal_catalog_is_valid() {
        let catalog = Catalog::new(vec![
            organizations(),
            TableDef::entity("employees").field(Field::string("code", 32)),
        ]);
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.table_names(), vec!["organizations", "employees"]);
    }

    #[test]
    fn duplicate_table_is_rejected() {
        let catalog = Catalog::new(vec![organizations(), organizations()]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateTable("organizations".into()))
        );
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let catalog = Catalog::new(vec![organizations().field(Field::string("name", 100))]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateColumn {
                table: "organizations".into(),
                column: "name".into()
            })
        );
    }

    #[test]
    fn missing_primary_key_is_rejected() {
        let catalog = Catalog::new(vec![TableDef::new("settings").field(Field::text("value"))]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::InvalidPrimaryKey("settings".into()))
        );
    }

    #[test]
    fn unknown_referenced_table_is_rejected() {
        let catalog = Catalog::new(vec![
            organizations(),
            TableDef::entity("employees").refers_to("department_id", "departments"),
        ]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownReferencedTable {
                table: "employees".into(),
                column: "department_id".into(),
                references: "departments".into(),
            })
        );
    }

    #[test]
    fn forward_references_are_allowed() {
        let catalog = Catalog::new(vec![
            organizations(),
            TableDef::entity("users").refers_to("employee_id", "employees"),
            TableDef::entity("employees").refers_to("user_id", "users"),
        ]);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn unknown_index_column_is_rejected() {
        let catalog = Catalog::new(vec![organizations().unique(&["slug"])]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownIndexColumn {
                table: "organizations".into(),
                column: "slug".into()
            })
        );
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let catalog = Catalog::new(vec![organizations().index(&["name"]).index(&["name"])]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateIndex("ix_organizations_name".into()))
        );
    }

    #[test]
    fn set_null_requires_nullable_column() {
        let mut employees = TableDef::entity("employees");
        employees.relations[0].on_delete = OnDelete::SetNull;
        let catalog = Catalog::new(vec![organizations(), employees]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::SetNullOnRequiredColumn {
                table: "employees".into(),
                column: "organization_id".into()
            })
        );
    }

    #[test]
    fn nullable_primary_key_is_rejected() {
        let mut table = organizations();
        table.fields[0].nullable = true;
        assert_eq!(
            Catalog::new(vec![table]).validate(),
            Err(CatalogError::InvalidPrimaryKey("organizations".into()))
        );
    }

    #[test]
    fn primary_key_must_be_named_id() {
        let mut table = organizations();
        table.fields[0].name = "key";
        assert_eq!(
            Catalog::new(vec![table]).validate(),
            Err(CatalogError::InvalidPrimaryKey("organizations".into()))
        );
    }

    #[test]
    fn relation_without_column_is_rejected() {
        let mut employees = TableDef::entity("employees");
        employees.relations[0].column = "org_id";
        let catalog = Catalog::new(vec![organizations(), employees]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingRelationColumn {
                table: "employees".into(),
                column: "org_id".into()
            })
        );
    }

    #[test]
    fn relation_must_reference_primary_key() {
        let mut employees = TableDef::entity("employees");
        employees.relations[0].referenced_column = "name";
        let catalog = Catalog::new(vec![organizations(), employees]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::NotPrimaryKeyReference {
                table: "employees".into(),
                column: "organization_id".into(),
                references: "organizations".into(),
            })
        );
    }

    #[test]
    fn relation_type_must_match_referenced_key() {
        let mut employees = TableDef::entity("employees");
        for field in employees.fields.iter_mut() {
            if field.name == "organization_id" {
                field.kind = FieldKind::Integer;
            }
        }
        let catalog = Catalog::new(vec![organizations(), employees]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::RelationTypeMismatch {
                table: "employees".into(),
                column: "organization_id".into()
            })
        );
    }

    #[test]
    fn colliding_generated_names_are_rejected() {
        let catalog = Catalog::new(vec![
            TableDef::global("a_b")
                .field(Field::string("c", 16))
                .index(&["c"]),
            TableDef::global("a")
                .field(Field::string("b_c", 16))
                .index(&["b_c"]),
        ]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateIdentifier("ix_a_b_c".into()))
        );
    }

    #[test]
    fn long_table_name_is_rejected() {
        let name: &'static str = Box::leak("t".repeat(70).into_boxed_str());
        let catalog = Catalog::new(vec![TableDef::global(name)]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::IdentifierTooLong(name.to_string()))
        );
    }

    #[test]
    fn long_column_name_is_rejected() {
        let column: &'static str = Box::leak("c".repeat(64).into_boxed_str());
        let catalog = Catalog::new(vec![organizations().field(Field::text(column))]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::IdentifierTooLong(column.to_string()))
        );
    }

    #[test]
    fn name_at_postgres_limit_is_accepted() {
        let name: &'static str = Box::leak("t".repeat(MAX_IDENTIFIER_LEN).into_boxed_str());
        let catalog = Catalog::new(vec![TableDef::global(name)]);
        assert_eq!(catalog.validate(), Ok(()));
    }
}
