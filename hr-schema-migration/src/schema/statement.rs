use super::model::{Field, FieldDefault, FieldKind, OnDelete, Relation, TableDef, TableIndex};
use sea_orm_migration::prelude::*;

/// A single DDL statement of the migration.
#[derive(Debug, Clone)]
pub enum SchemaStatement {
    CreateTable(TableCreateStatement),
    CreateIndex(IndexCreateStatement),
    CreateForeignKey(ForeignKeyCreateStatement),
    DropForeignKey(ForeignKeyDropStatement),
    DropTable(TableDropStatement),
}

impl SchemaStatement {
    pub async fn execute(self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        match self {
            SchemaStatement::CreateTable(statement) => manager.create_table(statement).await,
            SchemaStatement::CreateIndex(statement) => manager.create_index(statement).await,
            SchemaStatement::CreateForeignKey(statement) => {
                manager.create_foreign_key(statement).await
            }
            SchemaStatement::DropForeignKey(statement) => manager.drop_foreign_key(statement).await,
            SchemaStatement::DropTable(statement) => manager.drop_table(statement).await,
        }
    }

    pub fn to_postgres(&self) -> String {
        match self {
            SchemaStatement::CreateTable(statement) => statement.to_string(PostgresQueryBuilder),
            SchemaStatement::CreateIndex(statement) => statement.to_string(PostgresQueryBuilder),
            SchemaStatement::CreateForeignKey(statement) => {
                statement.to_string(PostgresQueryBuilder)
            }
            SchemaStatement::DropForeignKey(statement) => statement.to_string(PostgresQueryBuilder),
            SchemaStatement::DropTable(statement) => statement.to_string(PostgresQueryBuilder),
        }
    }
}

pub(super) fn create_table(table: &TableDef, inline: &[&Relation]) -> TableCreateStatement {
    let mut statement = Table::create();
    statement.table(Alias::new(table.name));
    for field in &table.fields {
        statement.col(&mut column_def(field));
    }
    for relation in inline {
        statement.foreign_key(&mut foreign_key(table, relation));
    }
    statement.to_owned()
}

pub(super) fn create_index(table: &TableDef, index: &TableIndex) -> IndexCreateStatement {
    let mut statement = Index::create();
    statement
        .name(index.name(table.name))
        .table(Alias::new(table.name));
    for column in &index.columns {
        statement.col(Alias::new(*column));
    }
    if index.unique {
        statement.unique();
    }
    statement.to_owned()
}

pub(super) fn create_foreign_key(
    table: &TableDef,
    relation: &Relation,
) -> ForeignKeyCreateStatement {
    foreign_key(table, relation).to_owned()
}

pub(super) fn drop_foreign_key(table: &TableDef, relation: &Relation) -> ForeignKeyDropStatement {
    ForeignKey::drop()
        .name(table.foreign_key_name(relation))
        .table(Alias::new(table.name))
        .to_owned()
}

pub(super) fn drop_table(table: &TableDef) -> TableDropStatement {
    Table::drop().table(Alias::new(table.name)).to_owned()
}

fn foreign_key(table: &TableDef, relation: &Relation) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(table.foreign_key_name(relation))
        .from(Alias::new(table.name), Alias::new(relation.column))
        .to(
            Alias::new(relation.references),
            Alias::new(relation.referenced_column),
        )
        .on_delete(referential_action(relation.on_delete))
        .to_owned()
}

fn referential_action(on_delete: OnDelete) -> ForeignKeyAction {
    match on_delete {
        OnDelete::Cascade => ForeignKeyAction::Cascade,
        OnDelete::Restrict => ForeignKeyAction::Restrict,
        OnDelete::SetNull => ForeignKeyAction::SetNull,
        OnDelete::NoAction => ForeignKeyAction::NoAction,
    }
}

fn column_def(field: &Field) -> ColumnDef {
    let mut column = ColumnDef::new(Alias::new(field.name));
    match field.kind {
        FieldKind::Uuid => column.uuid(),
        FieldKind::String(len) => column.string_len(len),
        FieldKind::Text => column.text(),
        FieldKind::SmallInteger => column.small_integer(),
        FieldKind::Integer => column.integer(),
        FieldKind::BigInteger => column.big_integer(),
        FieldKind::Decimal(precision, scale) => column.decimal_len(precision, scale),
        FieldKind::Boolean => column.boolean(),
        FieldKind::Date => column.date(),
        FieldKind::Time => column.time(),
        FieldKind::TimestampTz => column.timestamp_with_time_zone(),
        FieldKind::Json => column.json_binary(),
    };
    if field.nullable {
        column.null();
    } else {
        column.not_null();
    }
    match &field.default {
        Some(FieldDefault::Bool(value)) => {
            column.default(*value);
        }
        Some(FieldDefault::Int(value)) => {
            column.default(*value);
        }
        Some(FieldDefault::Str(value)) => {
            column.default(*value);
        }
        Some(FieldDefault::CurrentTimestamp) => {
            column.default(Expr::current_timestamp());
        }
        None => {}
    }
    if field.primary_key {
        column.primary_key();
    }
    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::model::Field;

    fn employees() -> TableDef {
        TableDef::entity("employees")
            .field(Field::string("employee_code", 32))
            .field(Field::money("base_salary").null())
            .field(Field::status("status", "Active"))
            .refers_to("manager_id", "employees")
            .unique(&["organization_id", "employee_code"])
    }

    #[test]
    fn create_table_renders_columns_and_inline_keys() {
        let table = employees();
        let inline: Vec<_> = table.relations.iter().collect();
        let sql = SchemaStatement::CreateTable(create_table(&table, &inline)).to_postgres();

        assert!(sql.starts_with(r#"CREATE TABLE "employees""#), "{sql}");
        assert!(sql.contains(r#""id" uuid NOT NULL PRIMARY KEY"#), "{sql}");
        assert!(sql.contains(r#""employee_code" varchar(32) NOT NULL"#), "{sql}");
        assert!(sql.contains(r#""base_salary" decimal(18, 2) NULL"#), "{sql}");
        assert!(sql.contains(r#""is_deleted" bool NOT NULL DEFAULT FALSE"#), "{sql}");
        assert!(sql.contains(r#"DEFAULT 'Active'"#), "{sql}");
        assert!(sql.contains(r#"CONSTRAINT "fk_employees_manager_id""#), "{sql}");
        assert!(
            sql.contains(r#"REFERENCES "organizations" ("id") ON DELETE RESTRICT"#),
            "{sql}"
        );
        assert!(
            sql.contains(r#"REFERENCES "employees" ("id") ON DELETE SET NULL"#),
            "{sql}"
        );
    }

    #[test]
    fn unique_index_renders() {
        let table = employees();
        let statement = create_index(&table, &table.indexes[0]);
        let sql = SchemaStatement::CreateIndex(statement).to_postgres();
        assert!(
            sql.starts_with(r#"CREATE UNIQUE INDEX "ux_employees_organization_id_employee_code""#),
            "{sql}"
        );
        assert!(
            sql.contains(r#"ON "employees" ("organization_id", "employee_code")"#),
            "{sql}"
        );
    }

    #[test]
    fn deferred_foreign_key_renders_as_alter_table() {
        let table = employees();
        let relation = &table.relations[1];
        let statement = create_foreign_key(&table, relation);
        let sql = SchemaStatement::CreateForeignKey(statement).to_postgres();
        assert!(
            sql.starts_with(r#"ALTER TABLE "employees" ADD CONSTRAINT "fk_employees_manager_id""#),
            "{sql}"
        );

        let statement = drop_foreign_key(&table, relation);
        let sql = SchemaStatement::DropForeignKey(statement).to_postgres();
        assert_eq!(
            sql,
            r#"ALTER TABLE "employees" DROP CONSTRAINT "fk_employees_manager_id""#
        );
    }

    #[test]
    fn drop_table_renders() {
        let sql = SchemaStatement::DropTable(drop_table(&employees())).to_postgres();
        assert_eq!(sql, r#"DROP TABLE "employees""#);
    }
}
