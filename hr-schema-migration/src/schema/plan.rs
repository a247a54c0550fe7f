use super::{
    catalog::Catalog,
    model::{Relation, TableDef},
    statement::{self, SchemaStatement},
};
use std::collections::HashSet;

/// A table together with the relations that can be declared directly in
/// its `CREATE TABLE` statement.
#[derive(Debug, Clone)]
pub struct PlannedTable<'a> {
    pub table: &'a TableDef,
    pub inline: Vec<&'a Relation>,
}

/// A relation whose target table is created later than its owner, added
/// once all tables exist.
#[derive(Debug, Clone, Copy)]
pub struct DeferredRelation<'a> {
    pub table: &'a TableDef,
    pub relation: &'a Relation,
}

#[derive(Debug, Clone)]
pub struct MigrationPlan<'a> {
    pub tables: Vec<PlannedTable<'a>>,
    pub deferred: Vec<DeferredRelation<'a>>,
}

impl Catalog {
    pub fn plan(&self) -> MigrationPlan<'_> {
        let mut created = HashSet::new();
        let mut tables = Vec::with_capacity(self.len());
        let mut deferred = Vec::new();

        for table in self.tables() {
            created.insert(table.name);
            let mut inline = Vec::new();
            for relation in &table.relations {
                if created.contains(relation.references) {
                    inline.push(relation);
                } else {
                    deferred.push(DeferredRelation { table, relation });
                }
            }
            tables.push(PlannedTable { table, inline });
        }

        MigrationPlan { tables, deferred }
    }
}

impl<'a> MigrationPlan<'a> {
    /// Tables in catalog order, then every index, then the deferred foreign
    /// keys.
    pub fn up_statements(&self) -> Vec<SchemaStatement> {
        let tables = self.tables.iter().map(|planned| {
            SchemaStatement::CreateTable(statement::create_table(planned.table, &planned.inline))
        });
        let indexes = self.tables.iter().flat_map(|planned| {
            planned
                .table
                .effective_indexes()
                .into_iter()
                .map(move |index| {
                    SchemaStatement::CreateIndex(statement::create_index(planned.table, &index))
                })
        });
        let foreign_keys = self.deferred.iter().map(|deferred| {
            SchemaStatement::CreateForeignKey(statement::create_foreign_key(
                deferred.table,
                deferred.relation,
            ))
        });

        tables.chain(indexes).chain(foreign_keys).collect()
    }

    /// Deferred foreign keys first, then tables in reverse creation order.
    /// Indexes go away with their tables.
    pub fn down_statements(&self) -> Vec<SchemaStatement> {
        let foreign_keys = self.deferred.iter().rev().map(|deferred| {
            SchemaStatement::DropForeignKey(statement::drop_foreign_key(
                deferred.table,
                deferred.relation,
            ))
        });
        let tables = self
            .tables
            .iter()
            .rev()
            .map(|planned| SchemaStatement::DropTable(statement::drop_table(planned.table)));

        foreign_keys.chain(tables).collect()
    }

    pub fn index_count(&self) -> usize {
        self.tables
            .iter()
            .map(|planned| planned.table.effective_indexes().len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::model::Field;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            TableDef::global("organizations").field(Field::string("name", 200)),
            TableDef::entity("users")
                .field(Field::string("email", 256))
                .refers_to("employee_id", "employees")
                .unique(&["organization_id", "email"]),
            TableDef::entity("employees")
                .refers_to("user_id", "users")
                .refers_to("manager_id", "employees"),
        ])
    }

    #[test]
    fn forward_relations_are_deferred() {
        let catalog = catalog();
        let plan = catalog.plan();

        let deferred: Vec<_> = plan
            .deferred
            .iter()
            .map(|d| (d.table.name, d.relation.column))
            .collect();
        assert_eq!(deferred, vec![("users", "employee_id")]);

        let inline: Vec<_> = plan
            .tables
            .iter()
            .map(|planned| {
                (
                    planned.table.name,
                    planned.inline.iter().map(|r| r.column).collect::<Vec<_>>(),
                )
            })
            .collect();
        assert_eq!(
            inline,
            vec![
                ("organizations", vec![]),
                ("users", vec!["organization_id"]),
                ("employees", vec!["organization_id", "user_id", "manager_id"]),
            ]
        );
    }

    #[test]
    fn up_statements_are_ordered() {
        let catalog = catalog();
        let plan = catalog.plan();
        let kinds: Vec<_> = plan
            .up_statements()
            .iter()
            .map(|statement| match statement {
                SchemaStatement::CreateTable(_) => "table",
                SchemaStatement::CreateIndex(_) => "index",
                SchemaStatement::CreateForeignKey(_) => "fk",
                _ => "other",
            })
            .collect();
        // users: unique + organization_id is covered, employee_id
        // employees: organization_id, user_id, manager_id
        assert_eq!(
            kinds,
            vec!["table", "table", "table", "index", "index", "index", "index", "index", "fk"]
        );
        assert_eq!(plan.index_count(), 5);
    }

    #[test]
    fn down_statements_reverse_up() {
        let catalog = catalog();
        let plan = catalog.plan();
        let sql: Vec<_> = plan
            .down_statements()
            .iter()
            .map(SchemaStatement::to_postgres)
            .collect();
        assert_eq!(
            sql,
            vec![
                r#"ALTER TABLE "users" DROP CONSTRAINT "fk_users_employee_id""#,
                r#"DROP TABLE "employees""#,
                r#"DROP TABLE "users""#,
                r#"DROP TABLE "organizations""#,
            ]
        );
    }
}
