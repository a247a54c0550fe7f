use migration::schema::{Catalog, CatalogError, SchemaStatement};

/// Postgres DDL of the up migration, one statement per entry.
pub fn render_up(catalog: &Catalog) -> Result<Vec<String>, CatalogError> {
    catalog.validate()?;
    Ok(render(catalog.plan().up_statements()))
}

/// Postgres DDL of the down migration, one statement per entry.
pub fn render_down(catalog: &Catalog) -> Vec<String> {
    render(catalog.plan().down_statements())
}

/// Joins rendered statements into an executable script.
pub fn to_script(statements: &[String]) -> String {
    statements
        .iter()
        .map(|statement| format!("{statement};\n"))
        .collect()
}

fn render(statements: Vec<SchemaStatement>) -> Vec<String> {
    statements.iter().map(SchemaStatement::to_postgres).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::schema::{Field, TableDef};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            TableDef::global("organizations").field(Field::string("name", 200)),
            TableDef::entity("users").refers_to("employee_id", "employees"),
            TableDef::entity("employees").refers_to("user_id", "users"),
        ])
    }

    #[test]
    fn up_script_creates_tables_first() {
        let statements = render_up(&catalog()).unwrap();
        assert!(statements[0].starts_with(r#"CREATE TABLE "organizations""#));
        assert!(statements[1].starts_with(r#"CREATE TABLE "users""#));
        assert!(statements[2].starts_with(r#"CREATE TABLE "employees""#));
        let last = statements.last().unwrap();
        assert!(last.starts_with(r#"ALTER TABLE "users" ADD CONSTRAINT "fk_users_employee_id""#));
    }

    #[test]
    fn up_script_rejects_invalid_catalog() {
        let catalog = Catalog::new(vec![TableDef::global("a"), TableDef::global("a")]);
        assert_eq!(
            render_up(&catalog),
            Err(CatalogError::DuplicateTable("a".into()))
        );
    }

    #[test]
    fn down_script() {
        let script = to_script(&render_down(&catalog()));
        assert_eq!(
            script,
            concat!(
                "ALTER TABLE \"users\" DROP CONSTRAINT \"fk_users_employee_id\";\n",
                "DROP TABLE \"employees\";\n",
                "DROP TABLE \"users\";\n",
                "DROP TABLE \"organizations\";\n",
            )
        );
    }
}
