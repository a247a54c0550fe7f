use super::naming;

pub const ID: &str = "id";
pub const ORGANIZATION_ID: &str = "organization_id";
pub const ORGANIZATIONS: &str = "organizations";

/// Column types used across the schema. Each maps to exactly one
/// Postgres type, see [`FieldKind::postgres_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Uuid,
    String(u32),
    Text,
    SmallInteger,
    Integer,
    BigInteger,
    Decimal(u32, u32),
    Boolean,
    Date,
    Time,
    TimestampTz,
    Json,
}

impl FieldKind {
    /// Type name as reported by `information_schema.columns.data_type`.
    pub fn postgres_type(&self) -> &'static str {
        match self {
            FieldKind::Uuid => "uuid",
            FieldKind::String(_) => "character varying",
            FieldKind::Text => "text",
            FieldKind::SmallInteger => "smallint",
            FieldKind::Integer => "integer",
            FieldKind::BigInteger => "bigint",
            FieldKind::Decimal(_, _) => "numeric",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Time => "time without time zone",
            FieldKind::TimestampTz => "timestamp with time zone",
            FieldKind::Json => "jsonb",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
    CurrentTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
    pub default: Option<FieldDefault>,
    pub primary_key: bool,
}

impl Field {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            default: None,
            primary_key: false,
        }
    }

    pub fn uuid(name: &'static str) -> Self {
        Self::new(name, FieldKind::Uuid)
    }

    pub fn string(name: &'static str, len: u32) -> Self {
        Self::new(name, FieldKind::String(len))
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn small_integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::SmallInteger)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn big_integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::BigInteger)
    }

    pub fn decimal(name: &'static str, precision: u32, scale: u32) -> Self {
        Self::new(name, FieldKind::Decimal(precision, scale))
    }

    /// Monetary amount, `numeric(18, 2)`.
    pub fn money(name: &'static str) -> Self {
        Self::decimal(name, 18, 2)
    }

    /// Fractional quantity such as leave days or hours, `numeric(9, 2)`.
    pub fn quantity(name: &'static str) -> Self {
        Self::decimal(name, 9, 2)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Boolean flag defaulting to `false`.
    pub fn flag(name: &'static str) -> Self {
        Self::boolean(name).default_bool(false)
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn time(name: &'static str) -> Self {
        Self::new(name, FieldKind::Time)
    }

    pub fn timestamp(name: &'static str) -> Self {
        Self::new(name, FieldKind::TimestampTz)
    }

    pub fn json(name: &'static str) -> Self {
        Self::new(name, FieldKind::Json)
    }

    /// Workflow status column, `varchar(32)` with an initial value.
    pub fn status(name: &'static str, initial: &'static str) -> Self {
        Self::string(name, 32).default_str(initial)
    }

    pub fn null(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn default_bool(mut self, value: bool) -> Self {
        self.default = Some(FieldDefault::Bool(value));
        self
    }

    pub fn default_int(mut self, value: i64) -> Self {
        self.default = Some(FieldDefault::Int(value));
        self
    }

    pub fn default_str(mut self, value: &'static str) -> Self {
        self.default = Some(FieldDefault::Str(value));
        self
    }

    pub fn default_now(mut self) -> Self {
        self.default = Some(FieldDefault::CurrentTimestamp);
        self
    }

    fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// Referential action applied to dependent rows when the referenced row
/// is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnDelete {
    Cascade,
    Restrict,
    SetNull,
    NoAction,
}

impl OnDelete {
    /// `pg_constraint.confdeltype` code of the action.
    pub fn postgres_code(&self) -> char {
        match self {
            OnDelete::Cascade => 'c',
            OnDelete::Restrict => 'r',
            OnDelete::SetNull => 'n',
            OnDelete::NoAction => 'a',
        }
    }

    pub fn from_postgres_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(OnDelete::Cascade),
            'r' => Some(OnDelete::Restrict),
            'n' => Some(OnDelete::SetNull),
            'a' => Some(OnDelete::NoAction),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub column: &'static str,
    pub references: &'static str,
    pub referenced_column: &'static str,
    pub on_delete: OnDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIndex {
    pub columns: Vec<&'static str>,
    pub unique: bool,
}

impl TableIndex {
    pub fn name(&self, table: &str) -> String {
        let prefix = if self.unique { "ux" } else { "ix" };
        let mut parts = vec![prefix, table];
        parts.extend(self.columns.iter().copied());
        naming::identifier(&parts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub fields: Vec<Field>,
    pub relations: Vec<Relation>,
    pub indexes: Vec<TableIndex>,
}

impl TableDef {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            relations: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Tenant-scoped business entity: identifier, tenant, audit columns and
    /// a soft-delete flag.
    pub fn entity(name: &'static str) -> Self {
        Self::new(name).id().tenant().audited().soft_deleted()
    }

    /// Tenant-scoped append-only row (ledgers, logs, line items that are
    /// never soft-deleted on their own).
    pub fn record(name: &'static str) -> Self {
        Self::new(name).id().tenant().audited()
    }

    /// Row shared by all tenants.
    pub fn global(name: &'static str) -> Self {
        Self::new(name).id().audited()
    }

    pub fn id(self) -> Self {
        self.field(Field::uuid(ID).primary_key())
    }

    pub fn tenant(self) -> Self {
        self.belongs_to(ORGANIZATION_ID, ORGANIZATIONS, OnDelete::Restrict)
    }

    pub fn audited(self) -> Self {
        self.field(Field::timestamp("created_at").default_now())
            .field(Field::uuid("created_by").null())
            .field(Field::timestamp("updated_at").null())
            .field(Field::uuid("updated_by").null())
    }

    pub fn soft_deleted(self) -> Self {
        self.field(Field::flag("is_deleted"))
            .field(Field::timestamp("deleted_at").null())
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Required reference: non-null uuid column plus a foreign key.
    pub fn belongs_to(
        self,
        column: &'static str,
        references: &'static str,
        on_delete: OnDelete,
    ) -> Self {
        self.field(Field::uuid(column))
            .relation(column, references, on_delete)
    }

    /// Optional reference, cleared when the referenced row goes away.
    pub fn refers_to(self, column: &'static str, references: &'static str) -> Self {
        self.refers_to_with(column, references, OnDelete::SetNull)
    }

    pub fn refers_to_with(
        self,
        column: &'static str,
        references: &'static str,
        on_delete: OnDelete,
    ) -> Self {
        self.field(Field::uuid(column).null())
            .relation(column, references, on_delete)
    }

    fn relation(
        mut self,
        column: &'static str,
        references: &'static str,
        on_delete: OnDelete,
    ) -> Self {
        self.relations.push(Relation {
            column,
            references,
            referenced_column: ID,
            on_delete,
        });
        self
    }

    pub fn index(mut self, columns: &[&'static str]) -> Self {
        self.indexes.push(TableIndex {
            columns: columns.to_vec(),
            unique: false,
        });
        self
    }

    pub fn unique(mut self, columns: &[&'static str]) -> Self {
        self.indexes.push(TableIndex {
            columns: columns.to_vec(),
            unique: true,
        });
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.primary_key)
    }

    pub fn is_tenant_scoped(&self) -> bool {
        self.relations.iter().any(|relation| {
            relation.column == ORGANIZATION_ID && relation.references == ORGANIZATIONS
        })
    }

    pub fn foreign_key_name(&self, relation: &Relation) -> String {
        naming::identifier(&["fk", self.name, relation.column])
    }

    /// Declared indexes followed by one index per relation column that no
    /// declared index leads with.
    pub fn effective_indexes(&self) -> Vec<TableIndex> {
        let mut indexes = self.indexes.clone();
        for relation in &self.relations {
            let covered = indexes
                .iter()
                .any(|index| index.columns.first() == Some(&relation.column));
            if !covered {
                indexes.push(TableIndex {
                    columns: vec![relation.column],
                    unique: false,
                });
            }
        }
        indexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entity_has_standard_columns() {
        let table = TableDef::entity("widgets");
        let names: Vec<_> = table.fields.iter().map(|field| field.name).collect();
        assert_eq!(
            names,
            vec![
                "id",
                "organization_id",
                "created_at",
                "created_by",
                "updated_at",
                "updated_by",
                "is_deleted",
                "deleted_at"
            ]
        );
        assert!(table.is_tenant_scoped());
        assert_eq!(table.primary_key().map(|field| field.name), Some("id"));
        assert_eq!(
            table.get_field("is_deleted").and_then(|f| f.default.clone()),
            Some(FieldDefault::Bool(false))
        );
    }

    #[test]
    fn global_table_is_not_tenant_scoped() {
        let table = TableDef::global("currencies");
        assert!(!table.is_tenant_scoped());
        assert!(table.get_field(ORGANIZATION_ID).is_none());
    }

    #[test]
    fn optional_reference_is_nullable_and_sets_null() {
        let table = TableDef::record("widgets").refers_to("owner_id", "employees");
        let field = table.get_field("owner_id").expect("field exists");
        assert!(field.nullable);
        let relation = table
            .relations
            .iter()
            .find(|relation| relation.column == "owner_id")
            .expect("relation exists");
        assert_eq!(relation.on_delete, OnDelete::SetNull);
        assert_eq!(relation.referenced_column, ID);
    }

    #[test]
    fn relation_columns_get_indexes_unless_covered() {
        let table = TableDef::record("widgets")
            .belongs_to("employee_id", "employees", OnDelete::Cascade)
            .unique(&["employee_id", "code"])
            .refers_to("owner_id", "employees");
        let indexes = table.effective_indexes();
        let leading: Vec<_> = indexes.iter().map(|index| index.columns[0]).collect();
        assert_eq!(leading, vec!["employee_id", "organization_id", "owner_id"]);
        assert_eq!(
            indexes.iter().filter(|index| index.unique).count(),
            1,
            "only the declared index is unique"
        );
    }

    #[test]
    fn constraint_names() {
        let table = TableDef::record("leave_requests");
        let relation = &table.relations[0];
        assert_eq!(
            table.foreign_key_name(relation),
            "fk_leave_requests_organization_id"
        );
        let index = TableIndex {
            columns: vec!["employee_id", "start_date"],
            unique: true,
        };
        assert_eq!(index.name("leave_requests"), "ux_leave_requests_employee_id_start_date");
    }

    #[test]
    fn delete_action_codes_round_trip() {
        for action in [
            OnDelete::Cascade,
            OnDelete::Restrict,
            OnDelete::SetNull,
            OnDelete::NoAction,
        ] {
            assert_eq!(OnDelete::from_postgres_code(action.postgres_code()), Some(action));
        }
        assert_eq!(OnDelete::from_postgres_code('d'), None);
    }
}
