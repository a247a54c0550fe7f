use crate::schema::{Field, OnDelete::Cascade, TableDef};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("announcements")
            .field(Field::string("title", 256))
            .field(Field::text("body"))
            .field(Field::string("audience", 32).default_str("All"))
            .refers_to("department_id", "departments")
            .refers_to("branch_id", "branches")
            .field(Field::flag("is_pinned"))
            .field(Field::flag("requires_acknowledgement"))
            .field(Field::timestamp("published_at").null())
            .field(Field::timestamp("expires_at").null())
            .refers_to("author_id", "employees"),
        TableDef::record("announcement_acknowledgements")
            .belongs_to("announcement_id", "announcements", Cascade)
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::timestamp("acknowledged_at").default_now())
            .unique(&["announcement_id", "employee_id"]),
        TableDef::entity("recognitions")
            .belongs_to("recipient_id", "employees", Cascade)
            .refers_to("giver_id", "employees")
            .field(Field::string("recognition_type", 32))
            .field(Field::string("title", 200))
            .field(Field::text("message").null())
            .field(Field::integer("points").default_int(0))
            .field(Field::boolean("is_public").default_bool(true))
            .index(&["organization_id", "created_at"]),
    ]
}
