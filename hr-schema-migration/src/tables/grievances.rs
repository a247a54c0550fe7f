use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("grievance_categories")
            .refers_to("default_assignee_id", "employees")
            .field(Field::integer("resolution_sla_hours").null())
            .field(Field::flag("is_confidential")),
        TableDef::entity("grievances")
            .field(Field::string("ticket_number", 32))
            .belongs_to("grievance_category_id", "grievance_categories", Restrict)
            .refers_to("raised_by_id", "employees")
            .refers_to("against_employee_id", "employees")
            .refers_to("assigned_to_id", "employees")
            .field(Field::string("subject", 256))
            .field(Field::text("description"))
            .field(Field::flag("is_anonymous"))
            .field(Field::string("priority", 16).default_str("Medium"))
            .field(Field::status("status", "Open"))
            .field(Field::timestamp("due_at").null())
            .field(Field::timestamp("resolved_at").null())
            .field(Field::text("resolution").null())
            .unique(&["organization_id", "ticket_number"])
            .index(&["organization_id", "status"]),
        TableDef::entity("grievance_comments")
            .belongs_to("grievance_id", "grievances", Cascade)
            .refers_to("author_id", "employees")
            .field(Field::text("body"))
            .field(Field::flag("is_internal")),
        TableDef::record("grievance_attachments")
            .belongs_to("grievance_id", "grievances", Cascade)
            .belongs_to("document_id", "documents", Restrict)
            .unique(&["grievance_id", "document_id"]),
        TableDef::record("grievance_escalations")
            .belongs_to("grievance_id", "grievances", Cascade)
            .refers_to("escalated_from_id", "employees")
            .refers_to("escalated_to_id", "employees")
            .field(Field::small_integer("level").default_int(1))
            .field(Field::text("reason").null())
            .field(Field::timestamp("escalated_at").default_now()),
        TableDef::entity("disciplinary_actions")
            .belongs_to("employee_id", "employees", Cascade)
            .refers_to("grievance_id", "grievances")
            .refers_to("issued_by_id", "employees")
            .field(Field::string("action_type", 32))
            .field(Field::date("action_date"))
            .field(Field::text("description"))
            .field(Field::date("valid_until").null())
            .field(Field::status("status", "Issued"))
            .refers_to("document_id", "documents"),
    ]
}
