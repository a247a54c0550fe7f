use super::active;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::record("audit_logs")
            .refers_to("user_id", "users")
            .field(Field::string("action", 32))
            .field(Field::string("entity_type", 64))
            .field(Field::uuid("entity_id").null())
            .field(Field::json("old_values").null())
            .field(Field::json("new_values").null())
            .field(Field::string("ip_address", 64).null())
            .field(Field::string("user_agent", 512).null())
            .field(Field::string("correlation_id", 64).null())
            .field(Field::timestamp("occurred_at").default_now())
            .index(&["organization_id", "occurred_at"])
            .index(&["entity_type", "entity_id"]),
        TableDef::entity("custom_field_definitions")
            .field(Field::string("entity_type", 64))
            .field(Field::string("field_key", 64))
            .field(Field::string("label", 200))
            .field(Field::string("field_type", 32))
            .field(Field::flag("is_required"))
            .field(Field::json("options").null())
            .field(Field::integer("display_order").default_int(0))
            .field(active())
            .unique(&["organization_id", "entity_type", "field_key"]),
        TableDef::record("custom_field_values")
            .belongs_to("custom_field_definition_id", "custom_field_definitions", Cascade)
            .field(Field::uuid("entity_id"))
            .field(Field::text("value_text").null())
            .field(Field::json("value_json").null())
            .unique(&["custom_field_definition_id", "entity_id"]),
        TableDef::record("import_jobs")
            .belongs_to("requested_by_user_id", "users", Restrict)
            .field(Field::string("entity_type", 64))
            .refers_to("source_document_id", "documents")
            .field(Field::status("status", "Queued"))
            .field(Field::integer("total_rows").default_int(0))
            .field(Field::integer("processed_rows").default_int(0))
            .field(Field::integer("failed_rows").default_int(0))
            .field(Field::json("errors").null())
            .field(Field::timestamp("started_at").null())
            .field(Field::timestamp("finished_at").null()),
        TableDef::record("export_jobs")
            .belongs_to("requested_by_user_id", "users", Restrict)
            .field(Field::string("entity_type", 64))
            .field(Field::string("format", 16).default_str("csv"))
            .field(Field::json("filters").null())
            .refers_to("result_document_id", "documents")
            .field(Field::status("status", "Queued"))
            .field(Field::integer("row_count").null())
            .field(Field::timestamp("started_at").null())
            .field(Field::timestamp("finished_at").null())
            .field(Field::timestamp("expires_at").null()),
    ]
}
