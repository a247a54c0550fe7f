use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("document_categories")
            .refers_to("parent_category_id", "document_categories")
            .field(Field::integer("retention_days").null())
            .field(Field::flag("is_confidential")),
        TableDef::entity("document_templates")
            .refers_to("document_category_id", "document_categories")
            .field(Field::string("code", 32))
            .field(Field::string("name", 200))
            .field(Field::string("template_type", 32))
            .field(Field::text("body"))
            .field(Field::json("placeholders").null())
            .field(Field::integer("version").default_int(1))
            .field(Field::boolean("is_active").default_bool(true))
            .unique(&["organization_id", "code"]),
        TableDef::entity("documents")
            .refers_to("document_category_id", "document_categories")
            .refers_to("owner_employee_id", "employees")
            .field(Field::string("title", 256))
            .field(Field::string("file_name", 256))
            .field(Field::string("content_type", 128))
            .field(Field::big_integer("size_bytes"))
            .field(Field::string("storage_key", 1024))
            .field(Field::string("checksum", 128).null())
            .field(Field::integer("current_version").default_int(1))
            .field(Field::date("expires_on").null())
            .field(Field::flag("is_confidential"))
            .index(&["organization_id", "owner_employee_id"]),
        TableDef::record("document_versions")
            .belongs_to("document_id", "documents", Cascade)
            .field(Field::integer("version"))
            .field(Field::string("file_name", 256))
            .field(Field::big_integer("size_bytes"))
            .field(Field::string("storage_key", 1024))
            .field(Field::string("checksum", 128).null())
            .field(Field::string("change_note", 512).null())
            .unique(&["document_id", "version"]),
        TableDef::record("document_shares")
            .belongs_to("document_id", "documents", Cascade)
            .refers_to_with("shared_with_employee_id", "employees", Cascade)
            .refers_to_with("shared_with_role_id", "roles", Cascade)
            .field(Field::string("permission", 16).default_str("View"))
            .field(Field::timestamp("expires_at").null()),
        TableDef::record("document_acknowledgements")
            .belongs_to("document_id", "documents", Cascade)
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::timestamp("acknowledged_at").default_now())
            .field(Field::string("ip_address", 64).null())
            .unique(&["document_id", "employee_id"]),
        TableDef::entity("employee_letters")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("document_template_id", "document_templates", Restrict)
            .refers_to("document_id", "documents")
            .field(Field::string("letter_type", 32))
            .field(Field::string("reference_number", 64))
            .field(Field::date("issued_on").null())
            .field(Field::status("status", "Draft"))
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "reference_number"]),
    ]
}
