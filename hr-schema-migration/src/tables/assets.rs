use super::{active, lookup};
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("asset_categories")
            .refers_to("parent_category_id", "asset_categories")
            .field(Field::small_integer("depreciation_years").null())
            .field(Field::flag("requires_serial_number")),
        TableDef::entity("vendors")
            .field(Field::string("name", 200))
            .field(Field::string("contact_name", 200).null())
            .field(Field::string("email", 256).null())
            .field(Field::string("phone", 32).null())
            .field(Field::string("tax_identifier", 64).null())
            .field(Field::text("address").null())
            .field(active())
            .unique(&["organization_id", "name"]),
        TableDef::entity("assets")
            .belongs_to("asset_category_id", "asset_categories", Restrict)
            .refers_to("vendor_id", "vendors")
            .field(Field::string("asset_tag", 64))
            .field(Field::string("name", 200))
            .field(Field::string("serial_number", 128).null())
            .field(Field::string("model", 128).null())
            .field(Field::date("purchase_date").null())
            .field(Field::money("purchase_cost").null())
            .field(Field::date("warranty_expires_on").null())
            .refers_to("branch_id", "branches")
            .field(Field::string("condition", 32).default_str("Good"))
            .field(Field::status("status", "Available"))
            .unique(&["organization_id", "asset_tag"]),
        TableDef::entity("asset_assignments")
            .belongs_to("asset_id", "assets", Cascade)
            .belongs_to("employee_id", "employees", Restrict)
            .field(Field::date("assigned_on"))
            .field(Field::date("expected_return_on").null())
            .field(Field::date("returned_on").null())
            .field(Field::string("condition_on_issue", 32).null())
            .field(Field::string("condition_on_return", 32).null())
            .field(Field::text("notes").null())
            .index(&["asset_id", "assigned_on"]),
        TableDef::entity("asset_requests")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("asset_category_id", "asset_categories", Restrict)
            .field(Field::text("justification").null())
            .field(Field::date("needed_by").null())
            .field(Field::status("status", "Pending"))
            .refers_to("fulfilled_asset_id", "assets")
            .refers_to("approval_request_id", "approval_requests"),
        TableDef::entity("asset_maintenance_records")
            .belongs_to("asset_id", "assets", Cascade)
            .refers_to("vendor_id", "vendors")
            .field(Field::string("maintenance_type", 32))
            .field(Field::date("scheduled_on").null())
            .field(Field::date("completed_on").null())
            .field(Field::money("cost").null())
            .field(Field::text("description").null())
            .field(Field::status("status", "Scheduled")),
        TableDef::record("asset_audits")
            .belongs_to("asset_id", "assets", Cascade)
            .refers_to("audited_by_id", "employees")
            .field(Field::date("audited_on"))
            .field(Field::string("found_condition", 32).null())
            .field(Field::boolean("is_location_verified").default_bool(false))
            .field(Field::text("remarks").null())
            .index(&["asset_id", "audited_on"]),
    ]
}
