use super::{active, lookup};
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::global("currencies")
            .field(Field::string("code", 3))
            .field(Field::string("name", 100))
            .field(Field::string("symbol", 8).null())
            .field(Field::small_integer("minor_units").default_int(2))
            .field(active())
            .unique(&["code"]),
        TableDef::new("organizations")
            .id()
            .audited()
            .soft_deleted()
            .field(Field::string("name", 200))
            .field(Field::string("legal_name", 300).null())
            .field(Field::string("slug", 100))
            .field(Field::string("registration_number", 64).null())
            .field(Field::string("tax_identifier", 64).null())
            .field(Field::string("industry", 100).null())
            .field(Field::string("country_code", 2))
            .field(Field::string("time_zone", 64).default_str("UTC"))
            .field(Field::string("logo_url", 1024).null())
            .field(Field::string("subscription_plan", 32).default_str("Free"))
            .field(active())
            .refers_to_with("base_currency_id", "currencies", Restrict)
            .unique(&["slug"]),
        TableDef::record("organization_settings")
            .field(Field::string("key", 128))
            .field(Field::json("value"))
            .unique(&["organization_id", "key"]),
        TableDef::entity("fiscal_years")
            .field(Field::string("name", 50))
            .field(Field::date("start_date"))
            .field(Field::date("end_date"))
            .field(Field::flag("is_closed"))
            .unique(&["organization_id", "name"]),
        lookup("branches")
            .field(Field::string("address_line1", 256).null())
            .field(Field::string("address_line2", 256).null())
            .field(Field::string("city", 100).null())
            .field(Field::string("state", 100).null())
            .field(Field::string("postal_code", 20).null())
            .field(Field::string("country_code", 2).null())
            .field(Field::string("phone", 32).null())
            .field(Field::string("time_zone", 64).null())
            .field(Field::flag("is_head_office"))
            .refers_to("manager_employee_id", "employees"),
        lookup("cost_centers").refers_to("parent_cost_center_id", "cost_centers"),
        lookup("departments")
            .refers_to("parent_department_id", "departments")
            .refers_to("branch_id", "branches")
            .refers_to("cost_center_id", "cost_centers")
            .refers_to("head_employee_id", "employees"),
        lookup("job_grades")
            .field(Field::integer("level"))
            .field(Field::money("min_salary").null())
            .field(Field::money("max_salary").null())
            .refers_to_with("currency_id", "currencies", Restrict),
        lookup("designations")
            .refers_to("department_id", "departments")
            .refers_to("job_grade_id", "job_grades"),
        TableDef::entity("work_locations")
            .field(Field::string("name", 200))
            .field(Field::decimal("latitude", 9, 6))
            .field(Field::decimal("longitude", 9, 6))
            .field(Field::integer("radius_meters").default_int(100))
            .field(active())
            .belongs_to("branch_id", "branches", Cascade),
    ]
}
