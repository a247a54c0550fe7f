use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("holiday_calendars")
            .field(Field::string("name", 100))
            .field(Field::small_integer("year"))
            .refers_to("branch_id", "branches")
            .field(Field::flag("is_default"))
            .unique(&["organization_id", "name", "year"]),
        TableDef::entity("holidays")
            .belongs_to("holiday_calendar_id", "holiday_calendars", Cascade)
            .field(Field::string("name", 200))
            .field(Field::date("holiday_date"))
            .field(Field::flag("is_optional"))
            .field(Field::text("description").null())
            .unique(&["holiday_calendar_id", "holiday_date"]),
        lookup("leave_types")
            .field(Field::boolean("is_paid").default_bool(true))
            .field(Field::flag("requires_attachment"))
            .field(Field::boolean("allow_half_day").default_bool(true))
            .field(Field::flag("allow_negative_balance"))
            .field(Field::quantity("max_consecutive_days").null())
            .field(Field::string("gender_restriction", 16).null())
            .field(Field::string("color", 16).null()),
        TableDef::entity("leave_policies")
            .field(Field::string("name", 200))
            .field(Field::text("description").null())
            .field(Field::date("effective_from"))
            .field(Field::date("effective_to").null())
            .field(Field::flag("is_default"))
            .unique(&["organization_id", "name"]),
        TableDef::entity("leave_policy_rules")
            .belongs_to("leave_policy_id", "leave_policies", Cascade)
            .belongs_to("leave_type_id", "leave_types", Restrict)
            .field(Field::quantity("annual_entitlement"))
            .field(Field::string("accrual_frequency", 16).default_str("Yearly"))
            .field(Field::quantity("accrual_amount").null())
            .field(Field::quantity("carry_forward_limit").null())
            .field(Field::flag("is_encashable"))
            .field(Field::quantity("max_encashment_days").null())
            .field(Field::flag("probation_eligible"))
            .field(Field::integer("min_service_days").default_int(0))
            .unique(&["leave_policy_id", "leave_type_id"]),
        TableDef::record("employee_leave_policies")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("leave_policy_id", "leave_policies", Restrict)
            .field(Field::date("effective_from"))
            .field(Field::date("effective_to").null())
            .index(&["employee_id", "effective_from"]),
        TableDef::record("leave_balances")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("leave_type_id", "leave_types", Restrict)
            .refers_to("fiscal_year_id", "fiscal_years")
            .field(Field::quantity("opening_balance").default_int(0))
            .field(Field::quantity("accrued").default_int(0))
            .field(Field::quantity("used").default_int(0))
            .field(Field::quantity("pending").default_int(0))
            .field(Field::quantity("carried_forward").default_int(0))
            .field(Field::quantity("encashed").default_int(0))
            .field(Field::quantity("lapsed").default_int(0))
            .field(Field::date("last_accrued_on").null())
            .unique(&["employee_id", "leave_type_id", "fiscal_year_id"]),
        TableDef::entity("leave_requests")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("leave_type_id", "leave_types", Restrict)
            .field(Field::date("start_date"))
            .field(Field::date("end_date"))
            .field(Field::flag("is_half_day"))
            .field(Field::string("half_day_session", 16).null())
            .field(Field::quantity("total_days"))
            .field(Field::text("reason").null())
            .field(Field::status("status", "Pending"))
            .field(Field::timestamp("applied_at").default_now())
            .field(Field::timestamp("cancelled_at").null())
            .field(Field::string("cancellation_reason", 512).null())
            .refers_to("attachment_document_id", "documents")
            .refers_to("approval_request_id", "approval_requests")
            .index(&["employee_id", "start_date"])
            .index(&["organization_id", "status"]),
        TableDef::record("leave_request_days")
            .belongs_to("leave_request_id", "leave_requests", Cascade)
            .field(Field::date("leave_date"))
            .field(Field::quantity("day_fraction").default_int(1))
            .unique(&["leave_request_id", "leave_date"]),
        TableDef::record("leave_transactions")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("leave_type_id", "leave_types", Restrict)
            .refers_to("leave_balance_id", "leave_balances")
            .refers_to("leave_request_id", "leave_requests")
            .field(Field::string("transaction_type", 32))
            .field(Field::quantity("days"))
            .field(Field::date("effective_date"))
            .field(Field::string("remarks", 512).null())
            .index(&["employee_id", "effective_date"]),
        TableDef::entity("comp_off_grants")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::date("worked_on"))
            .field(Field::quantity("days"))
            .field(Field::date("expires_on").null())
            .field(Field::string("reason", 512).null())
            .field(Field::status("status", "Pending"))
            .refers_to("leave_transaction_id", "leave_transactions"),
        TableDef::entity("leave_encashments")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("leave_type_id", "leave_types", Restrict)
            .field(Field::quantity("days"))
            .field(Field::money("amount"))
            .field(Field::status("status", "Pending"))
            .refers_to("payroll_run_id", "payroll_runs")
            .refers_to("approval_request_id", "approval_requests"),
    ]
}
