use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("benefit_plans")
            .field(Field::string("plan_type", 32))
            .field(Field::string("provider_name", 200).null())
            .field(Field::money("employer_contribution").default_int(0))
            .field(Field::money("employee_contribution").default_int(0))
            .field(Field::money("coverage_amount").null())
            .field(Field::boolean("allows_dependents").default_bool(true))
            .field(Field::small_integer("max_dependents").null())
            .field(Field::date("effective_from"))
            .field(Field::date("effective_to").null()),
        TableDef::entity("benefit_enrollments")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("benefit_plan_id", "benefit_plans", Restrict)
            .field(Field::date("enrolled_on"))
            .field(Field::date("coverage_start"))
            .field(Field::date("coverage_end").null())
            .field(Field::string("coverage_tier", 32).default_str("EmployeeOnly"))
            .field(Field::money("monthly_premium").default_int(0))
            .field(Field::status("status", "Active"))
            .unique(&["employee_id", "benefit_plan_id", "coverage_start"]),
        TableDef::record("benefit_enrollment_dependents")
            .belongs_to("benefit_enrollment_id", "benefit_enrollments", Cascade)
            .belongs_to("employee_dependent_id", "employee_dependents", Cascade)
            .unique(&["benefit_enrollment_id", "employee_dependent_id"]),
        TableDef::entity("benefit_claims")
            .belongs_to("benefit_enrollment_id", "benefit_enrollments", Restrict)
            .refers_to("employee_dependent_id", "employee_dependents")
            .field(Field::string("claim_number", 32))
            .field(Field::date("incurred_on"))
            .field(Field::money("claimed_amount"))
            .field(Field::money("approved_amount").null())
            .field(Field::text("description").null())
            .field(Field::status("status", "Submitted"))
            .refers_to("document_id", "documents")
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "claim_number"]),
    ]
}
