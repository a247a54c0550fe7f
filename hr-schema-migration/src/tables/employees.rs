use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("employees")
            .field(Field::string("employee_code", 32))
            .field(Field::string("first_name", 100))
            .field(Field::string("middle_name", 100).null())
            .field(Field::string("last_name", 100))
            .field(Field::string("display_name", 200).null())
            .field(Field::string("work_email", 256).null())
            .field(Field::string("personal_email", 256).null())
            .field(Field::string("phone", 32).null())
            .field(Field::date("date_of_birth").null())
            .field(Field::string("gender", 16).null())
            .field(Field::string("marital_status", 16).null())
            .field(Field::string("nationality", 2).null())
            .field(Field::string("blood_group", 8).null())
            .field(Field::string("photo_url", 1024).null())
            .field(Field::date("date_of_joining"))
            .field(Field::date("confirmation_date").null())
            .field(Field::date("probation_end_date").null())
            .field(Field::string("employment_type", 32).default_str("FullTime"))
            .field(Field::status("employment_status", "Active"))
            .field(Field::integer("notice_period_days").default_int(0))
            .refers_to("user_id", "users")
            .refers_to("branch_id", "branches")
            .refers_to("department_id", "departments")
            .refers_to("designation_id", "designations")
            .refers_to("job_grade_id", "job_grades")
            .refers_to("cost_center_id", "cost_centers")
            .refers_to("work_location_id", "work_locations")
            .refers_to("reporting_manager_id", "employees")
            .unique(&["organization_id", "employee_code"])
            .index(&["organization_id", "employment_status"])
            .index(&["organization_id", "work_email"]),
        TableDef::entity("employee_addresses")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("address_type", 16).default_str("Current"))
            .field(Field::string("line1", 256))
            .field(Field::string("line2", 256).null())
            .field(Field::string("city", 100))
            .field(Field::string("state", 100).null())
            .field(Field::string("postal_code", 20).null())
            .field(Field::string("country_code", 2))
            .field(Field::flag("is_primary")),
        TableDef::entity("employee_emergency_contacts")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("name", 200))
            .field(Field::string("relationship", 64))
            .field(Field::string("phone", 32))
            .field(Field::string("alternate_phone", 32).null())
            .field(Field::string("email", 256).null())
            .field(Field::flag("is_primary")),
        TableDef::entity("employee_dependents")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("name", 200))
            .field(Field::string("relationship", 64))
            .field(Field::date("date_of_birth").null())
            .field(Field::string("gender", 16).null())
            .field(Field::flag("is_nominee"))
            .field(Field::decimal("nomination_percentage", 5, 2).null()),
        TableDef::entity("employee_bank_accounts")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("bank_name", 200))
            .field(Field::string("branch_name", 200).null())
            .field(Field::string("account_holder_name", 200))
            .field(Field::string("account_number", 64))
            .field(Field::string("routing_code", 32).null())
            .field(Field::string("iban", 64).null())
            .field(Field::string("swift_code", 16).null())
            .field(Field::flag("is_primary"))
            .field(Field::timestamp("verified_at").null()),
        TableDef::entity("employee_education")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("qualification", 200))
            .field(Field::string("institution", 200))
            .field(Field::string("field_of_study", 200).null())
            .field(Field::small_integer("start_year").null())
            .field(Field::small_integer("end_year").null())
            .field(Field::string("grade", 32).null()),
        TableDef::entity("employee_work_experience")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("company_name", 200))
            .field(Field::string("job_title", 200))
            .field(Field::date("start_date"))
            .field(Field::date("end_date").null())
            .field(Field::text("responsibilities").null())
            .field(Field::string("reason_for_leaving", 512).null()),
        TableDef::entity("employee_identity_documents")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("document_type", 64))
            .field(Field::string("document_number", 64))
            .field(Field::string("issuing_country", 2).null())
            .field(Field::date("issued_on").null())
            .field(Field::date("expires_on").null())
            .field(Field::timestamp("verified_at").null())
            .refers_to("document_id", "documents")
            .unique(&["employee_id", "document_type", "document_number"]),
        lookup("skills").field(Field::string("category", 64).null()),
        TableDef::record("employee_skills")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("skill_id", "skills", Cascade)
            .field(Field::small_integer("proficiency").default_int(1))
            .field(Field::quantity("years_of_experience").null())
            .field(Field::flag("is_primary"))
            .unique(&["employee_id", "skill_id"]),
        TableDef::record("employment_events")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("event_type", 32))
            .field(Field::date("effective_date"))
            .refers_to("from_department_id", "departments")
            .refers_to("to_department_id", "departments")
            .refers_to("from_designation_id", "designations")
            .refers_to("to_designation_id", "designations")
            .refers_to("from_branch_id", "branches")
            .refers_to("to_branch_id", "branches")
            .refers_to("from_manager_id", "employees")
            .refers_to("to_manager_id", "employees")
            .field(Field::text("remarks").null())
            .refers_to("approval_request_id", "approval_requests")
            .index(&["employee_id", "effective_date"]),
        TableDef::entity("probation_reviews")
            .belongs_to("employee_id", "employees", Cascade)
            .refers_to("reviewer_id", "employees")
            .field(Field::date("review_date"))
            .field(Field::status("outcome", "Pending"))
            .field(Field::date("extended_until").null())
            .field(Field::text("comments").null()),
        TableDef::entity("employee_exits")
            .belongs_to("employee_id", "employees", Restrict)
            .field(Field::string("exit_type", 32))
            .field(Field::date("resignation_date").null())
            .field(Field::date("last_working_date"))
            .field(Field::text("reason").null())
            .field(Field::status("status", "Initiated"))
            .field(Field::boolean("is_eligible_for_rehire").default_bool(true))
            .refers_to("approval_request_id", "approval_requests"),
        TableDef::entity("exit_interviews")
            .belongs_to("employee_exit_id", "employee_exits", Cascade)
            .refers_to("interviewer_id", "employees")
            .field(Field::date("conducted_on").null())
            .field(Field::small_integer("overall_rating").null())
            .field(Field::text("feedback").null())
            .field(Field::boolean("would_recommend").null())
            .unique(&["employee_exit_id"]),
    ]
}
