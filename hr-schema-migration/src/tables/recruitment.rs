use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("job_requisitions")
            .field(Field::string("requisition_number", 32))
            .field(Field::string("title", 200))
            .refers_to("department_id", "departments")
            .refers_to("designation_id", "designations")
            .refers_to("branch_id", "branches")
            .belongs_to("requested_by_id", "employees", Restrict)
            .field(Field::integer("headcount").default_int(1))
            .field(Field::string("employment_type", 32).default_str("FullTime"))
            .field(Field::money("min_salary").null())
            .field(Field::money("max_salary").null())
            .field(Field::text("justification").null())
            .field(Field::date("needed_by").null())
            .field(Field::status("status", "Draft"))
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "requisition_number"]),
        TableDef::entity("job_postings")
            .refers_to("requisition_id", "job_requisitions")
            .field(Field::string("title", 200))
            .field(Field::string("slug", 200))
            .field(Field::text("description"))
            .field(Field::string("location", 200).null())
            .field(Field::flag("is_remote"))
            .field(Field::flag("is_internal"))
            .field(Field::string("employment_type", 32).default_str("FullTime"))
            .field(Field::small_integer("experience_min").null())
            .field(Field::small_integer("experience_max").null())
            .field(Field::timestamp("posted_at").null())
            .field(Field::timestamp("closes_at").null())
            .field(Field::status("status", "Draft"))
            .unique(&["organization_id", "slug"]),
        TableDef::entity("candidates")
            .field(Field::string("first_name", 100))
            .field(Field::string("last_name", 100))
            .field(Field::string("email", 256))
            .field(Field::string("phone", 32).null())
            .field(Field::string("resume_url", 1024).null())
            .field(Field::string("linkedin_url", 512).null())
            .field(Field::string("source", 64).null())
            .field(Field::string("current_employer", 200).null())
            .field(Field::money("current_ctc").null())
            .field(Field::money("expected_ctc").null())
            .field(Field::integer("notice_period_days").null())
            .field(Field::json("tags").null())
            .unique(&["organization_id", "email"]),
        TableDef::entity("job_applications")
            .belongs_to("job_posting_id", "job_postings", Restrict)
            .belongs_to("candidate_id", "candidates", Cascade)
            .field(Field::status("stage", "Applied"))
            .field(Field::timestamp("applied_at").default_now())
            .field(Field::text("cover_letter").null())
            .field(Field::small_integer("rating").null())
            .field(Field::string("rejection_reason", 512).null())
            .refers_to("referred_by_employee_id", "employees")
            .unique(&["job_posting_id", "candidate_id"]),
        TableDef::entity("interview_rounds")
            .belongs_to("job_posting_id", "job_postings", Cascade)
            .field(Field::string("name", 100))
            .field(Field::small_integer("sequence"))
            .field(Field::string("round_type", 32))
            .field(Field::integer("duration_minutes").default_int(60))
            .unique(&["job_posting_id", "sequence"]),
        TableDef::entity("interviews")
            .belongs_to("job_application_id", "job_applications", Cascade)
            .refers_to("interview_round_id", "interview_rounds")
            .field(Field::timestamp("scheduled_at"))
            .field(Field::integer("duration_minutes").default_int(60))
            .field(Field::string("mode", 32).default_str("InPerson"))
            .field(Field::string("location_or_link", 1024).null())
            .field(Field::status("status", "Scheduled"))
            .index(&["scheduled_at"]),
        TableDef::record("interview_panelists")
            .belongs_to("interview_id", "interviews", Cascade)
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::flag("is_lead"))
            .unique(&["interview_id", "employee_id"]),
        TableDef::entity("interview_feedback")
            .belongs_to("interview_id", "interviews", Cascade)
            .belongs_to("interviewer_id", "employees", Restrict)
            .field(Field::small_integer("rating"))
            .field(Field::string("recommendation", 32))
            .field(Field::text("strengths").null())
            .field(Field::text("concerns").null())
            .field(Field::timestamp("submitted_at").null())
            .unique(&["interview_id", "interviewer_id"]),
        TableDef::entity("job_offers")
            .belongs_to("job_application_id", "job_applications", Restrict)
            .field(Field::string("offer_number", 32))
            .refers_to("designation_id", "designations")
            .refers_to("department_id", "departments")
            .field(Field::money("offered_salary"))
            .refers_to_with("currency_id", "currencies", Restrict)
            .field(Field::date("joining_date").null())
            .field(Field::date("expires_on").null())
            .field(Field::status("status", "Draft"))
            .field(Field::timestamp("sent_at").null())
            .field(Field::timestamp("responded_at").null())
            .refers_to("offer_letter_document_id", "documents")
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "offer_number"]),
        TableDef::entity("onboarding_checklists")
            .field(Field::string("name", 200))
            .field(Field::text("description").null())
            .refers_to("department_id", "departments")
            .field(Field::flag("is_default")),
        TableDef::entity("onboarding_tasks")
            .belongs_to("onboarding_checklist_id", "onboarding_checklists", Cascade)
            .field(Field::string("title", 200))
            .field(Field::text("description").null())
            .field(Field::small_integer("sequence"))
            .field(Field::integer("due_offset_days").default_int(0))
            .field(Field::string("assignee_role", 32).null())
            .field(Field::boolean("is_mandatory").default_bool(true)),
        TableDef::entity("employee_onboarding_tasks")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("onboarding_task_id", "onboarding_tasks", Restrict)
            .refers_to("assignee_employee_id", "employees")
            .field(Field::date("due_date").null())
            .field(Field::timestamp("completed_at").null())
            .field(Field::status("status", "Pending"))
            .field(Field::text("notes").null())
            .unique(&["employee_id", "onboarding_task_id"]),
    ]
}
