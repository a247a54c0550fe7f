use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("training_categories"),
        TableDef::entity("training_courses")
            .field(Field::string("code", 32))
            .field(Field::string("title", 256))
            .refers_to("training_category_id", "training_categories")
            .field(Field::text("description").null())
            .field(Field::string("delivery_mode", 32).default_str("Classroom"))
            .field(Field::quantity("duration_hours").null())
            .field(Field::string("provider_name", 200).null())
            .field(Field::money("cost_per_participant").null())
            .field(Field::flag("is_mandatory"))
            .unique(&["organization_id", "code"]),
        TableDef::entity("training_sessions")
            .belongs_to("training_course_id", "training_courses", Cascade)
            .refers_to("trainer_employee_id", "employees")
            .field(Field::string("trainer_name", 200).null())
            .field(Field::timestamp("starts_at"))
            .field(Field::timestamp("ends_at"))
            .field(Field::string("venue", 256).null())
            .field(Field::string("meeting_link", 1024).null())
            .field(Field::integer("capacity").null())
            .field(Field::status("status", "Scheduled"))
            .index(&["training_course_id", "starts_at"]),
        TableDef::entity("training_enrollments")
            .belongs_to("training_session_id", "training_sessions", Cascade)
            .belongs_to("employee_id", "employees", Cascade)
            .refers_to("nominated_by_id", "employees")
            .field(Field::timestamp("enrolled_at").default_now())
            .field(Field::status("status", "Enrolled"))
            .field(Field::timestamp("completed_at").null())
            .field(Field::decimal("score", 5, 2).null())
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["training_session_id", "employee_id"]),
        TableDef::record("training_attendance")
            .belongs_to("training_enrollment_id", "training_enrollments", Cascade)
            .field(Field::date("session_date"))
            .field(Field::boolean("is_present").default_bool(false))
            .field(Field::quantity("hours_attended").null())
            .unique(&["training_enrollment_id", "session_date"]),
        TableDef::record("training_feedback")
            .belongs_to("training_enrollment_id", "training_enrollments", Cascade)
            .field(Field::small_integer("content_rating").null())
            .field(Field::small_integer("trainer_rating").null())
            .field(Field::small_integer("overall_rating").null())
            .field(Field::text("comments").null())
            .unique(&["training_enrollment_id"]),
        TableDef::entity("certifications")
            .field(Field::string("name", 200))
            .field(Field::string("issuing_body", 200).null())
            .refers_to("training_course_id", "training_courses")
            .field(Field::small_integer("validity_months").null())
            .unique(&["organization_id", "name"]),
        TableDef::entity("employee_certifications")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("certification_id", "certifications", Restrict)
            .field(Field::string("certificate_number", 64).null())
            .field(Field::date("issued_on"))
            .field(Field::date("expires_on").null())
            .refers_to("document_id", "documents")
            .field(Field::timestamp("verified_at").null())
            .index(&["organization_id", "expires_on"]),
    ]
}
