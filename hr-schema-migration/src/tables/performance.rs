use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("review_cycles")
            .field(Field::string("name", 200))
            .refers_to("fiscal_year_id", "fiscal_years")
            .field(Field::date("start_date"))
            .field(Field::date("end_date"))
            .field(Field::date("self_review_due").null())
            .field(Field::date("manager_review_due").null())
            .field(Field::small_integer("rating_scale").default_int(5))
            .field(Field::status("status", "Draft"))
            .unique(&["organization_id", "name"]),
        lookup("competencies").field(Field::string("category", 64).null()),
        TableDef::record("competency_levels")
            .belongs_to("competency_id", "competencies", Cascade)
            .field(Field::small_integer("level"))
            .field(Field::string("title", 100))
            .field(Field::text("behaviour_indicators").null())
            .unique(&["competency_id", "level"]),
        TableDef::entity("goals")
            .belongs_to("employee_id", "employees", Cascade)
            .refers_to("review_cycle_id", "review_cycles")
            .refers_to("parent_goal_id", "goals")
            .field(Field::string("title", 256))
            .field(Field::text("description").null())
            .field(Field::decimal("weightage", 5, 2).default_int(0))
            .field(Field::date("start_date").null())
            .field(Field::date("due_date").null())
            .field(Field::decimal("progress", 5, 2).default_int(0))
            .field(Field::status("status", "NotStarted"))
            .field(Field::string("visibility", 16).default_str("Team")),
        TableDef::entity("goal_key_results")
            .belongs_to("goal_id", "goals", Cascade)
            .field(Field::string("title", 256))
            .field(Field::string("metric_unit", 32).null())
            .field(Field::decimal("start_value", 18, 4).default_int(0))
            .field(Field::decimal("target_value", 18, 4))
            .field(Field::decimal("current_value", 18, 4).default_int(0))
            .field(Field::decimal("weightage", 5, 2).default_int(0)),
        TableDef::record("goal_check_ins")
            .belongs_to("goal_id", "goals", Cascade)
            .refers_to("goal_key_result_id", "goal_key_results")
            .field(Field::decimal("value", 18, 4).null())
            .field(Field::decimal("progress", 5, 2))
            .field(Field::string("confidence", 16).null())
            .field(Field::text("comment").null())
            .field(Field::timestamp("checked_in_at").default_now()),
        TableDef::entity("performance_reviews")
            .belongs_to("review_cycle_id", "review_cycles", Restrict)
            .belongs_to("employee_id", "employees", Cascade)
            .refers_to("reviewer_id", "employees")
            .field(Field::decimal("self_rating", 4, 2).null())
            .field(Field::decimal("manager_rating", 4, 2).null())
            .field(Field::decimal("final_rating", 4, 2).null())
            .field(Field::text("self_comments").null())
            .field(Field::text("manager_comments").null())
            .field(Field::status("status", "Pending"))
            .field(Field::timestamp("submitted_at").null())
            .field(Field::timestamp("finalized_at").null())
            .unique(&["review_cycle_id", "employee_id"]),
        TableDef::record("review_competency_ratings")
            .belongs_to("performance_review_id", "performance_reviews", Cascade)
            .belongs_to("competency_id", "competencies", Restrict)
            .field(Field::small_integer("self_rating").null())
            .field(Field::small_integer("manager_rating").null())
            .field(Field::text("comments").null())
            .unique(&["performance_review_id", "competency_id"]),
        TableDef::record("review_goal_ratings")
            .belongs_to("performance_review_id", "performance_reviews", Cascade)
            .belongs_to("goal_id", "goals", Cascade)
            .field(Field::small_integer("self_rating").null())
            .field(Field::small_integer("manager_rating").null())
            .field(Field::text("comments").null())
            .unique(&["performance_review_id", "goal_id"]),
        TableDef::entity("feedback_requests")
            .belongs_to("subject_employee_id", "employees", Cascade)
            .belongs_to("requested_by_id", "employees", Restrict)
            .refers_to("review_cycle_id", "review_cycles")
            .field(Field::string("relationship", 32))
            .field(Field::text("message").null())
            .field(Field::date("due_date").null())
            .field(Field::flag("is_anonymous"))
            .field(Field::status("status", "Requested")),
        TableDef::record("feedback_responses")
            .belongs_to("feedback_request_id", "feedback_requests", Cascade)
            .belongs_to("responder_id", "employees", Cascade)
            .field(Field::small_integer("rating").null())
            .field(Field::text("strengths").null())
            .field(Field::text("improvements").null())
            .field(Field::timestamp("submitted_at").default_now())
            .unique(&["feedback_request_id", "responder_id"]),
        TableDef::entity("one_on_one_meetings")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("manager_id", "employees", Cascade)
            .field(Field::timestamp("scheduled_at"))
            .field(Field::integer("duration_minutes").default_int(30))
            .field(Field::text("agenda").null())
            .field(Field::text("notes").null())
            .field(Field::json("action_items").null())
            .field(Field::status("status", "Scheduled"))
            .index(&["manager_id", "scheduled_at"]),
        TableDef::entity("performance_improvement_plans")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("manager_id", "employees", Restrict)
            .refers_to("performance_review_id", "performance_reviews")
            .field(Field::date("start_date"))
            .field(Field::date("end_date"))
            .field(Field::text("reason"))
            .field(Field::text("expectations").null())
            .field(Field::status("status", "Active"))
            .field(Field::string("outcome", 32).null()),
        TableDef::entity("pip_milestones")
            .belongs_to(
                "performance_improvement_plan_id",
                "performance_improvement_plans",
                Cascade,
            )
            .field(Field::string("title", 256))
            .field(Field::date("due_date"))
            .field(Field::timestamp("completed_at").null())
            .field(Field::text("reviewer_comments").null())
            .field(Field::status("status", "Pending")),
    ]
}
