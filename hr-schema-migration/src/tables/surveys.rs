use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("surveys")
            .field(Field::string("title", 256))
            .field(Field::text("description").null())
            .field(Field::string("survey_type", 32).default_str("Engagement"))
            .field(Field::flag("is_anonymous"))
            .field(Field::timestamp("opens_at").null())
            .field(Field::timestamp("closes_at").null())
            .field(Field::status("status", "Draft")),
        TableDef::entity("survey_sections")
            .belongs_to("survey_id", "surveys", Cascade)
            .field(Field::string("title", 256))
            .field(Field::text("description").null())
            .field(Field::small_integer("sequence"))
            .unique(&["survey_id", "sequence"]),
        TableDef::entity("survey_questions")
            .belongs_to("survey_id", "surveys", Cascade)
            .refers_to("survey_section_id", "survey_sections")
            .field(Field::text("question_text"))
            .field(Field::string("question_type", 32))
            .field(Field::boolean("is_required").default_bool(true))
            .field(Field::small_integer("sequence"))
            .field(Field::small_integer("scale_min").null())
            .field(Field::small_integer("scale_max").null()),
        TableDef::record("survey_question_options")
            .belongs_to("survey_question_id", "survey_questions", Cascade)
            .field(Field::string("label", 256))
            .field(Field::string("value", 64).null())
            .field(Field::small_integer("sequence"))
            .unique(&["survey_question_id", "sequence"]),
        TableDef::record("survey_audiences")
            .belongs_to("survey_id", "surveys", Cascade)
            .refers_to_with("department_id", "departments", Cascade)
            .refers_to_with("branch_id", "branches", Cascade)
            .refers_to_with("employee_id", "employees", Cascade),
        TableDef::record("survey_responses")
            .belongs_to("survey_id", "surveys", Restrict)
            .refers_to("employee_id", "employees")
            .field(Field::timestamp("started_at").default_now())
            .field(Field::timestamp("submitted_at").null())
            .field(Field::string("respondent_hash", 64).null())
            .unique(&["survey_id", "respondent_hash"]),
        TableDef::record("survey_answers")
            .belongs_to("survey_response_id", "survey_responses", Cascade)
            .belongs_to("survey_question_id", "survey_questions", Restrict)
            .refers_to("survey_question_option_id", "survey_question_options")
            .field(Field::text("answer_text").null())
            .field(Field::small_integer("answer_score").null())
            .unique(&["survey_response_id", "survey_question_id"]),
    ]
}
