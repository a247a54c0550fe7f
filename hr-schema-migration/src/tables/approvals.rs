use super::active;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("approval_workflows")
            .field(Field::string("name", 200))
            .field(Field::string("entity_type", 64))
            .field(Field::json("conditions").null())
            .field(Field::integer("priority").default_int(0))
            .field(active())
            .index(&["organization_id", "entity_type"]),
        TableDef::entity("approval_workflow_steps")
            .belongs_to("approval_workflow_id", "approval_workflows", Cascade)
            .field(Field::small_integer("sequence"))
            .field(Field::string("name", 200))
            .field(Field::string("approver_type", 32))
            .refers_to("approver_role_id", "roles")
            .refers_to("approver_employee_id", "employees")
            .field(Field::string("approval_mode", 16).default_str("Any"))
            .field(Field::integer("escalation_hours").null())
            .field(Field::flag("allow_skip"))
            .unique(&["approval_workflow_id", "sequence"]),
        TableDef::record("approval_requests")
            .belongs_to("approval_workflow_id", "approval_workflows", Restrict)
            .field(Field::string("entity_type", 64))
            .field(Field::uuid("entity_id"))
            .belongs_to("requested_by_id", "employees", Restrict)
            .refers_to("current_step_id", "approval_workflow_steps")
            .field(Field::status("status", "Pending"))
            .field(Field::timestamp("submitted_at").default_now())
            .field(Field::timestamp("completed_at").null())
            .index(&["entity_type", "entity_id"])
            .index(&["organization_id", "status"]),
        TableDef::record("approval_actions")
            .belongs_to("approval_request_id", "approval_requests", Cascade)
            .belongs_to("approval_workflow_step_id", "approval_workflow_steps", Restrict)
            .belongs_to("actor_id", "employees", Restrict)
            .refers_to("on_behalf_of_id", "employees")
            .field(Field::string("action", 32))
            .field(Field::text("comments").null())
            .field(Field::timestamp("acted_at").default_now()),
        TableDef::entity("approval_delegations")
            .belongs_to("delegator_id", "employees", Cascade)
            .belongs_to("delegate_id", "employees", Cascade)
            .field(Field::string("entity_type", 64).null())
            .field(Field::date("starts_on"))
            .field(Field::date("ends_on"))
            .field(Field::string("reason", 512).null())
            .field(active()),
    ]
}
