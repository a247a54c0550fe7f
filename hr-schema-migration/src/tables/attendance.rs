use super::{active, lookup};
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("shifts")
            .field(Field::time("start_time"))
            .field(Field::time("end_time"))
            .field(Field::integer("break_minutes").default_int(0))
            .field(Field::integer("grace_minutes").default_int(0))
            .field(Field::flag("is_night_shift"))
            .field(Field::quantity("working_hours")),
        TableDef::entity("shift_assignments")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("shift_id", "shifts", Restrict)
            .field(Field::date("effective_from"))
            .field(Field::date("effective_to").null())
            .index(&["employee_id", "effective_from"]),
        TableDef::entity("biometric_devices")
            .field(Field::string("serial_number", 64))
            .field(Field::string("name", 100))
            .refers_to("branch_id", "branches")
            .field(Field::string("ip_address", 64).null())
            .field(Field::timestamp("last_synced_at").null())
            .field(active())
            .unique(&["organization_id", "serial_number"]),
        TableDef::record("attendance_records")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::date("attendance_date"))
            .refers_to("shift_id", "shifts")
            .field(Field::timestamp("check_in_at").null())
            .field(Field::timestamp("check_out_at").null())
            .field(Field::quantity("worked_hours").null())
            .field(Field::quantity("overtime_hours").null())
            .field(Field::integer("late_minutes").default_int(0))
            .field(Field::integer("early_exit_minutes").default_int(0))
            .field(Field::status("status", "Present"))
            .field(Field::string("source", 32).default_str("Manual"))
            .field(Field::string("remarks", 512).null())
            .unique(&["employee_id", "attendance_date"])
            .index(&["organization_id", "attendance_date"]),
        TableDef::record("attendance_punches")
            .belongs_to("employee_id", "employees", Cascade)
            .refers_to("attendance_record_id", "attendance_records")
            .refers_to("biometric_device_id", "biometric_devices")
            .field(Field::timestamp("punched_at"))
            .field(Field::string("direction", 8))
            .field(Field::string("source", 32).default_str("Device"))
            .field(Field::decimal("latitude", 9, 6).null())
            .field(Field::decimal("longitude", 9, 6).null())
            .index(&["employee_id", "punched_at"]),
        TableDef::entity("attendance_regularizations")
            .belongs_to("attendance_record_id", "attendance_records", Cascade)
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::timestamp("requested_check_in_at").null())
            .field(Field::timestamp("requested_check_out_at").null())
            .field(Field::text("reason"))
            .field(Field::status("status", "Pending"))
            .refers_to("approval_request_id", "approval_requests"),
        TableDef::entity("overtime_requests")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::date("work_date"))
            .field(Field::quantity("hours"))
            .field(Field::quantity("approved_hours").null())
            .field(Field::text("reason").null())
            .field(Field::status("status", "Pending"))
            .refers_to("approval_request_id", "approval_requests")
            .refers_to("payroll_run_id", "payroll_runs")
            .index(&["employee_id", "work_date"]),
        lookup("projects")
            .refers_to("project_manager_id", "employees")
            .field(Field::date("start_date").null())
            .field(Field::date("end_date").null())
            .field(Field::flag("is_billable"))
            .field(Field::status("status", "Active")),
        TableDef::entity("timesheets")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::date("period_start"))
            .field(Field::date("period_end"))
            .field(Field::quantity("total_hours").default_int(0))
            .field(Field::status("status", "Draft"))
            .field(Field::timestamp("submitted_at").null())
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["employee_id", "period_start"]),
        TableDef::record("timesheet_entries")
            .belongs_to("timesheet_id", "timesheets", Cascade)
            .refers_to("project_id", "projects")
            .field(Field::date("work_date"))
            .field(Field::quantity("hours"))
            .field(Field::string("task_description", 512).null())
            .field(Field::flag("is_billable")),
    ]
}
