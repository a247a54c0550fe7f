use super::lookup;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("expense_categories")
            .refers_to("parent_category_id", "expense_categories")
            .field(Field::string("gl_account_code", 32).null())
            .field(Field::flag("requires_receipt"))
            .field(Field::boolean("is_taxable").default_bool(false)),
        TableDef::entity("expense_policies")
            .belongs_to("expense_category_id", "expense_categories", Cascade)
            .refers_to("job_grade_id", "job_grades")
            .field(Field::string("name", 200))
            .field(Field::money("per_claim_limit").null())
            .field(Field::money("monthly_limit").null())
            .field(Field::money("receipt_threshold").null())
            .field(Field::date("effective_from"))
            .field(Field::date("effective_to").null()),
        TableDef::entity("travel_requests")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("request_number", 32))
            .field(Field::string("purpose", 512))
            .field(Field::date("departure_date"))
            .field(Field::date("return_date"))
            .field(Field::money("estimated_cost").null())
            .field(Field::money("advance_amount").null())
            .refers_to("project_id", "projects")
            .field(Field::status("status", "Draft"))
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "request_number"]),
        TableDef::record("travel_itineraries")
            .belongs_to("travel_request_id", "travel_requests", Cascade)
            .field(Field::string("from_location", 200))
            .field(Field::string("to_location", 200))
            .field(Field::timestamp("depart_at"))
            .field(Field::timestamp("arrive_at").null())
            .field(Field::string("travel_mode", 32))
            .field(Field::string("booking_reference", 64).null())
            .field(Field::money("cost").null()),
        TableDef::entity("expense_claims")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("claim_number", 32))
            .field(Field::string("title", 200))
            .refers_to("travel_request_id", "travel_requests")
            .refers_to("project_id", "projects")
            .refers_to_with("currency_id", "currencies", Restrict)
            .field(Field::money("total_amount").default_int(0))
            .field(Field::money("approved_amount").null())
            .field(Field::status("status", "Draft"))
            .field(Field::timestamp("submitted_at").null())
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "claim_number"])
            .index(&["organization_id", "status"]),
        TableDef::entity("expense_claim_items")
            .belongs_to("expense_claim_id", "expense_claims", Cascade)
            .belongs_to("expense_category_id", "expense_categories", Restrict)
            .field(Field::date("expense_date"))
            .field(Field::string("description", 512).null())
            .field(Field::string("merchant", 200).null())
            .field(Field::money("amount"))
            .field(Field::money("tax_amount").default_int(0))
            .refers_to_with("currency_id", "currencies", Restrict)
            .field(Field::decimal("exchange_rate", 18, 8).default_int(1))
            .field(Field::flag("is_billable")),
        TableDef::record("expense_receipts")
            .belongs_to("expense_claim_item_id", "expense_claim_items", Cascade)
            .belongs_to("document_id", "documents", Restrict)
            .field(Field::json("ocr_data").null())
            .unique(&["expense_claim_item_id", "document_id"]),
        TableDef::entity("mileage_logs")
            .belongs_to("employee_id", "employees", Cascade)
            .refers_to("expense_claim_id", "expense_claims")
            .field(Field::date("travel_date"))
            .field(Field::string("from_location", 200))
            .field(Field::string("to_location", 200))
            .field(Field::quantity("distance"))
            .field(Field::string("distance_unit", 8).default_str("km"))
            .field(Field::decimal("rate", 9, 4))
            .field(Field::money("amount"))
            .field(Field::string("vehicle_type", 32).null()),
        TableDef::record("expense_reimbursements")
            .belongs_to("expense_claim_id", "expense_claims", Restrict)
            .field(Field::money("amount"))
            .field(Field::date("paid_on"))
            .field(Field::string("payment_method", 32))
            .field(Field::string("payment_reference", 64).null())
            .refers_to("payroll_run_id", "payroll_runs")
            .field(Field::status("status", "Paid")),
    ]
}
