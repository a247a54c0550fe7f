use super::{active, lookup};
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        lookup("salary_components")
            .field(Field::string("component_type", 16))
            .field(Field::string("calculation_type", 32).default_str("Fixed"))
            .field(Field::text("formula").null())
            .field(Field::boolean("is_taxable").default_bool(true))
            .field(Field::flag("is_statutory"))
            .field(Field::boolean("is_recurring").default_bool(true))
            .field(Field::integer("display_order").default_int(0)),
        lookup("salary_structures")
            .refers_to_with("currency_id", "currencies", Restrict)
            .field(Field::date("effective_from")),
        TableDef::record("salary_structure_components")
            .belongs_to("salary_structure_id", "salary_structures", Cascade)
            .belongs_to("salary_component_id", "salary_components", Restrict)
            .field(Field::money("amount").null())
            .field(Field::decimal("percentage", 7, 4).null())
            .refers_to("based_on_component_id", "salary_components")
            .field(Field::integer("sequence").default_int(0))
            .unique(&["salary_structure_id", "salary_component_id"]),
        TableDef::entity("employee_salaries")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("salary_structure_id", "salary_structures", Restrict)
            .field(Field::money("annual_ctc"))
            .field(Field::money("monthly_gross"))
            .field(Field::date("effective_from"))
            .field(Field::date("effective_to").null())
            .field(Field::string("revision_reason", 256).null())
            .refers_to("approval_request_id", "approval_requests")
            .index(&["employee_id", "effective_from"]),
        TableDef::record("employee_salary_components")
            .belongs_to("employee_salary_id", "employee_salaries", Cascade)
            .belongs_to("salary_component_id", "salary_components", Restrict)
            .field(Field::money("monthly_amount"))
            .field(Field::money("annual_amount"))
            .unique(&["employee_salary_id", "salary_component_id"]),
        TableDef::entity("payroll_periods")
            .field(Field::string("name", 50))
            .refers_to("fiscal_year_id", "fiscal_years")
            .field(Field::date("start_date"))
            .field(Field::date("end_date"))
            .field(Field::date("pay_date"))
            .field(Field::status("status", "Open"))
            .unique(&["organization_id", "start_date", "end_date"]),
        TableDef::entity("payroll_runs")
            .belongs_to("payroll_period_id", "payroll_periods", Restrict)
            .field(Field::string("run_number", 32))
            .field(Field::string("run_type", 32).default_str("Regular"))
            .refers_to("branch_id", "branches")
            .field(Field::status("status", "Draft"))
            .field(Field::integer("employee_count").default_int(0))
            .field(Field::money("total_gross").default_int(0))
            .field(Field::money("total_deductions").default_int(0))
            .field(Field::money("total_net").default_int(0))
            .field(Field::timestamp("processed_at").null())
            .field(Field::timestamp("locked_at").null())
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "run_number"]),
        TableDef::entity("payslips")
            .belongs_to("payroll_run_id", "payroll_runs", Restrict)
            .belongs_to("employee_id", "employees", Restrict)
            .field(Field::string("payslip_number", 32))
            .field(Field::quantity("working_days"))
            .field(Field::quantity("paid_days"))
            .field(Field::quantity("loss_of_pay_days").default_int(0))
            .field(Field::money("gross_earnings"))
            .field(Field::money("total_deductions"))
            .field(Field::money("net_pay"))
            .refers_to_with("currency_id", "currencies", Restrict)
            .field(Field::status("status", "Generated"))
            .field(Field::timestamp("published_at").null())
            .refers_to("document_id", "documents")
            .unique(&["payroll_run_id", "employee_id"])
            .unique(&["organization_id", "payslip_number"]),
        TableDef::record("payslip_lines")
            .belongs_to("payslip_id", "payslips", Cascade)
            .belongs_to("salary_component_id", "salary_components", Restrict)
            .field(Field::string("line_type", 16))
            .field(Field::string("description", 256).null())
            .field(Field::money("amount"))
            .field(Field::flag("is_arrear"))
            .field(Field::integer("sequence").default_int(0)),
        lookup("tax_regimes")
            .field(Field::string("country_code", 2))
            .refers_to("fiscal_year_id", "fiscal_years")
            .field(Field::money("standard_deduction").default_int(0))
            .field(Field::flag("is_default")),
        TableDef::record("tax_slabs")
            .belongs_to("tax_regime_id", "tax_regimes", Cascade)
            .field(Field::money("lower_bound"))
            .field(Field::money("upper_bound").null())
            .field(Field::decimal("rate", 7, 4))
            .field(Field::decimal("surcharge_rate", 7, 4).null())
            .field(Field::decimal("cess_rate", 7, 4).null())
            .field(Field::small_integer("sequence"))
            .unique(&["tax_regime_id", "sequence"]),
        TableDef::entity("employee_tax_declarations")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("fiscal_year_id", "fiscal_years", Restrict)
            .belongs_to("tax_regime_id", "tax_regimes", Restrict)
            .field(Field::status("status", "Draft"))
            .field(Field::timestamp("submitted_at").null())
            .field(Field::timestamp("verified_at").null())
            .field(Field::money("total_declared").default_int(0))
            .field(Field::money("total_approved").default_int(0))
            .unique(&["employee_id", "fiscal_year_id"]),
        TableDef::entity("tax_declaration_items")
            .belongs_to("employee_tax_declaration_id", "employee_tax_declarations", Cascade)
            .field(Field::string("section", 32))
            .field(Field::string("description", 256))
            .field(Field::money("declared_amount"))
            .field(Field::money("approved_amount").null())
            .refers_to("proof_document_id", "documents")
            .field(Field::status("status", "Pending")),
        TableDef::record("statutory_contributions")
            .belongs_to("payslip_id", "payslips", Cascade)
            .belongs_to("employee_id", "employees", Restrict)
            .field(Field::string("scheme", 32))
            .field(Field::money("wage_base"))
            .field(Field::money("employee_share"))
            .field(Field::money("employer_share"))
            .field(Field::string("reference_number", 64).null())
            .unique(&["payslip_id", "scheme"]),
        TableDef::entity("bonuses")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::string("bonus_type", 32))
            .field(Field::money("amount"))
            .field(Field::string("reason", 512).null())
            .field(Field::date("payout_date").null())
            .field(Field::status("status", "Pending"))
            .refers_to("payroll_run_id", "payroll_runs")
            .refers_to("approval_request_id", "approval_requests"),
        TableDef::entity("arrears")
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("salary_component_id", "salary_components", Restrict)
            .field(Field::date("from_date"))
            .field(Field::date("to_date"))
            .field(Field::money("amount"))
            .field(Field::status("status", "Pending"))
            .refers_to("payroll_run_id", "payroll_runs"),
        TableDef::entity("employee_loans")
            .belongs_to("employee_id", "employees", Restrict)
            .field(Field::string("loan_number", 32))
            .field(Field::string("loan_type", 32))
            .field(Field::money("principal"))
            .field(Field::decimal("interest_rate", 7, 4).default_int(0))
            .field(Field::money("installment_amount"))
            .field(Field::integer("installment_count"))
            .field(Field::date("disbursed_on").null())
            .field(Field::money("outstanding_amount"))
            .field(Field::status("status", "Requested"))
            .refers_to("approval_request_id", "approval_requests")
            .unique(&["organization_id", "loan_number"]),
        TableDef::record("loan_repayments")
            .belongs_to("employee_loan_id", "employee_loans", Cascade)
            .refers_to("payslip_id", "payslips")
            .field(Field::date("due_date"))
            .field(Field::money("amount"))
            .field(Field::money("principal_component"))
            .field(Field::money("interest_component"))
            .field(Field::date("paid_on").null())
            .field(Field::status("status", "Due"))
            .index(&["employee_loan_id", "due_date"]),
        TableDef::entity("salary_advances")
            .belongs_to("employee_id", "employees", Cascade)
            .field(Field::money("amount"))
            .field(Field::date("requested_on"))
            .field(Field::string("reason", 512).null())
            .field(Field::small_integer("recovery_months").default_int(1))
            .field(Field::status("status", "Requested"))
            .refers_to("payroll_run_id", "payroll_runs")
            .refers_to("approval_request_id", "approval_requests"),
        TableDef::entity("final_settlements")
            .belongs_to("employee_exit_id", "employee_exits", Restrict)
            .belongs_to("employee_id", "employees", Restrict)
            .field(Field::date("settlement_date").null())
            .field(Field::money("gross_payable").default_int(0))
            .field(Field::money("leave_encashment_amount").default_int(0))
            .field(Field::money("gratuity_amount").default_int(0))
            .field(Field::money("total_recoveries").default_int(0))
            .field(Field::money("net_payable").default_int(0))
            .field(Field::status("status", "Draft"))
            .refers_to("document_id", "documents")
            .unique(&["employee_exit_id"]),
        TableDef::entity("bank_transfer_batches")
            .belongs_to("payroll_run_id", "payroll_runs", Restrict)
            .field(Field::string("batch_number", 32))
            .field(Field::string("bank_name", 200))
            .field(Field::string("file_format", 32).null())
            .field(Field::money("total_amount"))
            .field(Field::integer("record_count"))
            .field(Field::status("status", "Generated"))
            .field(Field::timestamp("exported_at").null())
            .refers_to("file_document_id", "documents")
            .unique(&["organization_id", "batch_number"]),
        TableDef::record("bank_transfer_lines")
            .belongs_to("bank_transfer_batch_id", "bank_transfer_batches", Cascade)
            .belongs_to("payslip_id", "payslips", Restrict)
            .belongs_to("employee_bank_account_id", "employee_bank_accounts", Restrict)
            .field(Field::money("amount"))
            .field(Field::status("status", "Pending"))
            .field(Field::string("bank_reference", 64).null())
            .field(Field::string("failure_reason", 512).null())
            .unique(&["bank_transfer_batch_id", "payslip_id"]),
        TableDef::entity("payroll_adjustments")
            .belongs_to("payroll_run_id", "payroll_runs", Cascade)
            .belongs_to("employee_id", "employees", Cascade)
            .belongs_to("salary_component_id", "salary_components", Restrict)
            .field(Field::money("amount"))
            .field(Field::string("reason", 512).null())
            .field(active()),
    ]
}
