use crate::fmt::amount_cell;
use crate::models::{Classification, PaymentRequest};

/// Persisted column order of the shared ledger. Header names and order
/// must exactly match the sheet's existing columns; a mismatch misaligns
/// data silently. Several columns belong to downstream tooling (payment
/// runs, claim tracking) and are written empty here.
pub const COLUMNS: [&str; 21] = [
    "Date Paid",
    "Date Invoiced",
    "Unique ID",
    "Claim Number",
    "Worker Name",
    "Hours",
    "Item Name",
    "Property",
    "QB Property",
    "Amount",
    "Payable Party",
    "Project Description",
    "Invoice Number",
    "Cost Code",
    "Payment Method",
    "Status",
    "Form",
    "Drive Link",
    "Equation Description",
    "Tracking Number",
    "Job Completion",
];

/// Form column tag so consumers of the shared ledger can filter rows
/// that came from this form.
pub const FORM_TAG: &str = "SUBCONTRACTOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    cells: Vec<String>,
}

impl LedgerRow {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Deterministic mapping from a request and its derived fields to one
/// ledger row. Columns not derivable from the submission stay empty,
/// never omitted, so the column count is stable across submissions.
pub fn build(
    request: &PaymentRequest,
    cost_code: &Classification,
    invoice_link: Option<&str>,
    completion_links: &[String],
) -> LedgerRow {
    let cells = vec![
        String::new(),                                         // Date Paid
        request.date_invoiced.format("%Y-%m-%d").to_string(),  // Date Invoiced
        String::new(),                                         // Unique ID
        String::new(),                                         // Claim Number
        String::new(),                                         // Worker Name
        String::new(),                                         // Hours
        String::new(),                                         // Item Name
        request.property.clone(),                              // Property
        String::new(),                                         // QB Property
        amount_cell(request.amount),                           // Amount
        request.payable_party.clone(),                         // Payable Party
        request.description.clone(),                           // Project Description
        String::new(),                                         // Invoice Number
        cost_code.as_cell().to_string(),                       // Cost Code
        String::new(),                                         // Payment Method
        String::new(),                                         // Status
        FORM_TAG.to_string(),                                  // Form
        invoice_link.unwrap_or_default().to_string(),          // Drive Link
        String::new(),                                         // Equation Description
        String::new(),                                         // Tracking Number
        completion_links.join(", "),                           // Job Completion
    ];
    LedgerRow { cells }
}
