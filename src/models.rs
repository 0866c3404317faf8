use chrono::NaiveDate;

/// A file attached to a submission, already read into memory.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// One validated payment request. Immutable after validation passes;
/// never persisted directly — only the derived ledger row is written.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub date_invoiced: NaiveDate,
    pub property: String,
    pub amount: f64,
    pub payable_party: String,
    pub description: String,
    pub invoice: Option<Attachment>,
    pub job_completion: Vec<Attachment>,
}

impl PaymentRequest {
    pub fn has_attachments(&self) -> bool {
        self.invoice.is_some() || !self.job_completion.is_empty()
    }
}

/// Outcome of cost-code classification. Classification is best-effort:
/// there is no error case, only the `Uncategorized` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Code(String),
    Uncategorized,
}

impl Classification {
    /// The string that lands in the ledger's Cost Code column.
    pub fn as_cell(&self) -> &str {
        match self {
            Self::Code(s) => s,
            Self::Uncategorized => "Uncategorized",
        }
    }
}
