use crate::classifier;
use crate::drive::{DriveClient, FileStore};
use crate::error::{Result, SubpayError};
use crate::ledger::{self, WorksheetStore};
use crate::models::{Classification, PaymentRequest};
use crate::record;
use crate::settings::Settings;
use crate::sheets::SheetsClient;

/// Raw form fields as collected from the CLI, before validation.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub property: String,
    pub amount: f64,
    pub payable_party: String,
    pub payable_party_other: String,
    pub description: String,
}

/// A manually typed payee wins over the list selection when both are set.
pub fn resolve_payable_party(selected: &str, manual: &str) -> String {
    let manual = manual.trim();
    if manual.is_empty() {
        selected.trim().to_string()
    } else {
        manual.to_string()
    }
}

/// Check required fields, collecting every violation into one error
/// instead of failing on the first.
pub fn validate(input: &FormInput, properties: &[String]) -> Result<()> {
    let mut missing = Vec::new();
    let property = input.property.trim();
    if property.is_empty() || !properties.iter().any(|p| p == property) {
        missing.push("property".to_string());
    }
    if resolve_payable_party(&input.payable_party, &input.payable_party_other).is_empty() {
        missing.push("payable party".to_string());
    }
    if input.description.trim().is_empty() {
        missing.push("description".to_string());
    }
    if input.amount <= 0.0 {
        missing.push("amount".to_string());
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SubpayError::Validation(missing))
    }
}

pub struct SubmissionOutcome {
    pub cost_code: Classification,
    pub invoice_link: Option<String>,
    pub completion_links: Vec<String>,
}

/// Run one validated request through the full pipeline against the real
/// collaborators.
pub fn process(settings: &Settings, request: &PaymentRequest) -> Result<SubmissionOutcome> {
    let drive = DriveClient::new(settings)?;
    run_pipeline(
        request,
        &drive,
        |description| classifier::classify(settings, description),
        || SheetsClient::open(settings),
    )
}

/// The fixed pipeline: uploads, then classification, then row building,
/// then the ledger append. Uploads come first so a failed upload aborts
/// the submission before anything is written; the ledger is only opened
/// once there is a row to write.
fn run_pipeline<F, S>(
    request: &PaymentRequest,
    files: &F,
    classify: impl FnOnce(&str) -> Classification,
    open_store: impl FnOnce() -> Result<S>,
) -> Result<SubmissionOutcome>
where
    F: FileStore,
    S: WorksheetStore,
{
    let mut invoice_link = None;
    if let Some(att) = &request.invoice {
        invoice_link = Some(files.put(&att.bytes, &att.filename)?);
    }
    let mut completion_links = Vec::new();
    for att in &request.job_completion {
        completion_links.push(files.put(&att.bytes, &att.filename)?);
    }

    let cost_code = classify(&request.description);
    let row = record::build(request, &cost_code, invoice_link.as_deref(), &completion_links);

    let mut store = open_store()?;
    ledger::append_rows(&mut store, &[row])?;

    Ok(SubmissionOutcome {
        cost_code,
        invoice_link,
        completion_links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn input() -> FormInput {
        FormInput {
            property: "Milford".to_string(),
            amount: 500.0,
            payable_party: "Jessica Ajtun".to_string(),
            payable_party_other: String::new(),
            description: "Tile work in master bath".to_string(),
        }
    }

    fn properties() -> Vec<String> {
        vec!["Coto".to_string(), "Milford".to_string()]
    }

    #[test]
    fn test_resolve_dropdown_when_manual_blank() {
        assert_eq!(resolve_payable_party("Alberto Contreras", "  "), "Alberto Contreras");
    }

    #[test]
    fn test_resolve_manual_when_dropdown_empty() {
        assert_eq!(resolve_payable_party("", "New Guy"), "New Guy");
    }

    #[test]
    fn test_resolve_manual_wins_over_dropdown() {
        assert_eq!(resolve_payable_party("Jessica Ajtun", "New Guy"), "New Guy");
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert!(validate(&input(), &properties()).is_ok());
    }

    #[test]
    fn test_validate_aggregates_all_violations() {
        let bad = FormInput {
            property: String::new(),
            amount: 0.0,
            payable_party: "Jessica Ajtun".to_string(),
            payable_party_other: String::new(),
            description: String::new(),
        };
        match validate(&bad, &properties()) {
            Err(SubpayError::Validation(fields)) => {
                assert_eq!(fields, vec!["property", "description", "amount"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_unknown_property() {
        let mut bad = input();
        bad.property = "Atlantis".to_string();
        match validate(&bad, &properties()) {
            Err(SubpayError::Validation(fields)) => assert_eq!(fields, vec!["property"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- pipeline fakes ----------------------------------------------------

    struct FakeFiles {
        fail_on: Option<String>,
        uploaded: RefCell<Vec<String>>,
    }

    impl FakeFiles {
        fn ok() -> Self {
            Self { fail_on: None, uploaded: RefCell::new(Vec::new()) }
        }

        fn failing_on(name: &str) -> Self {
            Self { fail_on: Some(name.to_string()), uploaded: RefCell::new(Vec::new()) }
        }
    }

    impl FileStore for FakeFiles {
        fn put(&self, _bytes: &[u8], filename: &str) -> Result<String> {
            if self.fail_on.as_deref() == Some(filename) {
                return Err(SubpayError::Upload(format!("refused: {filename}")));
            }
            self.uploaded.borrow_mut().push(filename.to_string());
            Ok(format!("https://drive.example/{filename}"))
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<Vec<Vec<String>>>>);

    impl WorksheetStore for SharedStore {
        fn read_all(&self) -> Result<Vec<Vec<String>>> {
            Ok(self.0.borrow().clone())
        }

        fn append_row(&mut self, cells: &[String]) -> Result<()> {
            self.0.borrow_mut().push(cells.to_vec());
            Ok(())
        }

        fn update_range(&mut self, _range: &str, rows: &[Vec<String>]) -> Result<()> {
            self.0.borrow_mut().extend(rows.iter().cloned());
            Ok(())
        }
    }

    fn attachment(name: &str) -> Attachment {
        Attachment { filename: name.to_string(), bytes: vec![1, 2, 3] }
    }

    fn request_with_attachments() -> PaymentRequest {
        PaymentRequest {
            date_invoiced: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            property: "Milford".to_string(),
            amount: 500.0,
            payable_party: "Jessica Ajtun".to_string(),
            description: "Tile work in master bath".to_string(),
            invoice: Some(attachment("invoice.jpg")),
            job_completion: vec![attachment("done-1.jpg"), attachment("done-2.jpg")],
        }
    }

    #[test]
    fn test_pipeline_uploads_then_appends() {
        let files = FakeFiles::ok();
        let store = SharedStore::default();
        let handle = store.clone();

        let outcome = run_pipeline(
            &request_with_attachments(),
            &files,
            |_| Classification::Code("09650 - Interior Tile Work- Material".to_string()),
            move || Ok(handle),
        )
        .unwrap();

        assert_eq!(
            *files.uploaded.borrow(),
            ["invoice.jpg", "done-1.jpg", "done-2.jpg"]
        );
        assert_eq!(outcome.invoice_link.as_deref(), Some("https://drive.example/invoice.jpg"));
        assert_eq!(outcome.completion_links.len(), 2);

        let rows = store.0.borrow();
        assert_eq!(rows.len(), 2); // header + data
        assert!(rows[1].contains(&"09650 - Interior Tile Work- Material".to_string()));
    }

    #[test]
    fn test_upload_failure_aborts_with_no_ledger_write() {
        let files = FakeFiles::failing_on("done-2.jpg");
        let store = SharedStore::default();
        let handle = store.clone();
        let classified = RefCell::new(false);

        let result = run_pipeline(
            &request_with_attachments(),
            &files,
            |_| {
                *classified.borrow_mut() = true;
                Classification::Uncategorized
            },
            move || Ok(handle),
        );

        assert!(matches!(result, Err(SubpayError::Upload(_))));
        assert!(store.0.borrow().is_empty(), "ledger must stay untouched");
        assert!(!*classified.borrow(), "classification must not run after a failed upload");
    }

    #[test]
    fn test_pipeline_without_attachments_never_uploads() {
        let files = FakeFiles::failing_on("anything.jpg");
        let store = SharedStore::default();
        let handle = store.clone();

        let request = PaymentRequest {
            invoice: None,
            job_completion: Vec::new(),
            ..request_with_attachments()
        };
        let outcome =
            run_pipeline(&request, &files, |_| Classification::Uncategorized, move || Ok(handle))
                .unwrap();

        assert!(files.uploaded.borrow().is_empty());
        assert!(outcome.invoice_link.is_none());
        let rows = store.0.borrow();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].contains(&"Uncategorized".to_string()));
    }
}
