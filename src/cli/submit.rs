use colored::Colorize;

use crate::error::{Result, SubpayError};
use crate::fmt::money;
use crate::models::{Attachment, PaymentRequest};
use crate::settings::load_settings;
use crate::submission::{self, FormInput};

#[allow(clippy::too_many_arguments)]
pub fn run(
    date: Option<String>,
    property: String,
    amount: f64,
    payable_party: String,
    payable_party_other: String,
    description: String,
    invoice: Option<String>,
    job_completion: Vec<String>,
) -> Result<()> {
    let settings = load_settings();

    let date_invoiced = match &date {
        Some(d) => chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| SubpayError::Other(format!("bad date (expected YYYY-MM-DD): {d}")))?,
        None => chrono::Local::now().date_naive(),
    };

    let input = FormInput {
        property,
        amount,
        payable_party,
        payable_party_other,
        description,
    };
    submission::validate(&input, &settings.properties)?;

    let request = PaymentRequest {
        date_invoiced,
        property: input.property.trim().to_string(),
        amount: input.amount,
        payable_party: submission::resolve_payable_party(
            &input.payable_party,
            &input.payable_party_other,
        ),
        description: input.description,
        invoice: invoice.as_deref().map(read_attachment).transpose()?,
        job_completion: job_completion
            .iter()
            .map(|p| read_attachment(p))
            .collect::<Result<_>>()?,
    };

    println!("Processing...");
    let outcome = submission::process(&settings, &request)?;

    println!();
    println!("Cost code:      {}", outcome.cost_code.as_cell());
    println!("Amount:         {}", money(request.amount));
    println!("Payable party:  {}", request.payable_party);
    if let Some(link) = &outcome.invoice_link {
        println!("Invoice:        {link}");
    }
    for link in &outcome.completion_links {
        println!("Job completion: {link}");
    }
    println!();
    println!("{}", "Payment entry recorded.".green());
    Ok(())
}

fn read_attachment(path: &str) -> Result<Attachment> {
    let bytes = std::fs::read(path)?;
    let filename = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());
    Ok(Attachment { filename, bytes })
}
