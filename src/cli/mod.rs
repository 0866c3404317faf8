pub mod classify;
pub mod codes;
pub mod init;
pub mod status;
pub mod submit;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "subpay",
    about = "Subcontractor payment intake: classify, upload, and ledger payment requests."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up subpay: write the settings file and store the OpenAI API key.
    Init {
        /// Ledger spreadsheet name
        #[arg(long)]
        spreadsheet: Option<String>,
        /// Worksheet (tab) name within the spreadsheet
        #[arg(long)]
        worksheet: Option<String>,
        /// Drive folder ID for attachment uploads
        #[arg(long = "drive-folder")]
        drive_folder: Option<String>,
        /// Path to a file holding a Google OAuth bearer token
        #[arg(long = "google-token-file")]
        google_token_file: Option<String>,
    },
    /// Submit a subcontractor payment request.
    Submit {
        /// Date invoiced: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Property the work was performed on
        #[arg(long, default_value = "")]
        property: String,
        /// Payment amount in dollars
        #[arg(long, default_value_t = 0.0)]
        amount: f64,
        /// Payable party, from the configured list
        #[arg(long = "payable-party", default_value = "")]
        payable_party: String,
        /// Free-text payable party; wins over --payable-party when set
        #[arg(long = "payable-party-other", default_value = "")]
        payable_party_other: String,
        /// Project description (drives cost-code classification)
        #[arg(long, default_value = "")]
        description: String,
        /// Invoice image to upload
        #[arg(long)]
        invoice: Option<String>,
        /// Job completion image to upload (repeatable)
        #[arg(long = "job-completion")]
        job_completion: Vec<String>,
    },
    /// Classify a description against the cost-code taxonomy without submitting.
    Classify {
        /// Project description
        description: String,
    },
    /// List the cost-code taxonomy.
    Codes,
    /// Show the settings file and effective configuration.
    Status,
}
