mod classifier;
mod cli;
mod drive;
mod error;
mod fmt;
mod ledger;
mod models;
mod record;
mod settings;
mod sheets;
mod submission;
mod taxonomy;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            spreadsheet,
            worksheet,
            drive_folder,
            google_token_file,
        } => cli::init::run(spreadsheet, worksheet, drive_folder, google_token_file),
        Commands::Submit {
            date,
            property,
            amount,
            payable_party,
            payable_party_other,
            description,
            invoice,
            job_completion,
        } => cli::submit::run(
            date,
            property,
            amount,
            payable_party,
            payable_party_other,
            description,
            invoice,
            job_completion,
        ),
        Commands::Classify { description } => cli::classify::run(&description),
        Commands::Codes => cli::codes::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
