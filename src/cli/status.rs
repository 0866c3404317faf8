use crate::error::Result;
use crate::settings::{load_settings, settings_path};
use crate::taxonomy::COST_CODES;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let path = settings_path();

    println!("Settings:     {}", path.display());
    println!("Spreadsheet:  {}", settings.spreadsheet);
    println!("Worksheet:    {}", settings.worksheet);
    println!("Model:        {}", settings.openai_model);
    println!("Strict codes: {}", settings.strict_cost_codes);
    println!(
        "Drive folder: {}",
        if settings.drive_folder_id.is_empty() {
            "(root)"
        } else {
            &settings.drive_folder_id
        }
    );

    println!();
    println!("Cost codes:       {}", COST_CODES.len());
    println!("Properties:       {}", settings.properties.len());
    println!("Payable parties:  {}", settings.payable_parties.len());

    println!();
    let key_set =
        !settings.openai_api_key.is_empty() || std::env::var("OPENAI_API_KEY").is_ok();
    println!("OpenAI key:   {}", if key_set { "configured" } else { "(not set)" });
    if settings.google_token_file.is_empty() {
        println!("Google token: (not set)");
    } else if std::path::Path::new(&settings.google_token_file).exists() {
        println!("Google token: {}", settings.google_token_file);
    } else {
        println!("Google token: {} (missing)", settings.google_token_file);
    }

    if !path.exists() {
        println!();
        println!("Settings file not found. Run `subpay init` to set up.");
    }

    Ok(())
}
