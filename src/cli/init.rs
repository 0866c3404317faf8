use zeroize::Zeroize;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub fn run(
    spreadsheet: Option<String>,
    worksheet: Option<String>,
    drive_folder: Option<String>,
    google_token_file: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();

    if let Some(name) = spreadsheet {
        settings.spreadsheet = name;
    }
    if let Some(name) = worksheet {
        settings.worksheet = name;
    }
    if let Some(id) = drive_folder {
        settings.drive_folder_id = id;
    }
    if let Some(path) = google_token_file {
        settings.google_token_file = path;
    }

    if settings.openai_api_key.is_empty() && std::env::var("OPENAI_API_KEY").is_err() {
        let mut key = rpassword::prompt_password("OpenAI API key (blank to skip): ")?;
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            settings.openai_api_key = trimmed.to_string();
        }
        key.zeroize();
    }

    save_settings(&settings)?;
    println!("Wrote {}", settings_path().display());
    Ok(())
}
