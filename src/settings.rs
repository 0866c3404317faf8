use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SubpayError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default = "default_model")]
    pub openai_model: String,
    /// Reject model replies whose code is not in the taxonomy.
    #[serde(default)]
    pub strict_cost_codes: bool,
    /// Path to a file holding a Google OAuth bearer token
    /// (e.g. written by `gcloud auth print-access-token`).
    #[serde(default)]
    pub google_token_file: String,
    #[serde(default = "default_spreadsheet")]
    pub spreadsheet: String,
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    /// Drive folder for attachment uploads; empty means the drive root.
    #[serde(default)]
    pub drive_folder_id: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_properties")]
    pub properties: Vec<String>,
    #[serde(default = "default_payable_parties")]
    pub payable_parties: Vec<String>,
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_spreadsheet() -> String {
    "BSD MASTER DATA".to_string()
}

fn default_worksheet() -> String {
    "Payments".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_properties() -> Vec<String> {
    [
        "Coto",
        "Milford",
        "647 Navy",
        "645 Navy",
        "Sagebrush",
        "Paramount",
        "126 Scenic",
        "San Marino",
        "King Arthur",
        "Via Sanoma",
        "Highland",
        "Channel View",
        "Paseo De las Estrellas",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_payable_parties() -> Vec<String> {
    [
        "Christian Granados (Vendor)",
        "Jessica Ajtun",
        "Andres De Jesus",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_model: default_model(),
            strict_cost_codes: false,
            google_token_file: String::new(),
            spreadsheet: default_spreadsheet(),
            worksheet: default_worksheet(),
            drive_folder_id: String::new(),
            request_timeout_secs: default_timeout(),
            properties: default_properties(),
            payable_parties: default_payable_parties(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("subpay")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| SubpayError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

impl Settings {
    /// Effective OpenAI key: the environment wins over the settings file.
    pub fn effective_api_key(&self) -> String {
        std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| self.openai_api_key.clone())
    }

    /// Read the Google bearer token from the configured token file.
    pub fn google_token(&self) -> Result<String> {
        if self.google_token_file.is_empty() {
            return Err(SubpayError::Settings(
                "google_token_file is not set; run `subpay init`".to_string(),
            ));
        }
        let token = std::fs::read_to_string(&self.google_token_file)?;
        let token = token.trim();
        if token.is_empty() {
            return Err(SubpayError::Settings(format!(
                "token file is empty: {}",
                self.google_token_file
            )));
        }
        Ok(token.to_string())
    }
}
