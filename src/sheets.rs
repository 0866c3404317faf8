use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SubpayError};
use crate::ledger::WorksheetStore;
use crate::settings::Settings;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub struct SheetsClient {
    http: reqwest::blocking::Client,
    token: String,
    spreadsheet_id: String,
    worksheet: String,
}

#[derive(Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<FileEntry>,
}

#[derive(Deserialize)]
struct FileEntry {
    id: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    /// Open the configured spreadsheet by name. The spreadsheet and the
    /// worksheet must already exist; nothing is created here.
    pub fn open(settings: &Settings) -> Result<Self> {
        let token = settings.google_token()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        let spreadsheet_id = resolve_spreadsheet(&http, &token, &settings.spreadsheet)?;
        Ok(Self {
            http,
            token,
            spreadsheet_id,
            worksheet: settings.worksheet.clone(),
        })
    }

    fn values_url(&self, range: &str) -> Result<Url> {
        let mut url =
            Url::parse(SHEETS_BASE_URL).map_err(|e| SubpayError::Ledger(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SubpayError::Ledger("bad sheets base url".to_string()))?
            .push(&self.spreadsheet_id)
            .push("values")
            .push(range);
        Ok(url)
    }
}

/// Name-based lookup the way gspread's `open` works: one Drive files
/// query filtered to spreadsheets.
fn resolve_spreadsheet(
    http: &reqwest::blocking::Client,
    token: &str,
    name: &str,
) -> Result<String> {
    let query = format!(
        "name = '{}' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false",
        name.replace('\'', "\\'")
    );
    let list: FileList = http
        .get(DRIVE_FILES_URL)
        .query(&[
            ("q", query.as_str()),
            ("fields", "files(id)"),
            ("supportsAllDrives", "true"),
            ("includeItemsFromAllDrives", "true"),
        ])
        .bearer_auth(token)
        .send()?
        .error_for_status()?
        .json()?;
    list.files
        .into_iter()
        .next()
        .map(|f| f.id)
        .ok_or_else(|| SubpayError::Ledger(format!("spreadsheet not found: {name}")))
}

impl WorksheetStore for SheetsClient {
    fn read_all(&self) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(&self.worksheet)?;
        let range: ValueRange = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()?
            .error_for_status()
            .map_err(|e| {
                SubpayError::Ledger(format!("cannot read worksheet {}: {e}", self.worksheet))
            })?
            .json()?;
        Ok(range.values)
    }

    fn append_row(&mut self, cells: &[String]) -> Result<()> {
        let url = self.values_url(&format!("{}!A1:append", self.worksheet))?;
        self.http
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.token)
            .json(&json!({ "values": [cells] }))
            .send()?
            .error_for_status()
            .map_err(|e| SubpayError::Ledger(format!("append failed: {e}")))?;
        Ok(())
    }

    fn update_range(&mut self, range: &str, rows: &[Vec<String>]) -> Result<()> {
        let url = self.values_url(&format!("{}!{}", self.worksheet, range))?;
        self.http
            .put(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.token)
            .json(&json!({ "values": rows }))
            .send()?
            .error_for_status()
            .map_err(|e| SubpayError::Ledger(format!("batch write failed: {e}")))?;
        Ok(())
    }
}
