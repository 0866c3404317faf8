use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SubpayError};
use crate::settings::Settings;

const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";

/// Destination for uploaded attachments. Upload failures are
/// data-integrity failures and must propagate, unlike classification.
pub trait FileStore {
    /// Store the bytes under `filename` and return a shareable link.
    fn put(&self, bytes: &[u8], filename: &str) -> Result<String>;
}

pub struct DriveClient {
    http: reqwest::blocking::Client,
    token: String,
    folder_id: String,
}

#[derive(Deserialize)]
struct DriveFile {
    id: String,
    #[serde(rename = "webViewLink")]
    web_view_link: Option<String>,
}

impl DriveClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let token = settings.google_token()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            token,
            folder_id: settings.drive_folder_id.clone(),
        })
    }

    /// Upload one attachment and return its shareable link. The bytes are
    /// staged to a scoped temp file that goes away when this returns.
    pub fn upload(&self, bytes: &[u8], filename: &str) -> Result<String> {
        let mut staged = tempfile::NamedTempFile::new()?;
        staged.write_all(bytes)?;
        staged.flush()?;

        let file_id = self.create_entry(filename)?;
        self.upload_content(&file_id, staged.path())?;
        self.share(&file_id)?;
        self.view_link(&file_id)
    }

    fn create_entry(&self, filename: &str) -> Result<String> {
        let mut metadata = json!({ "name": filename });
        if !self.folder_id.is_empty() {
            metadata["parents"] = json!([self.folder_id]);
        }
        let created: DriveFile = self
            .http
            .post(FILES_URL)
            .query(&[("supportsAllDrives", "true")])
            .bearer_auth(&self.token)
            .json(&metadata)
            .send()?
            .error_for_status()
            .map_err(|e| SubpayError::Upload(format!("create failed for {filename}: {e}")))?
            .json()?;
        Ok(created.id)
    }

    fn upload_content(&self, file_id: &str, staged: &Path) -> Result<()> {
        let file = std::fs::File::open(staged)?;
        self.http
            .patch(format!("{UPLOAD_URL}/{file_id}"))
            .query(&[("uploadType", "media"), ("supportsAllDrives", "true")])
            .bearer_auth(&self.token)
            .body(file)
            .send()?
            .error_for_status()
            .map_err(|e| SubpayError::Upload(format!("content upload failed: {e}")))?;
        Ok(())
    }

    /// Anyone-with-link read access, so the ledger cell is openable by
    /// every consumer of the shared sheet.
    fn share(&self, file_id: &str) -> Result<()> {
        self.http
            .post(format!("{FILES_URL}/{file_id}/permissions"))
            .query(&[("supportsAllDrives", "true")])
            .bearer_auth(&self.token)
            .json(&json!({ "role": "reader", "type": "anyone" }))
            .send()?
            .error_for_status()
            .map_err(|e| SubpayError::Upload(format!("share failed: {e}")))?;
        Ok(())
    }

    fn view_link(&self, file_id: &str) -> Result<String> {
        let file: DriveFile = self
            .http
            .get(format!("{FILES_URL}/{file_id}"))
            .query(&[("supportsAllDrives", "true"), ("fields", "id,webViewLink")])
            .bearer_auth(&self.token)
            .send()?
            .error_for_status()?
            .json()?;
        file.web_view_link
            .ok_or_else(|| SubpayError::Upload(format!("no view link for file {}", file.id)))
    }
}

impl FileStore for DriveClient {
    fn put(&self, bytes: &[u8], filename: &str) -> Result<String> {
        self.upload(bytes, filename)
    }
}
