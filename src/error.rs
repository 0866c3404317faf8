use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubpayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing or invalid fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Ledger error: {0}")]
    Ledger(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SubpayError>;
