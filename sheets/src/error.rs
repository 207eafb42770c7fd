use thiserror::Error;

/// Everything that can go wrong between reading the configuration and getting a
/// response from the Sheets API.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// A required configuration value is empty. Detected before any network call.
    #[error("Missing {0}")]
    MissingConfig(&'static str),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The spreadsheet rejected the service account (403) or does not exist (404).
    #[error("Cannot access Google Sheet: {message}. Make sure the sheet is shared with the service account")]
    Access { message: String },

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Request to the Sheets API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid Sheets API URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response from the Sheets API: {0}")]
    Decode(String),
}

impl SheetsError {
    /// True for failures caused by local configuration rather than the remote side.
    pub fn is_config(&self) -> bool {
        matches!(self, SheetsError::MissingConfig(_))
    }
}
