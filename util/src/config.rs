//! Application configuration.
//!
//! `AppConfig` is built once at process start from `.env` and the environment, then
//! shared through [`AppState`](crate::state::AppState). Credentials are allowed to be
//! empty here; handlers report them as missing when a request actually needs them.

use std::env;

use codec::HeaderPolicy;
use sheets::{SheetTarget, SheetsError, client};
use tracing::warn;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub service_account_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
    pub attendance_range: String,
    pub students_range: String,
    pub attendance_header_policy: HeaderPolicy,
    pub token_uri: String,
    pub sheets_api_base: String,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset or blank keys fall back to their defaults. Unparseable values for `PORT` and
    /// `ATTENDANCE_HEADER_POLICY` are logged and replaced by the default as well.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let var = |key: &str, default: &str| set(key).unwrap_or_else(|| default.into());

        let port = match set("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = raw.as_str(), "Invalid PORT, using 3000");
                3000
            }),
            None => 3000,
        };

        let attendance_header_policy = match set("ATTENDANCE_HEADER_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to the default header policy");
                HeaderPolicy::default()
            }),
            None => HeaderPolicy::default(),
        };

        Self {
            env: var("APP_ENV", "development"),
            project_name: var("PROJECT_NAME", "attendance-sheets"),
            log_level: var("LOG_LEVEL", "api=info"),
            log_file: var("LOG_FILE", "api.log"),
            log_to_stdout: var("LOG_TO_STDOUT", "false") == "true",
            host: var("HOST", "127.0.0.1"),
            port,
            service_account_email: var("GOOGLE_SERVICE_ACCOUNT_EMAIL", ""),
            private_key: var("GOOGLE_PRIVATE_KEY", ""),
            spreadsheet_id: var("SPREADSHEET_ID", ""),
            attendance_range: var("ATTENDANCE_RANGE", "Attendance!A:H"),
            students_range: var("STUDENTS_RANGE", "Students!A:E"),
            attendance_header_policy,
            token_uri: var("GOOGLE_TOKEN_URI", client::DEFAULT_TOKEN_URI),
            sheets_api_base: var("SHEETS_API_BASE", client::DEFAULT_API_BASE),
        }
    }

    /// The spreadsheet and identity every remote call uses.
    ///
    /// Fails with the first missing value, checked as email, key, then spreadsheet id.
    pub fn sheet_target(&self) -> Result<SheetTarget, SheetsError> {
        SheetTarget::resolve(
            &self.service_account_email,
            &self.private_key,
            &self.spreadsheet_id,
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
