use std::fmt;

use crate::error::SheetsError;

pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
pub const READ_WRITE_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// OAuth scope requested for a single call. Reads never ask for write access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    ReadOnly,
    ReadWrite,
}

impl Scope {
    pub fn url(&self) -> &'static str {
        match self {
            Scope::ReadOnly => READONLY_SCOPE,
            Scope::ReadWrite => READ_WRITE_SCOPE,
        }
    }
}

/// A Google service-account identity and its PEM private key.
#[derive(Clone)]
pub struct ServiceAccount {
    client_email: String,
    private_key: String,
}

impl ServiceAccount {
    /// Builds the pair from raw configuration values.
    ///
    /// Environment files usually carry the key on one line with literal `\n`
    /// sequences; those are turned back into newlines here.
    pub fn new(client_email: &str, private_key: &str) -> Result<Self, SheetsError> {
        if client_email.trim().is_empty() {
            return Err(SheetsError::MissingConfig("service account email"));
        }
        if private_key.trim().is_empty() {
            return Err(SheetsError::MissingConfig("private key"));
        }

        Ok(Self {
            client_email: client_email.trim().to_string(),
            private_key: unescape_private_key(private_key),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub(crate) fn private_key_pem(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Replaces literal `\n` escape sequences with real line breaks.
pub fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// Where a call goes: which spreadsheet, acting as which service account.
#[derive(Debug, Clone)]
pub struct SheetTarget {
    pub account: ServiceAccount,
    pub spreadsheet_id: String,
}

impl SheetTarget {
    /// Checks the three required values in a fixed order (email, key, spreadsheet id)
    /// and reports the first one that is missing.
    pub fn resolve(
        client_email: &str,
        private_key: &str,
        spreadsheet_id: &str,
    ) -> Result<Self, SheetsError> {
        let account = ServiceAccount::new(client_email, private_key)?;

        if spreadsheet_id.trim().is_empty() {
            return Err(SheetsError::MissingConfig("spreadsheet ID"));
        }

        Ok(Self {
            account,
            spreadsheet_id: spreadsheet_id.trim().to_string(),
        })
    }
}
