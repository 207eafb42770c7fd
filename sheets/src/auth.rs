//! Service-account authentication.
//!
//! Google's two-legged OAuth flow: sign a short-lived RS256 JWT with the service
//! account key, then trade it at the token endpoint for a bearer access token.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::{
    credentials::{Scope, ServiceAccount},
    error::SheetsError,
};

pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Validity of a signed assertion. Google rejects anything longer than an hour.
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AssertionClaims {
    pub fn new(account: &ServiceAccount, scope: Scope, audience: &str, now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            iss: account.client_email().to_string(),
            scope: scope.url().to_string(),
            aud: audience.to_string(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        }
    }
}

/// Signs the assertion for `scope`, addressed to the token endpoint `audience`.
pub fn sign_assertion(
    account: &ServiceAccount,
    scope: Scope,
    audience: &str,
    now: DateTime<Utc>,
) -> Result<String, SheetsError> {
    let key = EncodingKey::from_rsa_pem(account.private_key_pem().as_bytes())
        .map_err(|e| SheetsError::InvalidKey(e.to_string()))?;

    let claims = AssertionClaims::new(account, scope, audience, now);

    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| SheetsError::Auth(format!("could not sign assertion: {e}")))
}

/// Successful reply from the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error reply from the token endpoint, e.g. `{"error":"invalid_grant", ...}`.
#[derive(Debug, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl TokenErrorResponse {
    pub fn reason(self) -> String {
        match self.error_description {
            Some(description) => format!("{}: {description}", self.error),
            None => self.error,
        }
    }
}
