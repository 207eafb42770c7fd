//! Google Sheets v4 implementation of [`ValueStore`].

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    auth::{JWT_BEARER_GRANT, TokenErrorResponse, TokenResponse, sign_assertion},
    credentials::{Scope, ServiceAccount, SheetTarget},
    error::SheetsError,
    store::{AppendOutcome, Grid, ValueStore},
};

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// How appended cells are interpreted; matches what a user typing into the sheet gets.
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Talks to the Sheets values API. A fresh access token is minted for every call.
#[derive(Debug, Clone)]
pub struct GoogleSheets {
    http: Client,
    api_base: String,
    token_uri: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
struct AppendRequest<'a> {
    values: &'a Grid,
}

#[derive(Deserialize)]
struct AppendResponse {
    #[serde(default)]
    updates: Option<UpdatedValues>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatedValues {
    #[serde(default)]
    updated_range: Option<String>,
    #[serde(default)]
    updated_rows: Option<u64>,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    error: GoogleError,
}

#[derive(Deserialize)]
struct GoogleError {
    message: String,
}

impl Default for GoogleSheets {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_TOKEN_URI)
    }
}

impl GoogleSheets {
    pub fn new(api_base: impl Into<String>, token_uri: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
            token_uri: token_uri.into(),
        }
    }

    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    /// Exchanges a freshly signed assertion for a bearer token.
    async fn access_token(
        &self,
        account: &ServiceAccount,
        scope: Scope,
    ) -> Result<String, SheetsError> {
        let assertion = sign_assertion(account, scope, &self.token_uri, Utc::now())?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let reason = serde_json::from_str::<TokenErrorResponse>(&body)
                .map(TokenErrorResponse::reason)
                .unwrap_or_else(|_| format!("token endpoint returned {status}"));
            warn!(client_email = account.client_email(), %status, "Token exchange rejected");
            return Err(SheetsError::Auth(reason));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| SheetsError::Decode(format!("token response: {e}")))?;

        debug!(
            client_email = account.client_email(),
            scope = scope.url(),
            expires_in = token.expires_in.unwrap_or_default(),
            "Obtained access token"
        );

        Ok(token.access_token)
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}{suffix}` with each segment escaped.
    fn values_url(
        &self,
        spreadsheet_id: &str,
        range: &str,
        suffix: &str,
    ) -> Result<Url, SheetsError> {
        let mut url =
            Url::parse(&self.api_base).map_err(|e| SheetsError::InvalidUrl(e.to_string()))?;

        let range_segment = format!("{range}{suffix}");
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl(self.api_base.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range_segment.as_str()]);

        Ok(url)
    }
}

#[async_trait]
impl ValueStore for GoogleSheets {
    async fn get_values(&self, target: &SheetTarget, range: &str) -> Result<Grid, SheetsError> {
        let token = self.access_token(&target.account, Scope::ReadOnly).await?;
        let url = self.values_url(&target.spreadsheet_id, range, "")?;

        let response = self.http.get(url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| SheetsError::Decode(e.to_string()))?;

        debug!(range, rows = body.values.len(), "Fetched values");

        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn append_values(
        &self,
        target: &SheetTarget,
        range: &str,
        rows: Grid,
    ) -> Result<AppendOutcome, SheetsError> {
        let token = self.access_token(&target.account, Scope::ReadWrite).await?;
        let url = self.values_url(&target.spreadsheet_id, range, ":append")?;

        let response = self
            .http
            .post(url)
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .bearer_auth(token)
            .json(&AppendRequest { values: &rows })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: AppendResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::Decode(e.to_string()))?;

        let updates = body.updates.unwrap_or(UpdatedValues {
            updated_range: None,
            updated_rows: None,
        });

        debug!(range, sent = rows.len(), updated_range = ?updates.updated_range, "Appended values");

        Ok(AppendOutcome {
            updated_range: updates.updated_range,
            updated_rows: updates.updated_rows.unwrap_or(rows.len() as u64),
        })
    }
}

/// Turns a non-2xx Sheets response into an error carrying Google's own message.
async fn api_error(response: Response) -> SheetsError {
    let status = response.status();
    let message = match response.json::<GoogleErrorBody>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("Sheets API returned {status}"),
    };

    warn!(%status, error = message.as_str(), "Sheets API call failed");

    match status {
        StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => SheetsError::Access { message },
        _ => SheetsError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Cells normally arrive as strings; unformatted reads can yield numbers or booleans.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
