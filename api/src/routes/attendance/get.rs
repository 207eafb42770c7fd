use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use codec::AttendanceLog;
use tracing::info;
use util::state::AppState;

use crate::{error::ApiError, response::RecordsResponse};

/// GET `/get-attendance`
///
/// Reads the whole attendance range and returns it as flattened records keyed by
/// `studentId_date_period`. Rows without a date, student id or period are skipped,
/// and when a key repeats the later row wins.
///
/// ### Responses
/// - `200 OK` `{ "records": { "<key>": "<status>", "<key>_faculty": ..., ... } }`
/// - `500` `{ "error": "...", "records": {} }` on missing configuration or a failed read
pub async fn get_attendance(State(state): State<AppState>) -> Response {
    match load_attendance(&state).await {
        Ok(records) => Json(RecordsResponse { records }).into_response(),
        Err(err) => err.with_fallback(RecordsResponse::default()),
    }
}

async fn load_attendance(state: &AppState) -> Result<AttendanceLog, ApiError> {
    let config = state.config();
    let target = config.sheet_target()?;

    let rows = state
        .store()
        .get_values(&target, &config.attendance_range)
        .await?;

    let records = AttendanceLog::decode(&rows, config.attendance_header_policy);
    info!(
        rows = rows.len(),
        records = records.len(),
        policy = %config.attendance_header_policy,
        "Fetched attendance"
    );

    Ok(records)
}
