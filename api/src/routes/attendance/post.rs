use axum::{Json, body::Bytes, extract::State};
use chrono::Utc;
use codec::{CodecError, batch_timestamp, encode_batch, parse_batch};
use common::format_validation_errors;
use serde_json::Value;
use tracing::info;
use util::state::AppState;
use validator::Validate;

use crate::{error::ApiError, response::SaveResponse};

/// POST `/save-attendance`
///
/// Appends one row per submitted entry to the attendance range in a single call.
/// Every row of the batch carries the same server timestamp. This is an append:
/// resubmitting an entry adds another row.
///
/// ### Request Body
/// ```json
/// {
///   "records": [
///     { "date": "2024-01-01", "studentId": "S1", "studentName": "Alice",
///       "period": 1, "status": "Present", "faculty": "F1", "course": "C1" }
///   ]
/// }
/// ```
///
/// ### Responses
/// - `200 OK` `{ "success": true, "message": "Saved N attendance records", "updatedRange": "..." }`
/// - `400` when the body is not JSON, `records` is not an array, or an entry is invalid
/// - `500` on missing configuration or a failed append
///
/// The body is fully validated before configuration is checked or the sheet is
/// touched, so a rejected batch never writes anything.
pub async fn save_attendance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, ApiError> {
    let body: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;
    let entries = parse_batch(&body)?;

    for (index, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| CodecError::InvalidEntry {
                index,
                reason: format_validation_errors(&e),
            })?;
    }

    let config = state.config();
    let target = config.sheet_target()?;

    let timestamp = batch_timestamp(Utc::now());
    let rows = encode_batch(&entries, &timestamp);

    let outcome = state
        .store()
        .append_values(&target, &config.attendance_range, rows)
        .await?;

    info!(
        saved = entries.len(),
        updated_range = outcome.updated_range.as_deref().unwrap_or("-"),
        "Saved attendance"
    );

    Ok(Json(SaveResponse::saved(entries.len(), outcome.updated_range)))
}
