use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use codec::{Student, decode_students};
use tracing::info;
use util::state::AppState;

use crate::{
    error::ApiError,
    response::{NoStudents, StudentsResponse},
};

/// GET `/get-students`
///
/// Returns the roster in sheet order. The first row is always treated as a header.
/// Rows without a registration number or name are dropped; `password` defaults to
/// the registration number, `batch` to `A` and `year` to `1st`.
///
/// ### Responses
/// - `200 OK` `{ "students": [{ "reg", "name", "password", "batch", "year" }], "total": N }`
/// - `500` `{ "error": "...", "students": [] }`
pub async fn get_students(State(state): State<AppState>) -> Response {
    match load_students(&state).await {
        Ok(students) => Json(StudentsResponse::from(students)).into_response(),
        Err(err) => err.with_fallback(NoStudents::default()),
    }
}

async fn load_students(state: &AppState) -> Result<Vec<Student>, ApiError> {
    let config = state.config();
    let target = config.sheet_target()?;

    let rows = state
        .store()
        .get_values(&target, &config.students_range)
        .await?;

    let students = decode_students(&rows);
    info!(rows = rows.len(), students = students.len(), "Fetched students");

    Ok(students)
}
