//! JSON bodies returned by the endpoints.
//!
//! Successful responses are endpoint-specific; failures share [`ErrorResponse`]:
//!
//! ```json
//! { "error": "Missing spreadsheet ID", "records": {} }
//! ```
//!
//! where everything next to `error` comes from the endpoint's empty fallback.

use codec::{AttendanceLog, Student};
use serde::Serialize;

/// Error body. `fallback` is flattened in beside `error`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T>
where
    T: Serialize,
{
    pub error: String,
    #[serde(flatten)]
    pub fallback: T,
}

/// `GET /get-attendance`
///
/// ```json
/// {
///   "records": {
///     "S1_2024-01-01_1": "Present",
///     "S1_2024-01-01_1_faculty": "F1",
///     "S1_2024-01-01_1_course": "C1",
///     "S1_2024-01-01_1_studentName": "Alice",
///     "S1_2024-01-01_1_timestamp": "2024-01-01T08:00:00.000Z"
///   }
/// }
/// ```
#[derive(Debug, Default, Serialize)]
pub struct RecordsResponse {
    pub records: AttendanceLog,
}

/// `GET /get-students`
#[derive(Debug, Default, Serialize)]
pub struct StudentsResponse {
    pub students: Vec<Student>,
    pub total: usize,
}

impl From<Vec<Student>> for StudentsResponse {
    fn from(students: Vec<Student>) -> Self {
        Self {
            total: students.len(),
            students,
        }
    }
}

/// Failure payload for `GET /get-students`; carries no `total`.
#[derive(Debug, Default, Serialize)]
pub struct NoStudents {
    pub students: Vec<Student>,
}

/// `POST /save-attendance`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_range: Option<String>,
}

impl SaveResponse {
    pub fn saved(count: usize, updated_range: Option<String>) -> Self {
        Self {
            success: true,
            message: format!("Saved {count} attendance records"),
            updated_range,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
