//! Encoding of submitted attendance into sheet rows.
//!
//! A save request carries `{"records": [...]}`. Every entry becomes one row in the
//! attendance column order, and the whole batch shares a single server timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use validator::Validate;

use crate::{error::CodecError, grid::Row};

/// One attendance entry as sent by the client.
///
/// Every field must be present. Numbers and booleans are accepted and kept in their
/// textual form, so `"period": 1` is stored as `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmission {
    #[serde(deserialize_with = "cell_text")]
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub date: String,

    #[serde(deserialize_with = "cell_text")]
    #[validate(length(min = 1, message = "studentId must not be empty"))]
    pub student_id: String,

    #[serde(deserialize_with = "cell_text")]
    pub student_name: String,

    #[serde(deserialize_with = "cell_text")]
    #[validate(length(min = 1, message = "period must not be empty"))]
    pub period: String,

    #[serde(deserialize_with = "cell_text")]
    pub status: String,

    #[serde(deserialize_with = "cell_text")]
    pub faculty: String,

    #[serde(deserialize_with = "cell_text")]
    pub course: String,
}

impl AttendanceSubmission {
    /// `[date, studentId, studentName, period, status, faculty, course, timestamp]`
    pub fn to_row(&self, timestamp: &str) -> Row {
        vec![
            self.date.clone(),
            self.student_id.clone(),
            self.student_name.clone(),
            self.period.clone(),
            self.status.clone(),
            self.faculty.clone(),
            self.course.clone(),
            timestamp.to_string(),
        ]
    }
}

/// Reads the `records` array of a save request body.
///
/// Anything other than an array is rejected as a whole; nothing is partially read.
pub fn parse_batch(body: &Value) -> Result<Vec<AttendanceSubmission>, CodecError> {
    let records = body
        .get("records")
        .and_then(Value::as_array)
        .ok_or(CodecError::NotAnArray)?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            AttendanceSubmission::deserialize(record).map_err(|e| CodecError::InvalidEntry {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Encodes a batch, stamping every row with the same `timestamp`.
pub fn encode_batch(entries: &[AttendanceSubmission], timestamp: &str) -> Vec<Row> {
    entries.iter().map(|entry| entry.to_row(timestamp)).collect()
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-01-01T08:30:00.000Z`.
pub fn batch_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(de::Error::custom("expected a string or number, found null")),
        Value::Array(_) => Err(de::Error::custom("expected a string or number, found an array")),
        Value::Object(_) => Err(de::Error::custom("expected a string or number, found an object")),
    }
}
