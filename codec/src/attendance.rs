//! Attendance sheet decoding.
//!
//! Column layout of the attendance range:
//!
//! | 0    | 1         | 2           | 3      | 4      | 5       | 6      | 7         |
//! |------|-----------|-------------|--------|--------|---------|--------|-----------|
//! | date | studentId | studentName | period | status | faculty | course | timestamp |
//!
//! On the wire every entry is flattened into five string pairs under the composite
//! key `studentId_date_period`:
//!
//! ```json
//! {
//!   "S1_2024-01-01_1": "Present",
//!   "S1_2024-01-01_1_faculty": "F1",
//!   "S1_2024-01-01_1_course": "C1",
//!   "S1_2024-01-01_1_studentName": "Alice",
//!   "S1_2024-01-01_1_timestamp": "2024-01-01T08:00:00.000Z"
//! }
//! ```
//!
//! Key parts are joined verbatim. A value containing `_` can make two different
//! entries produce the same key; stored sheets depend on this encoding, so it is kept.
//! A key can also collide with another entry's suffixed key (period `1_faculty`).
//! Flattening then replays entries in sheet-row order so the later row wins.

use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer};

use crate::{
    grid::{Row, cell, present},
    header::HeaderPolicy,
};

pub const FACULTY_SUFFIX: &str = "_faculty";
pub const COURSE_SUFFIX: &str = "_course";
pub const STUDENT_NAME_SUFFIX: &str = "_studentName";
pub const TIMESTAMP_SUFFIX: &str = "_timestamp";

const DATE: usize = 0;
const STUDENT_ID: usize = 1;
const STUDENT_NAME: usize = 2;
const PERIOD: usize = 3;
const STATUS: usize = 4;
const FACULTY: usize = 5;
const COURSE: usize = 6;
const TIMESTAMP: usize = 7;

/// Identity of one attendance entry: `studentId_date_period`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey(String);

impl CompositeKey {
    pub fn new(student_id: &str, date: &str, period: &str) -> Self {
        Self(format!("{student_id}_{date}_{period}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn suffixed(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.0)
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything recorded for one composite key apart from the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub status: String,
    pub faculty: String,
    pub course: String,
    pub student_name: String,
    pub timestamp: String,
}

impl AttendanceEntry {
    /// Reads one sheet row. Returns `None` when date, student id or period is empty.
    pub fn from_row(row: &[String]) -> Option<(CompositeKey, Self)> {
        let date = present(row, DATE)?;
        let student_id = present(row, STUDENT_ID)?;
        let period = present(row, PERIOD)?;

        let entry = Self {
            status: cell(row, STATUS).to_string(),
            faculty: cell(row, FACULTY).to_string(),
            course: cell(row, COURSE).to_string(),
            student_name: cell(row, STUDENT_NAME).to_string(),
            timestamp: cell(row, TIMESTAMP).to_string(),
        };

        Some((CompositeKey::new(student_id, date, period), entry))
    }
}

/// Decoded attendance, one entry per composite key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceLog {
    entries: BTreeMap<CompositeKey, AttendanceEntry>,
    /// Index of the row each entry was last read from.
    last_row: BTreeMap<CompositeKey, usize>,
}

impl AttendanceLog {
    /// Decodes a fetched grid. Rows without an identity are skipped; when two rows
    /// share a key the later one wins.
    pub fn decode(rows: &[Row], policy: HeaderPolicy) -> Self {
        let mut log = Self::default();
        for (index, row) in policy.data_rows(rows).iter().enumerate() {
            if let Some((key, entry)) = AttendanceEntry::from_row(row) {
                log.last_row.insert(key.clone(), index);
                log.entries.insert(key, entry);
            }
        }
        log
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&AttendanceEntry> {
        self.entries.get(&CompositeKey(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CompositeKey, &AttendanceEntry)> {
        self.entries.iter()
    }

    /// The suffix-flattened wire form, written in sheet-row order.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|(key, _)| self.last_row.get(*key).copied().unwrap_or_default());

        let mut flat = BTreeMap::new();
        for (key, entry) in ordered {
            flat.insert(key.as_str().to_string(), entry.status.clone());
            flat.insert(key.suffixed(FACULTY_SUFFIX), entry.faculty.clone());
            flat.insert(key.suffixed(COURSE_SUFFIX), entry.course.clone());
            flat.insert(key.suffixed(STUDENT_NAME_SUFFIX), entry.student_name.clone());
            flat.insert(key.suffixed(TIMESTAMP_SUFFIX), entry.timestamp.clone());
        }
        flat
    }
}

impl Serialize for AttendanceLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.flatten().serialize(serializer)
    }
}
