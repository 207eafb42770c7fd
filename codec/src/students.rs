//! Student roster decoding.
//!
//! Column layout of the students range: `[reg, name, password, batch, year]`.

use serde::{Deserialize, Serialize};

use crate::{
    grid::{Row, trimmed},
    header::HeaderPolicy,
};

pub const DEFAULT_BATCH: &str = "A";
pub const DEFAULT_YEAR: &str = "1st";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub reg: String,
    pub name: String,
    pub password: String,
    pub batch: String,
    pub year: String,
}

impl Student {
    /// Reads one roster row. Rows without a registration number or name yield `None`.
    ///
    /// An empty password falls back to the registration number.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let reg = trimmed(row, 0)?;
        let name = trimmed(row, 1)?;

        Some(Self {
            reg: reg.to_string(),
            name: name.to_string(),
            password: trimmed(row, 2).unwrap_or(reg).to_string(),
            batch: trimmed(row, 3).unwrap_or(DEFAULT_BATCH).to_string(),
            year: trimmed(row, 4).unwrap_or(DEFAULT_YEAR).to_string(),
        })
    }
}

/// Decodes the roster grid in sheet order. The first row is always a header.
pub fn decode_students(rows: &[Row]) -> Vec<Student> {
    HeaderPolicy::Always
        .data_rows(rows)
        .iter()
        .filter_map(|row| Student::from_row(row))
        .collect()
}
