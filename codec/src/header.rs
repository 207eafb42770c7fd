use std::{fmt, str::FromStr};

use crate::{
    error::CodecError,
    grid::{Row, cell},
};

/// How the first row of a fetched grid is treated.
///
/// The two policies disagree on headerless data: `Always` drops a real data row,
/// `Detect` keeps it unless its first cell happens to read `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Row 0 is skipped unconditionally.
    #[default]
    Always,
    /// Row 0 is skipped only when its first cell equals `date`, ignoring case.
    Detect,
}

impl HeaderPolicy {
    /// Returns the slice of rows that carry data under this policy.
    pub fn data_rows<'a>(&self, rows: &'a [Row]) -> &'a [Row] {
        let skip_first = match self {
            HeaderPolicy::Always => !rows.is_empty(),
            HeaderPolicy::Detect => rows
                .first()
                .is_some_and(|first| cell(first, 0).eq_ignore_ascii_case("date")),
        };

        if skip_first { &rows[1..] } else { rows }
    }
}

impl FromStr for HeaderPolicy {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(HeaderPolicy::Always),
            "detect" => Ok(HeaderPolicy::Detect),
            _ => Err(CodecError::UnknownHeaderPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for HeaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderPolicy::Always => write!(f, "always"),
            HeaderPolicy::Detect => write!(f, "detect"),
        }
    }
}
