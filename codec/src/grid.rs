//! Positional access into raw spreadsheet rows.

/// One spreadsheet row as returned by the values API.
pub type Row = Vec<String>;

/// Returns the cell at `index`, or `""` when the row is shorter than that.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Returns the cell at `index` only when it holds something.
pub fn present(row: &[String], index: usize) -> Option<&str> {
    Some(cell(row, index)).filter(|value| !value.is_empty())
}

/// Like [`present`], but trims surrounding whitespace first.
pub fn trimmed(row: &[String], index: usize) -> Option<&str> {
    Some(cell(row, index).trim()).filter(|value| !value.is_empty())
}
