//! In-process [`ValueStore`] used by tests and local development.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    credentials::SheetTarget,
    error::SheetsError,
    store::{AppendOutcome, Grid, ValueStore},
};

/// Keeps one grid per sheet name. `Attendance!A:H` and `Attendance!A1:B2` address
/// the same grid; the cell part of a range is ignored.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sheets: RwLock<HashMap<String, Grid>>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the sheet named by `range` with `rows`.
    pub fn with_rows(mut self, range: &str, rows: Grid) -> Self {
        self.sheets
            .get_mut()
            .insert(sheet_name(range).to_string(), rows);
        self
    }

    /// A store whose every call fails with `message`, as an unreachable upstream would.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of remote operations attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Current contents of the sheet named by `range`.
    pub async fn rows(&self, range: &str) -> Grid {
        self.sheets
            .read()
            .await
            .get(sheet_name(range))
            .cloned()
            .unwrap_or_default()
    }

    fn record_call(&self) -> Result<(), SheetsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(SheetsError::Api {
                status: 503,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ValueStore for MemoryStore {
    async fn get_values(&self, _target: &SheetTarget, range: &str) -> Result<Grid, SheetsError> {
        self.record_call()?;
        Ok(self.rows(range).await)
    }

    async fn append_values(
        &self,
        _target: &SheetTarget,
        range: &str,
        rows: Grid,
    ) -> Result<AppendOutcome, SheetsError> {
        self.record_call()?;

        let name = sheet_name(range);
        let mut sheets = self.sheets.write().await;
        let grid = sheets.entry(name.to_string()).or_default();

        let appended = rows.len();
        if appended == 0 {
            return Ok(AppendOutcome::default());
        }

        let first = grid.len() + 1;
        let last = grid.len() + appended;
        let width = rows.iter().map(Vec::len).max().unwrap_or(1).max(1);
        grid.extend(rows);

        Ok(AppendOutcome {
            updated_range: Some(format!(
                "{name}!A{first}:{}{last}",
                column_letters(width)
            )),
            updated_rows: appended as u64,
        })
    }
}

fn sheet_name(range: &str) -> &str {
    range.split_once('!').map(|(name, _)| name).unwrap_or(range)
}

/// 1-based column index to A1 letters: 1 → `A`, 8 → `H`, 27 → `AA`.
fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.push(b'A' + rem as u8);
        index = (index - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
