use async_trait::async_trait;

use crate::{credentials::SheetTarget, error::SheetsError};

/// A fetched or to-be-appended block of cells, row by row.
pub type Grid = Vec<Vec<String>>;

/// What the remote store reports back after an append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendOutcome {
    /// A1 range the rows landed in, e.g. `Attendance!A12:H14`. Opaque to callers.
    pub updated_range: Option<String>,
    pub updated_rows: u64,
}

/// Range-based access to the spreadsheet that backs the service.
///
/// Each method is one remote operation: reads authenticate with the read-only
/// scope, appends with the read-write scope. Appends never overwrite; the store
/// picks the insertion point after the last populated row.
#[async_trait]
pub trait ValueStore: Send + Sync {
    async fn get_values(&self, target: &SheetTarget, range: &str) -> Result<Grid, SheetsError>;

    async fn append_values(
        &self,
        target: &SheetTarget,
        range: &str,
        rows: Grid,
    ) -> Result<AppendOutcome, SheetsError>;
}
