//! # Sheets
//!
//! Remote access to the spreadsheet that stores attendance and the student roster.
//!
//! Every operation authenticates as a Google service account, performs exactly one
//! range read or range append against the Sheets v4 values API, and returns the raw
//! cell grid. Nothing is cached between calls.
//!
//! - [`credentials`]: the service-account pair, target spreadsheet and OAuth scopes.
//! - [`auth`]: the signed RS256 assertion exchanged for an access token.
//! - [`store`]: the [`ValueStore`] seam the HTTP layer talks to.
//! - [`client`]: the Google implementation over `reqwest`.
//! - [`memory`]: an in-process implementation for tests and local runs.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod memory;
pub mod store;

pub use client::GoogleSheets;
pub use credentials::{Scope, ServiceAccount, SheetTarget};
pub use error::SheetsError;
pub use memory::MemoryStore;
pub use store::{AppendOutcome, Grid, ValueStore};
