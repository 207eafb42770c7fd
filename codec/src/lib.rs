//! # Codec Library
//!
//! Reshapes spreadsheet rows into keyed JSON records and back.
//!
//! The attendance and student sheets are plain two-dimensional grids of strings with
//! no schema beyond column position. This crate owns the positional contract so that
//! data written by earlier deployments keeps decoding the same way.
//!
//! ## Key Concepts
//! - **Row**: one spreadsheet row, cells addressed by index; cells past the populated
//!   length read as `""`.
//! - **AttendanceLog**: decoded attendance keyed by `studentId_date_period`, serialized
//!   in the suffix-flattened wire shape (`<key>_faculty`, `<key>_course`, ...).
//! - **Student**: a decoded roster row with `password`, `batch` and `year` defaulting.
//! - **AttendanceSubmission**: an incoming entry encoded into a row with a shared
//!   batch timestamp.
//! - **HeaderPolicy**: how the first row of a grid is treated.

pub mod attendance;
pub mod error;
pub mod grid;
pub mod header;
pub mod students;
pub mod submission;

pub use attendance::{AttendanceEntry, AttendanceLog, CompositeKey};
pub use error::CodecError;
pub use grid::Row;
pub use header::HeaderPolicy;
pub use students::{Student, decode_students};
pub use submission::{AttendanceSubmission, batch_timestamp, encode_batch, parse_batch};
