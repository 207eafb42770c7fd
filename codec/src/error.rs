use thiserror::Error;

/// Failures raised while interpreting caller input.
///
/// Decoding rows from the sheet never fails; malformed rows are skipped instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The `records` field of a save request is missing or is not an array.
    #[error("Invalid records data")]
    NotAnArray,

    /// An element of the `records` array could not be read as a submission.
    #[error("Invalid record at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Unknown header policy `{0}` (expected `always` or `detect`)")]
    UnknownHeaderPolicy(String),
}
