//! Error types for the stat engine

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that abort an engine operation.
///
/// Per-record problems (unmappable players, missing box-score lines, data
/// gaps) are never errors; those records are skipped with a diagnostic and
/// the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Week token was not a base-10 integer in [1, 18]
    #[error("invalid week: {0:?}")]
    InvalidWeek(String),
}
