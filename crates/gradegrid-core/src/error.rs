//! Error types for gradegrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gradegrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// Merge span must cover at least one column
    #[error("Invalid merge span: {0}")]
    InvalidSpan(u16),

    /// Merged region overlaps an existing one
    #[error("Merge at row {row} columns {first_col}..={last_col} overlaps an existing region")]
    MergeConflict {
        /// Row of the conflicting merge
        row: u32,
        /// First column of the conflicting merge
        first_col: u16,
        /// Last column of the conflicting merge
        last_col: u16,
    },
}
