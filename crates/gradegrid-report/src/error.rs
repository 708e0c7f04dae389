//! Error types for gradegrid-report

use thiserror::Error;

/// Result type alias using [`ReportError`]
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while building a grade report
///
/// `NoColumnsSelected` and `NoStudentsFound` never escape
/// [`crate::export::build_report`]: the assembler recovers them into a
/// single-notice grid. The remaining variants are hard failures.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No assessment, category or course-total items were selected
    #[error("no grade items selected for export")]
    NoColumnsSelected,

    /// The enrolment provider returned no students
    #[error("no students found for the course")]
    NoStudentsFound,

    /// A display type set must contain at least one entry
    #[error("display type set is empty")]
    EmptyDisplayTypes,

    /// Letter boundaries must be strictly decreasing and finite
    #[error(
        "malformed boundary table at entry {index}: bound {bound} is not strictly below {previous}"
    )]
    MalformedBoundaryTable {
        /// Index of the offending entry
        index: usize,
        /// The offending lower bound
        bound: f64,
        /// The preceding lower bound
        previous: f64,
    },

    /// A collaborator (gradebook store, enrolment, boundaries) failed
    #[error("source error: {0}")]
    Source(String),

    /// Grid construction failed
    #[error(transparent)]
    Grid(#[from] gradegrid_core::Error),

    /// Writing to the grid sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Create a [`ReportError::Source`] from any collaborator failure
    pub fn source<S: Into<String>>(msg: S) -> Self {
        ReportError::Source(msg.into())
    }
}
