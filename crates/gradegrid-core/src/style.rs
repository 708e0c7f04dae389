//! Semantic cell style tags
//!
//! The report builder never talks about fonts or fills. Each cell
//! carries a [`StyleTag`] naming what the cell *is*; the external
//! serializer owns the mapping from tag to concrete visual attributes
//! (bold orange header fill, italic note, red failure flag, and so on).

/// Semantic style of a cell, resolved to visual attributes at
/// serialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleTag {
    /// Plain data cell
    #[default]
    Normal,
    /// Generic header cell (sub-column labels, status header)
    Header,
    /// Header over the three identity columns
    IdentityHeader,
    /// Merged header band over an assessment or category group
    AssessmentHeader,
    /// Merged header band over the course-total group
    CourseTotalHeader,
    /// Weight-row cell (centered percentage)
    Weight,
    /// Explanatory note text
    Note,
    /// Emphasized note text (also used for notice rows)
    NoteBold,
    /// Failure marker (non-submission outcome)
    FlagFail,
}

impl StyleTag {
    /// Whether this tag marks one of the header rows
    pub fn is_header(self) -> bool {
        matches!(
            self,
            StyleTag::Header
                | StyleTag::IdentityHeader
                | StyleTag::AssessmentHeader
                | StyleTag::CourseTotalHeader
        )
    }
}
