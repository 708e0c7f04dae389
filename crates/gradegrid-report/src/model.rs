//! Gradebook domain model
//!
//! Read-only snapshots fetched once per report generation. The
//! canonical records live in the external gradebook; everything here is
//! a per-invocation copy discarded after the grid is handed off.

use crate::error::{ReportError, Result};

/// Course identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(pub u64);

/// Group identifier (course subgroup)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

/// Grade item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

/// Student identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StudentId(pub u64);

/// What a grade item aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A single assessment (assignment, quiz, exam)
    Assessment,
    /// The aggregate of one category
    CategoryTotal,
    /// The course aggregate
    CourseTotal,
}

/// One gradebook item: an assessment, a category total, or the course
/// total
#[derive(Debug, Clone, PartialEq)]
pub struct GradeItem {
    /// Item identity
    pub id: ItemId,
    /// Aggregation kind
    pub kind: ItemKind,
    /// Item name (for category totals, the category name)
    pub name: String,
    /// Percentage contribution to the course total
    pub weight: f64,
    /// Maximum achievable value
    pub max: f64,
}

impl GradeItem {
    /// Column header label for this item
    ///
    /// Category totals display their category's name suffixed with
    /// " total" rather than the raw item name.
    pub fn display_name(&self) -> String {
        match self.kind {
            ItemKind::CategoryTotal => format!("{} total", self.name),
            _ => self.name.clone(),
        }
    }
}

/// One enrolled student
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// Student identity
    pub id: StudentId,
    /// Institutional student number; may be unset
    pub student_number: Option<String>,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

impl StudentRecord {
    /// Sort key: the student number, with absence sorting lowest
    pub fn sort_key(&self) -> &str {
        self.student_number.as_deref().unwrap_or("")
    }
}

/// Sort students ascending by student number
///
/// The sort is stable: students with equal (or missing) numbers keep
/// the enrolment provider's relative order.
pub fn sort_students(students: &mut [StudentRecord]) {
    students.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}

/// A recorded grade for one (student, item) pair
///
/// A `None` score means non-submission, which is a distinct state from
/// a recorded zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradeValue {
    /// Final numeric grade, if any submission was graded
    pub score: Option<f64>,
    /// Free-text feedback, if any
    pub feedback: Option<String>,
}

impl GradeValue {
    /// A graded score with no feedback
    pub fn score(value: f64) -> Self {
        Self {
            score: Some(value),
            feedback: None,
        }
    }

    /// Attach feedback text
    pub fn with_feedback<S: Into<String>>(mut self, feedback: S) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}

/// A requested representation of a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayType {
    /// Raw numeric score
    Real,
    /// Score as a percentage of the item maximum
    Percentage,
    /// Letter grade via the boundary table
    Letter,
}

/// Ordered, duplicate-free set of display types
///
/// Insertion order defines the sub-column order inside each item group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTypeSet {
    types: Vec<DisplayType>,
}

impl DisplayTypeSet {
    /// Build a set from the requested types, keeping first occurrences
    pub fn new(types: &[DisplayType]) -> Result<Self> {
        let mut unique = Vec::with_capacity(types.len());
        for &t in types {
            if !unique.contains(&t) {
                unique.push(t);
            }
        }
        if unique.is_empty() {
            return Err(ReportError::EmptyDisplayTypes);
        }
        Ok(Self { types: unique })
    }

    /// The types in sub-column order
    pub fn iter(&self) -> impl Iterator<Item = DisplayType> + '_ {
        self.types.iter().copied()
    }

    /// Number of types in the set
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: construction rejects empty sets
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether the set contains `display`
    pub fn contains(&self, display: DisplayType) -> bool {
        self.types.contains(&display)
    }
}

impl Default for DisplayTypeSet {
    /// Raw score only, matching the simplest export form
    fn default() -> Self {
        Self {
            types: vec![DisplayType::Real],
        }
    }
}

/// Course identity and metadata shown in the report header block
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInfo {
    /// Course identity
    pub id: CourseId,
    /// Short code (e.g. "COMP101")
    pub short_name: String,
    /// Full course name
    pub full_name: String,
    /// Delivery mode, if known
    pub delivery_mode: Option<String>,
    /// Campus, if known
    pub campus: Option<String>,
}
