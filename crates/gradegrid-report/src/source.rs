//! Collaborator interfaces
//!
//! The report builder owns no persistence and no localization. It
//! consumes four narrow traits: the gradebook store, the enrolment
//! provider, the letter-boundary provider, and the label provider.
//! [`MemoryGradebook`] is a snapshot-backed implementation of the first
//! three, used by tests and usable as an adapter for pre-fetched data.

use ahash::AHashMap;

use crate::boundary::BoundaryTable;
use crate::error::Result;
use crate::model::{
    CourseId, DisplayType, GradeItem, GradeValue, GroupId, ItemId, ItemKind, StudentId,
    StudentRecord,
};

/// Gradebook record access
pub trait GradebookStore {
    /// All non-course-total grade items of a course, in gradebook order
    fn fetch_items(&self, course: CourseId) -> Result<Vec<GradeItem>>;

    /// The recorded grade for one (item, student) pair, if any
    fn fetch_grade(&self, item: ItemId, student: StudentId) -> Result<Option<GradeValue>>;

    /// The course-total item, if the course has one
    fn fetch_course_total_item(&self, course: CourseId) -> Result<Option<GradeItem>>;
}

/// Enrolment access
pub trait EnrolmentProvider {
    /// Students of a course, optionally restricted to one group and to
    /// active enrolments
    fn fetch_students(
        &self,
        course: CourseId,
        group: Option<GroupId>,
        active_only: bool,
    ) -> Result<Vec<StudentRecord>>;
}

/// Scope of a letter-boundary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryScope {
    /// Boundaries configured for one course
    Course(CourseId),
    /// Site-wide boundaries
    System,
}

/// Letter-boundary configuration access
///
/// The course-then-system fallback is performed by the export entry
/// point, not inside implementations.
pub trait BoundaryProvider {
    /// Boundaries configured at `scope`, if any
    fn fetch_letter_boundaries(&self, scope: BoundaryScope) -> Result<Option<BoundaryTable>>;
}

/// Keys for human-readable strings (localization seam)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    /// Identity column: student number
    StudentNumber,
    /// Identity column: given name
    FirstName,
    /// Identity column: family name
    Surname,
    /// Sub-column label for one display type
    DisplayType(DisplayType),
    /// Feedback sub-column label
    Feedback,
    /// Course-total band label
    Total,
    /// Grade-status column label
    Grade,
    /// Metadata label: course short code
    SubjectCode,
    /// Metadata label: course full name
    SubjectName,
    /// Metadata label: delivery mode
    DeliveryMode,
    /// Metadata label: campus
    Campus,
    /// Notes block heading
    PleaseNote,
    /// Note explaining the dash placeholder
    NoteDash,
    /// Note explaining recorded zeros
    NoteZero,
    /// Note on course-total rounding
    NoteRounding,
    /// Notice shown when no students are enrolled
    NoStudentsNotice,
    /// Notice shown when no grade items were selected
    NoItemsNotice,
}

/// Human-readable label access
pub trait LabelProvider {
    /// The display string for `key`
    fn label(&self, key: LabelKey) -> String;
}

/// Built-in English labels
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl LabelProvider for DefaultLabels {
    fn label(&self, key: LabelKey) -> String {
        match key {
            LabelKey::StudentNumber => "Student ID",
            LabelKey::FirstName => "First name",
            LabelKey::Surname => "Surname",
            LabelKey::DisplayType(DisplayType::Real) => "Real",
            LabelKey::DisplayType(DisplayType::Percentage) => "Percentage",
            LabelKey::DisplayType(DisplayType::Letter) => "Letter",
            LabelKey::Feedback => "Feedback",
            LabelKey::Total => "Total",
            LabelKey::Grade => "Grade",
            LabelKey::SubjectCode => "Subject code",
            LabelKey::SubjectName => "Subject name",
            LabelKey::DeliveryMode => "Delivery mode",
            LabelKey::Campus => "Campus",
            LabelKey::PleaseNote => "Please note:",
            LabelKey::NoteDash => {
                "A dash (-) signifies a student that they did not submit the assessment \
                 and automatically fail the subject."
            }
            LabelKey::NoteZero => {
                "A zero (0) signifies a student has submitted an assessment but it was \
                 beyond the 2 week late assessment submission. They are still eligible \
                 to pass the subject if their overall total is greater than 50%."
            }
            LabelKey::NoteRounding => "All course totals are rounded to the whole number.",
            LabelKey::NoStudentsNotice => {
                "No students are enrolled in this course or no grades available."
            }
            LabelKey::NoItemsNotice => "No grade items selected for export.",
        }
        .to_string()
    }
}

/// In-memory gradebook snapshot
///
/// Backs the collaborator traits with plain maps. Students are kept in
/// insertion order, which stands in for the enrolment provider's
/// output order.
#[derive(Debug, Default)]
pub struct MemoryGradebook {
    items: Vec<GradeItem>,
    course_total: Option<GradeItem>,
    grades: AHashMap<(ItemId, StudentId), GradeValue>,
    students: Vec<EnrolledStudent>,
    boundaries: AHashMap<BoundaryScope, BoundaryTable>,
}

#[derive(Debug, Clone)]
struct EnrolledStudent {
    record: StudentRecord,
    active: bool,
    group: Option<GroupId>,
}

impl MemoryGradebook {
    /// Create an empty gradebook
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a grade item (course totals are routed to the course-total
    /// slot)
    pub fn with_item(mut self, item: GradeItem) -> Self {
        if item.kind == ItemKind::CourseTotal {
            self.course_total = Some(item);
        } else {
            self.items.push(item);
        }
        self
    }

    /// Add an active, ungrouped student
    pub fn with_student(self, record: StudentRecord) -> Self {
        self.with_enrolment(record, true, None)
    }

    /// Add a student with explicit enrolment state
    pub fn with_enrolment(
        mut self,
        record: StudentRecord,
        active: bool,
        group: Option<GroupId>,
    ) -> Self {
        self.students.push(EnrolledStudent {
            record,
            active,
            group,
        });
        self
    }

    /// Record a grade
    pub fn with_grade(mut self, item: ItemId, student: StudentId, grade: GradeValue) -> Self {
        self.grades.insert((item, student), grade);
        self
    }

    /// Configure letter boundaries at a scope
    pub fn with_boundaries(mut self, scope: BoundaryScope, table: BoundaryTable) -> Self {
        self.boundaries.insert(scope, table);
        self
    }
}

impl GradebookStore for MemoryGradebook {
    fn fetch_items(&self, _course: CourseId) -> Result<Vec<GradeItem>> {
        Ok(self.items.clone())
    }

    fn fetch_grade(&self, item: ItemId, student: StudentId) -> Result<Option<GradeValue>> {
        Ok(self.grades.get(&(item, student)).cloned())
    }

    fn fetch_course_total_item(&self, _course: CourseId) -> Result<Option<GradeItem>> {
        Ok(self.course_total.clone())
    }
}

impl EnrolmentProvider for MemoryGradebook {
    fn fetch_students(
        &self,
        _course: CourseId,
        group: Option<GroupId>,
        active_only: bool,
    ) -> Result<Vec<StudentRecord>> {
        Ok(self
            .students
            .iter()
            .filter(|s| !active_only || s.active)
            .filter(|s| group.is_none() || s.group == group)
            .map(|s| s.record.clone())
            .collect())
    }
}

impl BoundaryProvider for MemoryGradebook {
    fn fetch_letter_boundaries(&self, scope: BoundaryScope) -> Result<Option<BoundaryTable>> {
        Ok(self.boundaries.get(&scope).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student(id: u64, active: bool, group: Option<u64>) -> (StudentRecord, bool, Option<GroupId>) {
        (
            StudentRecord {
                id: StudentId(id),
                student_number: Some(format!("s{id}")),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
            },
            active,
            group.map(GroupId),
        )
    }

    #[test]
    fn test_enrolment_filters() {
        let mut book = MemoryGradebook::new();
        for (record, active, group) in [
            student(1, true, None),
            student(2, false, None),
            student(3, true, Some(7)),
        ] {
            book = book.with_enrolment(record, active, group);
        }

        let course = CourseId(1);
        let all = book.fetch_students(course, None, false).unwrap();
        assert_eq!(all.len(), 3);

        let active = book.fetch_students(course, None, true).unwrap();
        assert_eq!(active.len(), 2);

        let grouped = book.fetch_students(course, Some(GroupId(7)), true).unwrap();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].id, StudentId(3));
    }

    #[test]
    fn test_course_total_routing() {
        let book = MemoryGradebook::new()
            .with_item(GradeItem {
                id: ItemId(1),
                kind: ItemKind::Assessment,
                name: "Quiz".to_string(),
                weight: 100.0,
                max: 10.0,
            })
            .with_item(GradeItem {
                id: ItemId(2),
                kind: ItemKind::CourseTotal,
                name: "Course total".to_string(),
                weight: 0.0,
                max: 100.0,
            });

        let course = CourseId(1);
        assert_eq!(book.fetch_items(course).unwrap().len(), 1);
        assert_eq!(
            book.fetch_course_total_item(course).unwrap().unwrap().id,
            ItemId(2)
        );
    }

    #[test]
    fn test_boundary_scopes() {
        let course = CourseId(9);
        let book = MemoryGradebook::new().with_boundaries(
            BoundaryScope::Course(course),
            BoundaryTable::new([(50.0, "P"), (0.0, "F")]).unwrap(),
        );

        assert!(book
            .fetch_letter_boundaries(BoundaryScope::Course(course))
            .unwrap()
            .is_some());
        assert!(book
            .fetch_letter_boundaries(BoundaryScope::System)
            .unwrap()
            .is_none());
    }
}
