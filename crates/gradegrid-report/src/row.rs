//! Student row builder
//!
//! Produces one row of formatted cells per student, plus the derived
//! grade-status outcome. One missing assessment anywhere in the row
//! fails the whole row, regardless of the course total.

use gradegrid_core::StyleTag;

use crate::boundary::BoundaryTable;
use crate::format::{self, ABSENT};
use crate::model::StudentRecord;
use crate::plan::{ColumnKind, ColumnPlan, IdentityField};
use crate::source::GradebookStore;

/// Grade-status text for a row with at least one missing submission
pub const FAIL_NON_SUBMISSION: &str = "Fail (Non submission)";

/// One formatted cell of a student row
#[derive(Debug, Clone, PartialEq)]
pub struct RowCell {
    /// Display text (may be empty, e.g. feedback with no text)
    pub text: String,
    /// Semantic style of the cell
    pub style: StyleTag,
}

impl RowCell {
    fn normal<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            style: StyleTag::Normal,
        }
    }
}

/// A fully formatted student row
///
/// `cells` is indexed by grid column (one entry per plan column).
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    /// Formatted cells in column order
    pub cells: Vec<RowCell>,
    /// Course-total percentage, when computable
    pub final_percentage: Option<f64>,
    /// Whether any assessment sub-column rendered as absent
    pub non_submission: bool,
}

impl StudentRow {
    /// The resolved grade-status cell (always the last cell)
    pub fn status(&self) -> &RowCell {
        self.cells.last().expect("plan always has a status column")
    }
}

/// Build one student row against the shared plan
///
/// Grades are fetched once per (item, student) pair. The grade-status
/// outcome is resolved strictly in this order: non-submission fails the
/// row; otherwise a computable course-total percentage maps to a
/// letter; otherwise the placeholder.
pub fn build_row(
    student: &StudentRecord,
    plan: &ColumnPlan,
    store: &dyn GradebookStore,
    boundaries: &BoundaryTable,
) -> crate::error::Result<StudentRow> {
    let mut cells = Vec::with_capacity(plan.total_columns() as usize);
    let mut non_submission = false;
    let mut final_percentage = None;

    for group in plan.groups() {
        if group.is_status() {
            // Resolved below, once every grade group is formatted
            continue;
        }

        let grade = match &group.item {
            Some(item) => store.fetch_grade(item.id, student.id)?,
            None => None,
        };

        for &kind in &group.columns {
            let cell = match kind {
                ColumnKind::Identity(field) => RowCell::normal(match field {
                    IdentityField::StudentNumber => {
                        student.student_number.clone().unwrap_or_else(|| ABSENT.to_string())
                    }
                    IdentityField::FirstName => student.first_name.clone(),
                    IdentityField::Surname => student.last_name.clone(),
                }),
                ColumnKind::Display(display) => {
                    let item = group.item.as_ref().expect("display column without item");
                    let text = format::format_grade(grade.as_ref(), display, item, boundaries);
                    if group.is_assessment() && text == ABSENT {
                        non_submission = true;
                    }
                    RowCell::normal(text)
                }
                ColumnKind::Feedback => RowCell::normal(
                    grade
                        .as_ref()
                        .and_then(|g| g.feedback.clone())
                        .unwrap_or_default(),
                ),
                ColumnKind::GradeStatus => unreachable!("status group handled separately"),
            };
            cells.push(cell);
        }

        if group.is_course_total() {
            let item = group.item.as_ref().expect("course-total group has an item");
            final_percentage = grade
                .as_ref()
                .and_then(|g| g.score)
                .and_then(|score| format::percentage_of(score, item.max));
        }
    }

    let status = if non_submission {
        RowCell {
            text: FAIL_NON_SUBMISSION.to_string(),
            style: StyleTag::FlagFail,
        }
    } else if let Some(pct) = final_percentage {
        RowCell::normal(boundaries.letter_for(pct))
    } else {
        RowCell::normal(ABSENT)
    };
    cells.push(status);

    Ok(StudentRow {
        cells,
        final_percentage,
        non_submission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        DisplayType, DisplayTypeSet, GradeItem, GradeValue, ItemId, ItemKind, StudentId,
    };
    use crate::source::{DefaultLabels, MemoryGradebook};
    use pretty_assertions::assert_eq;

    fn assessment(id: u64, name: &str) -> GradeItem {
        GradeItem {
            id: ItemId(id),
            kind: ItemKind::Assessment,
            name: name.to_string(),
            weight: 50.0,
            max: 100.0,
        }
    }

    fn course_total() -> GradeItem {
        GradeItem {
            id: ItemId(99),
            kind: ItemKind::CourseTotal,
            name: "Course total".to_string(),
            weight: 0.0,
            max: 100.0,
        }
    }

    fn student() -> StudentRecord {
        StudentRecord {
            id: StudentId(1),
            student_number: Some("s123".to_string()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    fn boundaries() -> BoundaryTable {
        BoundaryTable::new([(85.0, "A"), (70.0, "B"), (0.0, "F")]).unwrap()
    }

    fn plan(
        items: &[GradeItem],
        total: Option<&GradeItem>,
        types: &[DisplayType],
        feedback: bool,
    ) -> ColumnPlan {
        ColumnPlan::build(
            items,
            total,
            &DisplayTypeSet::new(types).unwrap(),
            feedback,
            &DefaultLabels,
        )
        .unwrap()
    }

    fn texts(row: &StudentRow) -> Vec<&str> {
        row.cells.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_full_row() {
        let items = [assessment(1, "Quiz")];
        let total = course_total();
        let book = MemoryGradebook::new()
            .with_grade(ItemId(1), StudentId(1), GradeValue::score(85.0))
            .with_grade(ItemId(99), StudentId(1), GradeValue::score(85.0));
        let plan = plan(
            &items,
            Some(&total),
            &[DisplayType::Real, DisplayType::Percentage, DisplayType::Letter],
            false,
        );

        let row = build_row(&student(), &plan, &book, &boundaries()).unwrap();
        assert_eq!(
            texts(&row),
            vec![
                "s123", "Ada", "Lovelace", // identity
                "85.00", "85%", "A", // quiz
                "85.00", "85%", "A", // course total
                "A", // status
            ]
        );
        assert_eq!(row.final_percentage, Some(85.0));
        assert!(!row.non_submission);
    }

    #[test]
    fn test_missing_submission_marks_whole_row() {
        let items = [assessment(1, "Quiz"), assessment(2, "Essay")];
        let total = course_total();
        // Essay missing, but course total numeric and passing
        let book = MemoryGradebook::new()
            .with_grade(ItemId(1), StudentId(1), GradeValue::score(90.0))
            .with_grade(ItemId(99), StudentId(1), GradeValue::score(90.0));
        let plan = plan(&items, Some(&total), &[DisplayType::Real], false);

        let row = build_row(&student(), &plan, &book, &boundaries()).unwrap();
        assert!(row.non_submission);
        assert_eq!(row.status().text, FAIL_NON_SUBMISSION);
        assert_eq!(row.status().style, StyleTag::FlagFail);
        // The passing course total is still rendered in its own cells
        assert_eq!(texts(&row)[5], "90.00");
    }

    #[test]
    fn test_status_letter_from_course_total() {
        let items = [assessment(1, "Quiz")];
        let total = course_total();
        let book = MemoryGradebook::new()
            .with_grade(ItemId(1), StudentId(1), GradeValue::score(60.0))
            .with_grade(ItemId(99), StudentId(1), GradeValue::score(72.5));
        let plan = plan(&items, Some(&total), &[DisplayType::Real], false);

        let row = build_row(&student(), &plan, &book, &boundaries()).unwrap();
        assert_eq!(row.status().text, "B");
        assert_eq!(row.final_percentage, Some(72.5));
    }

    #[test]
    fn test_status_dash_without_course_total() {
        let items = [assessment(1, "Quiz")];
        let book =
            MemoryGradebook::new().with_grade(ItemId(1), StudentId(1), GradeValue::score(95.0));
        let plan = plan(&items, None, &[DisplayType::Real], false);

        let row = build_row(&student(), &plan, &book, &boundaries()).unwrap();
        assert_eq!(row.status().text, "-");
        assert_eq!(row.final_percentage, None);
    }

    #[test]
    fn test_feedback_cell() {
        let items = [assessment(1, "Quiz")];
        let book = MemoryGradebook::new().with_grade(
            ItemId(1),
            StudentId(1),
            GradeValue::score(80.0).with_feedback("Good work"),
        );
        let plan = plan(&items, None, &[DisplayType::Real], true);

        let row = build_row(&student(), &plan, &book, &boundaries()).unwrap();
        assert_eq!(texts(&row), vec!["s123", "Ada", "Lovelace", "80.00", "Good work", "-"]);
    }

    #[test]
    fn test_missing_feedback_never_fails_row() {
        let items = [assessment(1, "Quiz")];
        let total = course_total();
        let book = MemoryGradebook::new()
            .with_grade(ItemId(1), StudentId(1), GradeValue::score(88.0))
            .with_grade(ItemId(99), StudentId(1), GradeValue::score(88.0));
        let plan = plan(&items, Some(&total), &[DisplayType::Real], true);

        let row = build_row(&student(), &plan, &book, &boundaries()).unwrap();
        assert!(!row.non_submission);
        assert_eq!(row.status().text, "A");
    }

    #[test]
    fn test_recorded_zero_is_not_non_submission() {
        let items = [assessment(1, "Quiz")];
        let total = course_total();
        let book = MemoryGradebook::new()
            .with_grade(ItemId(1), StudentId(1), GradeValue::score(0.0))
            .with_grade(ItemId(99), StudentId(1), GradeValue::score(55.0));
        let plan = plan(&items, Some(&total), &[DisplayType::Real], false);

        let row = build_row(&student(), &plan, &book, &boundaries()).unwrap();
        assert!(!row.non_submission);
        assert_eq!(texts(&row)[3], "0.00");
        assert_eq!(row.status().text, "F");
    }

    #[test]
    fn test_missing_student_number_renders_dash() {
        let items = [assessment(1, "Quiz")];
        let book =
            MemoryGradebook::new().with_grade(ItemId(1), StudentId(1), GradeValue::score(50.0));
        let plan = plan(&items, None, &[DisplayType::Real], false);
        let mut anon = student();
        anon.student_number = None;

        let row = build_row(&anon, &plan, &book, &boundaries()).unwrap();
        assert_eq!(texts(&row)[0], "-");
    }
}
