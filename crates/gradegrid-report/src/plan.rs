//! Column plan
//!
//! Decides which columns the report has, how they group under merged
//! header bands, and what every header says. The plan is built once per
//! report and shared immutably by the row builder and the assembler.

use crate::error::{ReportError, Result};
use crate::model::{DisplayType, DisplayTypeSet, GradeItem, ItemKind};
use crate::source::{LabelKey, LabelProvider};

/// The three fixed leading columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    /// Institutional student number
    StudentNumber,
    /// Given name
    FirstName,
    /// Family name
    Surname,
}

impl IdentityField {
    fn label_key(self) -> LabelKey {
        match self {
            IdentityField::StudentNumber => LabelKey::StudentNumber,
            IdentityField::FirstName => LabelKey::FirstName,
            IdentityField::Surname => LabelKey::Surname,
        }
    }
}

/// What one output column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// One of the identity columns
    Identity(IdentityField),
    /// A formatted grade in one display type
    Display(DisplayType),
    /// Free-text feedback for the group's item
    Feedback,
    /// The derived pass/fail/letter outcome
    GradeStatus,
}

/// Adjacent columns sharing one merged header label
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGroup {
    /// The grade item this group renders; `None` for identity and
    /// status groups
    pub item: Option<GradeItem>,
    /// Header band label
    pub label: String,
    /// Sub-columns in output order
    pub columns: Vec<ColumnKind>,
    /// First grid column of this group (assigned during layout)
    pub first_col: u16,
}

impl ColumnGroup {
    /// Number of columns this group covers
    pub fn span(&self) -> u16 {
        self.columns.len() as u16
    }

    /// Whether this is one of the identity groups
    pub fn is_identity(&self) -> bool {
        matches!(self.columns.as_slice(), [ColumnKind::Identity(_)])
    }

    /// Whether this is the terminal grade-status group
    pub fn is_status(&self) -> bool {
        matches!(self.columns.as_slice(), [ColumnKind::GradeStatus])
    }

    /// Whether this group renders the course total
    pub fn is_course_total(&self) -> bool {
        matches!(
            &self.item,
            Some(item) if item.kind == ItemKind::CourseTotal
        )
    }

    /// Whether this group renders an assessment or category total
    pub fn is_assessment(&self) -> bool {
        self.item.is_some() && !self.is_course_total()
    }
}

/// The complete ordered column layout of one report
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPlan {
    groups: Vec<ColumnGroup>,
    total_columns: u16,
}

impl ColumnPlan {
    /// Build the plan for the selected items
    ///
    /// Layout: three identity columns, one group per selected
    /// assessment/category item (display-type columns in set order plus
    /// an optional trailing feedback column), the course-total group
    /// (display-type columns only), and the terminal grade-status
    /// column. Fails with [`ReportError::NoColumnsSelected`] when
    /// neither items nor a course total were selected.
    pub fn build(
        items: &[GradeItem],
        course_total: Option<&GradeItem>,
        display_types: &DisplayTypeSet,
        include_feedback: bool,
        labels: &dyn LabelProvider,
    ) -> Result<Self> {
        let selected: Vec<&GradeItem> = items
            .iter()
            .filter(|i| i.kind != ItemKind::CourseTotal)
            .collect();
        if selected.is_empty() && course_total.is_none() {
            return Err(ReportError::NoColumnsSelected);
        }

        let mut groups = Vec::with_capacity(selected.len() + 5);
        for field in [
            IdentityField::StudentNumber,
            IdentityField::FirstName,
            IdentityField::Surname,
        ] {
            groups.push(ColumnGroup {
                item: None,
                label: labels.label(field.label_key()),
                columns: vec![ColumnKind::Identity(field)],
                first_col: 0,
            });
        }

        for item in selected {
            let mut columns: Vec<ColumnKind> =
                display_types.iter().map(ColumnKind::Display).collect();
            if include_feedback {
                columns.push(ColumnKind::Feedback);
            }
            groups.push(ColumnGroup {
                item: Some(item.clone()),
                label: item.display_name(),
                columns,
                first_col: 0,
            });
        }

        if let Some(total) = course_total {
            // Feedback is per-assessment only
            groups.push(ColumnGroup {
                item: Some(total.clone()),
                label: labels.label(LabelKey::Total),
                columns: display_types.iter().map(ColumnKind::Display).collect(),
                first_col: 0,
            });
        }

        groups.push(ColumnGroup {
            item: None,
            label: labels.label(LabelKey::Grade),
            columns: vec![ColumnKind::GradeStatus],
            first_col: 0,
        });

        let mut next_col: u16 = 0;
        for group in &mut groups {
            group.first_col = next_col;
            next_col += group.span();
        }

        Ok(Self {
            groups,
            total_columns: next_col,
        })
    }

    /// All groups in column order
    pub fn groups(&self) -> &[ColumnGroup] {
        &self.groups
    }

    /// Total number of output columns
    pub fn total_columns(&self) -> u16 {
        self.total_columns
    }

    /// Groups bound to assessment or category items
    pub fn assessment_groups(&self) -> impl Iterator<Item = &ColumnGroup> {
        self.groups.iter().filter(|g| g.is_assessment())
    }

    /// The course-total group, if the course total was selected
    pub fn course_total_group(&self) -> Option<&ColumnGroup> {
        self.groups.iter().find(|g| g.is_course_total())
    }

    /// Grid column of the grade-status cell
    pub fn status_col(&self) -> u16 {
        self.total_columns - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, ItemKind};
    use crate::source::DefaultLabels;
    use pretty_assertions::assert_eq;

    fn item(id: u64, kind: ItemKind, name: &str) -> GradeItem {
        GradeItem {
            id: ItemId(id),
            kind,
            name: name.to_string(),
            weight: 25.0,
            max: 100.0,
        }
    }

    fn displays(types: &[DisplayType]) -> DisplayTypeSet {
        DisplayTypeSet::new(types).unwrap()
    }

    #[test]
    fn test_identity_columns_lead() {
        let items = [item(1, ItemKind::Assessment, "Quiz")];
        let plan = ColumnPlan::build(
            &items,
            None,
            &displays(&[DisplayType::Real]),
            false,
            &DefaultLabels,
        )
        .unwrap();

        let labels: Vec<_> = plan.groups().iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Student ID", "First name", "Surname", "Quiz", "Grade"]
        );
        assert_eq!(plan.total_columns(), 5);
        assert_eq!(plan.status_col(), 4);
    }

    #[test]
    fn test_display_type_order_and_feedback_placement() {
        let items = [item(1, ItemKind::Assessment, "Essay")];
        let total = item(9, ItemKind::CourseTotal, "Course total");
        let plan = ColumnPlan::build(
            &items,
            Some(&total),
            &displays(&[DisplayType::Percentage, DisplayType::Letter]),
            true,
            &DefaultLabels,
        )
        .unwrap();

        let essay = plan.assessment_groups().next().unwrap();
        assert_eq!(
            essay.columns,
            vec![
                ColumnKind::Display(DisplayType::Percentage),
                ColumnKind::Display(DisplayType::Letter),
                ColumnKind::Feedback,
            ]
        );
        assert_eq!(essay.first_col, 3);
        assert_eq!(essay.span(), 3);

        // Course total never carries feedback
        let total_group = plan.course_total_group().unwrap();
        assert_eq!(
            total_group.columns,
            vec![
                ColumnKind::Display(DisplayType::Percentage),
                ColumnKind::Display(DisplayType::Letter),
            ]
        );
        assert_eq!(total_group.first_col, 6);
        assert_eq!(plan.total_columns(), 9);
    }

    #[test]
    fn test_category_total_label() {
        let items = [item(2, ItemKind::CategoryTotal, "Essays")];
        let plan = ColumnPlan::build(
            &items,
            None,
            &displays(&[DisplayType::Real]),
            false,
            &DefaultLabels,
        )
        .unwrap();
        assert_eq!(plan.groups()[3].label, "Essays total");
    }

    #[test]
    fn test_no_columns_selected() {
        let err = ColumnPlan::build(
            &[],
            None,
            &displays(&[DisplayType::Real]),
            true,
            &DefaultLabels,
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::NoColumnsSelected));
    }

    #[test]
    fn test_course_total_alone_is_enough() {
        let total = item(9, ItemKind::CourseTotal, "Course total");
        let plan = ColumnPlan::build(
            &[],
            Some(&total),
            &displays(&[DisplayType::Real, DisplayType::Letter]),
            false,
            &DefaultLabels,
        )
        .unwrap();
        assert_eq!(plan.groups().len(), 5);
        assert!(plan.course_total_group().is_some());
    }

    #[test]
    fn test_stray_course_total_in_selection_is_ignored() {
        let items = [
            item(1, ItemKind::Assessment, "Quiz"),
            item(9, ItemKind::CourseTotal, "Course total"),
        ];
        let plan = ColumnPlan::build(
            &items,
            None,
            &displays(&[DisplayType::Real]),
            false,
            &DefaultLabels,
        )
        .unwrap();
        assert_eq!(plan.assessment_groups().count(), 1);
        assert!(plan.course_total_group().is_none());
    }
}
