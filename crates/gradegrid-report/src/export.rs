//! Export entry point
//!
//! Ties the collaborators together: fetch and filter items, fetch and
//! sort students, resolve the boundary table, build the plan and rows,
//! assemble the grid, and hand exactly one grid to the sink on every
//! exit path.

use gradegrid_core::{Grid, GridSink};

use crate::assemble::{self, ReportLayout};
use crate::boundary::BoundaryTable;
use crate::error::{ReportError, Result};
use crate::model::{
    CourseInfo, DisplayTypeSet, GradeItem, GroupId, ItemId, StudentRecord, sort_students,
};
use crate::plan::ColumnPlan;
use crate::row::{self, StudentRow};
use crate::source::{
    BoundaryProvider, BoundaryScope, EnrolmentProvider, GradebookStore, LabelKey, LabelProvider,
};

/// Pass-through configuration from the invocation layer
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Selected item ids; empty selects every assessment/category item
    pub item_ids: Vec<ItemId>,
    /// Requested grade representations, in sub-column order
    pub display_types: DisplayTypeSet,
    /// Append a feedback column to each assessment group
    pub include_feedback: bool,
    /// Restrict to active enrolments
    pub only_active: bool,
    /// Restrict to one course group
    pub group: Option<GroupId>,
    /// Grid layout options
    pub layout: ReportLayout,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            item_ids: Vec::new(),
            display_types: DisplayTypeSet::default(),
            include_feedback: false,
            only_active: false,
            group: None,
            layout: ReportLayout::default(),
        }
    }
}

/// Resolve the boundary table: course scope, then system scope, then
/// the built-in default
fn resolve_boundaries(
    provider: &dyn BoundaryProvider,
    course: &CourseInfo,
) -> Result<BoundaryTable> {
    if let Some(table) = provider.fetch_letter_boundaries(BoundaryScope::Course(course.id))? {
        return Ok(table);
    }
    if let Some(table) = provider.fetch_letter_boundaries(BoundaryScope::System)? {
        return Ok(table);
    }
    Ok(BoundaryTable::default())
}

/// Selected items in gradebook order
fn selected_items(store: &dyn GradebookStore, course: &CourseInfo, ids: &[ItemId]) -> Result<Vec<GradeItem>> {
    let mut items = store.fetch_items(course.id)?;
    if !ids.is_empty() {
        items.retain(|item| ids.contains(&item.id));
    }
    Ok(items)
}

/// Students in report order, or [`ReportError::NoStudentsFound`]
fn sorted_students(
    enrolment: &dyn EnrolmentProvider,
    course: &CourseInfo,
    options: &ExportOptions,
) -> Result<Vec<StudentRecord>> {
    let mut students = enrolment.fetch_students(course.id, options.group, options.only_active)?;
    if students.is_empty() {
        return Err(ReportError::NoStudentsFound);
    }
    sort_students(&mut students);
    Ok(students)
}

/// Build the report grid for a course
///
/// Empty selections and empty enrolments come back as single-notice
/// grids, never as errors; everything else propagates.
pub fn build_report(
    course: &CourseInfo,
    store: &dyn GradebookStore,
    enrolment: &dyn EnrolmentProvider,
    boundaries: &dyn BoundaryProvider,
    labels: &dyn LabelProvider,
    options: &ExportOptions,
) -> Result<Grid> {
    log::debug!("building grade report for course {}", course.short_name);

    let table = resolve_boundaries(boundaries, course)?;
    let items = selected_items(store, course, &options.item_ids)?;
    let course_total = store.fetch_course_total_item(course.id)?;

    let plan = match ColumnPlan::build(
        &items,
        course_total.as_ref(),
        &options.display_types,
        options.include_feedback,
        labels,
    ) {
        Ok(plan) => plan,
        Err(ReportError::NoColumnsSelected) => {
            log::debug!("no grade items selected, emitting notice grid");
            return Ok(assemble::notice_grid(course, labels, LabelKey::NoItemsNotice));
        }
        Err(err) => return Err(err),
    };

    let students = match sorted_students(enrolment, course, options) {
        Ok(students) => students,
        Err(ReportError::NoStudentsFound) => {
            log::debug!("no students found, emitting notice grid");
            return Ok(assemble::notice_grid(course, labels, LabelKey::NoStudentsNotice));
        }
        Err(err) => return Err(err),
    };

    let rows: Vec<StudentRow> = students
        .iter()
        .map(|student| row::build_row(student, &plan, store, &table))
        .collect::<Result<_>>()?;

    assemble::assemble(course, &plan, &rows, &table, labels, &options.layout)
}

/// Build the report grid and hand it to the serializer sink
///
/// The sink receives exactly one grid whether or not the report body
/// could be tabulated.
pub fn export_course(
    course: &CourseInfo,
    store: &dyn GradebookStore,
    enrolment: &dyn EnrolmentProvider,
    boundaries: &dyn BoundaryProvider,
    labels: &dyn LabelProvider,
    options: &ExportOptions,
    sink: &mut dyn GridSink,
) -> Result<()> {
    let grid = build_report(course, store, enrolment, boundaries, labels, options)?;
    sink.write(&grid)?;
    Ok(())
}

/// Suggested download filename for a course's report
///
/// The short name is sanitized for filesystem and header safety: runs
/// of anything outside `[A-Za-z0-9._-]` collapse to one underscore.
pub fn suggested_filename(short_name: &str) -> String {
    let mut sanitized = String::with_capacity(short_name.len());
    let mut last_was_replacement = false;
    for c in short_name.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            sanitized.push(c);
            last_was_replacement = false;
        } else if !last_was_replacement {
            sanitized.push('_');
            last_was_replacement = true;
        }
    }
    let trimmed = sanitized.trim_matches('_');
    if trimmed.is_empty() {
        "grades-course.xlsx".to_string()
    } else {
        format!("grades-{trimmed}.xlsx")
    }
}
