//! Grid assembly
//!
//! Sequences the report blocks into one coordinate space: metadata,
//! notes (with optional boundary legend), the merged header band, the
//! sub-column label row, the student rows, and the optional trailing
//! weight row. Also owns the sizing hints and the notice short-circuit
//! grids.

use gradegrid_core::{Grid, StyleTag};

use crate::boundary::BoundaryTable;
use crate::error::Result;
use crate::format::{format_number, format_weight};
use crate::model::CourseInfo;
use crate::plan::{ColumnKind, ColumnPlan};
use crate::row::StudentRow;
use crate::source::{LabelKey, LabelProvider};

/// Worksheet title expected by the downstream template consumers
pub const SHEET_TITLE: &str = "Results template sample";

/// Width hint for the student-number column
const STUDENT_NUMBER_WIDTH: f64 = 14.0;
/// Width hint for every other column
const DATA_COLUMN_WIDTH: f64 = 13.0;
/// Characters per wrapped line assumed when sizing the header band
const HEADER_WRAP_CHARS: usize = 12;
/// Height of one wrapped header line, in points
const HEADER_LINE_HEIGHT: f64 = 15.0;
/// Grid column of the notes block (column D)
const NOTES_COL: u16 = 3;
/// Rows occupied by the metadata block
const METADATA_ROWS: u32 = 4;

/// Layout options for the assembled grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    /// Render the boundary legend under the notes block
    pub include_legend: bool,
    /// Render the trailing per-assessment weight row (earlier layout
    /// variant, off by default)
    pub include_weight_row: bool,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            include_legend: true,
            include_weight_row: false,
        }
    }
}

/// Course metadata block: label/value pairs in the first two columns
fn push_metadata(grid: &mut Grid, course: &CourseInfo, labels: &dyn LabelProvider) {
    let pairs = [
        (LabelKey::SubjectCode, course.short_name.clone()),
        (LabelKey::SubjectName, course.full_name.clone()),
        (
            LabelKey::DeliveryMode,
            course.delivery_mode.clone().unwrap_or_else(|| "---".to_string()),
        ),
        (
            LabelKey::Campus,
            course.campus.clone().unwrap_or_else(|| "---".to_string()),
        ),
    ];
    for (row, (key, value)) in pairs.into_iter().enumerate() {
        grid.push(row as u32, 0, labels.label(key), StyleTag::Normal);
        grid.push(row as u32, 1, value, StyleTag::Normal);
    }
}

/// Notes block beside the metadata, plus the optional boundary legend
/// below it; returns the first free row after the block
fn push_notes(
    grid: &mut Grid,
    boundaries: &BoundaryTable,
    labels: &dyn LabelProvider,
    layout: &ReportLayout,
) -> u32 {
    grid.push(0, NOTES_COL, labels.label(LabelKey::PleaseNote), StyleTag::Header);
    grid.push(1, NOTES_COL, labels.label(LabelKey::NoteDash), StyleTag::Note);
    grid.push(2, NOTES_COL, labels.label(LabelKey::NoteZero), StyleTag::Note);
    grid.push(3, NOTES_COL, labels.label(LabelKey::NoteRounding), StyleTag::NoteBold);

    let mut next_row = METADATA_ROWS;
    if layout.include_legend && !boundaries.is_empty() {
        for entry in boundaries.legend() {
            grid.push(
                next_row,
                NOTES_COL,
                format!("{} - {}", format_number(entry.lower), format_number(entry.upper)),
                StyleTag::Note,
            );
            grid.push(next_row, NOTES_COL + 1, entry.letter, StyleTag::Note);
            next_row += 1;
        }
    }
    next_row
}

/// Uniform column widths for the whole plan
fn push_column_widths(grid: &mut Grid, plan: &ColumnPlan) {
    grid.set_column_width(0, STUDENT_NUMBER_WIDTH);
    for col in 1..plan.total_columns() {
        grid.set_column_width(col, DATA_COLUMN_WIDTH);
    }
}

/// Header band height: longest label wrapped at a fixed
/// characters-per-line, rounded up to whole lines
fn band_height(plan: &ColumnPlan) -> f64 {
    let longest = plan
        .groups()
        .iter()
        .filter(|g| !g.is_identity())
        .map(|g| g.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);
    let lines = (longest + HEADER_WRAP_CHARS - 1) / HEADER_WRAP_CHARS;
    lines as f64 * HEADER_LINE_HEIGHT
}

/// Assemble the full report grid
///
/// `rows` must already be in final (sorted) student order; the
/// assembler adds no ordering of its own.
pub fn assemble(
    course: &CourseInfo,
    plan: &ColumnPlan,
    rows: &[StudentRow],
    boundaries: &BoundaryTable,
    labels: &dyn LabelProvider,
    layout: &ReportLayout,
) -> Result<Grid> {
    let mut grid = Grid::new();
    push_metadata(&mut grid, course, labels);
    let after_notes = push_notes(&mut grid, boundaries, labels, layout);

    // One blank spacer row between the reference block and the table
    let band_row = after_notes + 1;
    let label_row = band_row + 1;

    for group in plan.groups() {
        if group.is_identity() {
            // Identity labels live on the sub-column row
            continue;
        }
        let style = if group.is_course_total() {
            StyleTag::CourseTotalHeader
        } else if group.is_assessment() {
            StyleTag::AssessmentHeader
        } else {
            StyleTag::Header
        };
        grid.push_merged(band_row, group.first_col, group.span(), group.label.clone(), style)?;
    }
    grid.set_row_height(band_row, band_height(plan));

    for group in plan.groups() {
        for (offset, &kind) in group.columns.iter().enumerate() {
            let col = group.first_col + offset as u16;
            let (text, style) = match kind {
                ColumnKind::Identity(_) => (group.label.clone(), StyleTag::IdentityHeader),
                ColumnKind::Display(display) => {
                    (labels.label(LabelKey::DisplayType(display)), StyleTag::Header)
                }
                ColumnKind::Feedback => (labels.label(LabelKey::Feedback), StyleTag::Header),
                // The band already says "Grade"
                ColumnKind::GradeStatus => continue,
            };
            grid.push(label_row, col, text, style);
        }
    }

    let first_student_row = label_row + 1;
    for (offset, row) in rows.iter().enumerate() {
        let grid_row = first_student_row + offset as u32;
        for (col, cell) in row.cells.iter().enumerate() {
            if cell.text.is_empty() {
                continue;
            }
            grid.push(grid_row, col as u16, cell.text.clone(), cell.style);
        }
    }

    if layout.include_weight_row {
        let weight_row = first_student_row + rows.len() as u32;
        let mut total_weight = 0.0;
        for group in plan.assessment_groups() {
            let item = group.item.as_ref().expect("assessment group has an item");
            total_weight += item.weight;
            grid.push(weight_row, group.first_col, format_weight(item.weight), StyleTag::Weight);
        }
        let sum_col = plan
            .course_total_group()
            .map(|g| g.first_col)
            .unwrap_or_else(|| plan.status_col());
        grid.push(weight_row, sum_col, format_weight(total_weight), StyleTag::Weight);
    }

    push_column_widths(&mut grid, plan);
    Ok(grid)
}

/// A single-notice grid used when there is nothing to tabulate
///
/// The metadata block still renders so the file identifies its course;
/// the body is one emphasized message cell.
pub fn notice_grid(course: &CourseInfo, labels: &dyn LabelProvider, notice: LabelKey) -> Grid {
    let mut grid = Grid::new();
    push_metadata(&mut grid, course, labels);
    grid.push(METADATA_ROWS + 1, 0, labels.label(notice), StyleTag::NoteBold);
    grid.set_column_width(0, STUDENT_NUMBER_WIDTH);
    grid
}
