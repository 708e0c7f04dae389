//! # gradegrid-report
//!
//! Builds a formatted tabular grade report for a course: per-student
//! rows, per-assessment column groups with configurable sub-columns
//! (raw score, percentage, letter grade, feedback), course totals, and
//! a derived pass/fail letter outcome. The output is an abstract
//! [`gradegrid_core::Grid`] of semantically styled cells; a separate
//! serializer turns that into a concrete spreadsheet file.
//!
//! Persistence, enrolment checks, and localization stay behind the
//! collaborator traits in [`source`]; the builder itself is a single
//! synchronous pass with no shared mutable state.
//!
//! ## Example
//!
//! ```rust
//! use gradegrid_core::CaptureSink;
//! use gradegrid_report::{
//!     export_course, CourseId, CourseInfo, DefaultLabels, DisplayType, DisplayTypeSet,
//!     ExportOptions, GradeItem, GradeValue, ItemId, ItemKind, MemoryGradebook, StudentId,
//!     StudentRecord,
//! };
//!
//! let course = CourseInfo {
//!     id: CourseId(1),
//!     short_name: "COMP101".into(),
//!     full_name: "Intro to Computing".into(),
//!     delivery_mode: None,
//!     campus: None,
//! };
//! let book = MemoryGradebook::new()
//!     .with_item(GradeItem {
//!         id: ItemId(1),
//!         kind: ItemKind::Assessment,
//!         name: "Assignment 1".into(),
//!         weight: 100.0,
//!         max: 100.0,
//!     })
//!     .with_student(StudentRecord {
//!         id: StudentId(1),
//!         student_number: Some("s100".into()),
//!         first_name: "Ada".into(),
//!         last_name: "Lovelace".into(),
//!     })
//!     .with_grade(ItemId(1), StudentId(1), GradeValue::score(85.0));
//!
//! let options = ExportOptions {
//!     display_types: DisplayTypeSet::new(&[DisplayType::Real, DisplayType::Letter]).unwrap(),
//!     ..ExportOptions::default()
//! };
//! let mut sink = CaptureSink::new();
//! export_course(&course, &book, &book, &book, &DefaultLabels, &options, &mut sink).unwrap();
//! assert_eq!(sink.grids().len(), 1);
//! ```

pub mod assemble;
pub mod boundary;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod plan;
pub mod row;
pub mod source;

// Re-exports for convenience
pub use assemble::{ReportLayout, SHEET_TITLE};
pub use boundary::{Boundary, BoundaryTable, LegendEntry, NO_LETTER};
pub use error::{ReportError, Result};
pub use export::{build_report, export_course, suggested_filename, ExportOptions};
pub use format::{format_grade, format_weight, ABSENT};
pub use model::{
    CourseId, CourseInfo, DisplayType, DisplayTypeSet, GradeItem, GradeValue, GroupId, ItemId,
    ItemKind, StudentId, StudentRecord,
};
pub use plan::{ColumnGroup, ColumnKind, ColumnPlan, IdentityField};
pub use row::{build_row, RowCell, StudentRow, FAIL_NON_SUBMISSION};
pub use source::{
    BoundaryProvider, BoundaryScope, DefaultLabels, EnrolmentProvider, GradebookStore, LabelKey,
    LabelProvider, MemoryGradebook,
};
