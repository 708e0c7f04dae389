//! # gradegrid-core
//!
//! Abstract grid model for gradegrid report output.
//!
//! This crate provides the fundamental types a report builder emits:
//! - [`CellValue`] - Represents cell values (numbers, strings, empty)
//! - [`StyleTag`] - Semantic styling tags resolved by a serializer
//! - [`Cell`] and [`MergeRegion`] - Positioned cells and header merges
//! - [`Grid`] - The complete report grid with sizing hints
//! - [`GridSink`] - The seam to an external spreadsheet serializer
//!
//! The grid is deliberately free of any spreadsheet-library vocabulary:
//! a [`StyleTag`] names the *meaning* of a cell (header, note, failure
//! flag), and a downstream serializer maps tags to concrete fonts,
//! fills, and alignments.
//!
//! ## Example
//!
//! ```rust
//! use gradegrid_core::{Grid, StyleTag};
//!
//! let mut grid = Grid::new();
//! grid.push(0, 0, "Subject code", StyleTag::Normal);
//! grid.push(0, 1, "COMP101", StyleTag::Normal);
//! grid.push_merged(2, 0, 3, "Assignment 1", StyleTag::AssessmentHeader).unwrap();
//! grid.set_column_width(0, 14.0);
//!
//! assert_eq!(grid.merge_regions().len(), 1);
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod sink;
pub mod style;

// Re-exports for convenience
pub use cell::{Cell, CellValue};
pub use error::{Error, Result};
pub use grid::{Grid, MergeRegion};
pub use sink::{CaptureSink, GridSink};
pub use style::StyleTag;
