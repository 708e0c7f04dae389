//! The report grid

use std::collections::BTreeMap;

use crate::cell::{Cell, CellValue};
use crate::error::{Error, Result};
use crate::style::StyleTag;

/// A merged region of adjacent columns in one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeRegion {
    /// Row index
    pub row: u32,
    /// First column (inclusive)
    pub first_col: u16,
    /// Last column (inclusive)
    pub last_col: u16,
}

impl MergeRegion {
    /// Whether this region shares any cell with `other`
    pub fn overlaps(&self, other: &MergeRegion) -> bool {
        self.row == other.row && self.first_col <= other.last_col && other.first_col <= self.last_col
    }
}

/// The assembled report grid
///
/// Cells are kept in insertion order; sizing hints are keyed maps with
/// deterministic iteration so that two builds from identical inputs
/// compare equal cell for cell.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    column_widths: BTreeMap<u16, f64>,
    row_heights: BTreeMap<u32, f64>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single-column cell
    pub fn push<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V, style: StyleTag) {
        self.cells.push(Cell::new(row, col, value, style));
    }

    /// Append a cell spanning `span` columns
    ///
    /// A span of 1 behaves exactly like [`Grid::push`]. A span of 0 is
    /// rejected, as is a span that overlaps an existing merged region.
    pub fn push_merged<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        span: u16,
        value: V,
        style: StyleTag,
    ) -> Result<()> {
        if span == 0 {
            return Err(Error::InvalidSpan(span));
        }
        let region = MergeRegion {
            row,
            first_col: col,
            last_col: col + span - 1,
        };
        if span > 1 {
            for existing in self.merge_regions() {
                if existing.overlaps(&region) {
                    return Err(Error::MergeConflict {
                        row,
                        first_col: region.first_col,
                        last_col: region.last_col,
                    });
                }
            }
        }
        let mut cell = Cell::new(row, col, value, style);
        cell.span = span;
        self.cells.push(cell);
        Ok(())
    }

    /// Set a column width hint
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Set a row height hint
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    /// All cells in insertion order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Merged regions derived from multi-column cells
    pub fn merge_regions(&self) -> Vec<MergeRegion> {
        self.cells
            .iter()
            .filter(|c| c.is_merged())
            .map(|c| MergeRegion {
                row: c.row,
                first_col: c.col,
                last_col: c.last_col(),
            })
            .collect()
    }

    /// Column width hints in column order
    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(&c, &w)| (c, w))
    }

    /// Row height hints in row order
    pub fn row_heights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.row_heights.iter().map(|(&r, &h)| (r, h))
    }

    /// Find a cell by position (first match in insertion order)
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    /// Grid extent as (rows, cols): one past the highest occupied index
    pub fn dimensions(&self) -> (u32, u16) {
        let rows = self.cells.iter().map(|c| c.row + 1).max().unwrap_or(0);
        let cols = self
            .cells
            .iter()
            .map(|c| c.last_col() + 1)
            .max()
            .unwrap_or(0);
        (rows, cols)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
