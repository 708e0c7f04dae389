//! Cell value and cell types

use std::fmt;

use crate::style::StyleTag;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Numeric value
    Number(f64),

    /// String value
    String(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

/// A positioned, styled cell in the report grid
///
/// `span` is the number of columns the cell covers: 1 for an ordinary
/// cell, more for a merged header band. Spans never cross rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u16,
    /// Cell value
    pub value: CellValue,
    /// Semantic style tag
    pub style: StyleTag,
    /// Number of columns covered (>= 1)
    pub span: u16,
}

impl Cell {
    /// Create a single-column cell
    pub fn new<V: Into<CellValue>>(row: u32, col: u16, value: V, style: StyleTag) -> Self {
        Self {
            row,
            col,
            value: value.into(),
            style,
            span: 1,
        }
    }

    /// Last column covered by this cell (inclusive)
    pub fn last_col(&self) -> u16 {
        self.col + self.span - 1
    }

    /// Whether this cell is part of a merged region
    pub fn is_merged(&self) -> bool {
        self.span > 1
    }
}
