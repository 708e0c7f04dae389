//! Grid sink trait
//!
//! The seam between the report builder and the concrete spreadsheet
//! serializer. The builder promises exactly one [`GridSink::write`] per
//! export invocation, on every exit path, so a serializer can treat the
//! call as "open sink, write whole grid, close sink".

use std::io;

use crate::grid::Grid;

/// Receiver for a fully assembled grid
pub trait GridSink {
    /// Consume the complete grid
    fn write(&mut self, grid: &Grid) -> io::Result<()>;
}

/// Sink that keeps the grids it receives, for tests and snapshotting
#[derive(Debug, Default)]
pub struct CaptureSink {
    grids: Vec<Grid>,
}

impl CaptureSink {
    /// Create an empty capture sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Grids received so far, in order
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// The single captured grid, if exactly one write happened
    pub fn into_grid(mut self) -> Option<Grid> {
        if self.grids.len() == 1 {
            self.grids.pop()
        } else {
            None
        }
    }
}

impl GridSink for CaptureSink {
    fn write(&mut self, grid: &Grid) -> io::Result<()> {
        self.grids.push(grid.clone());
        Ok(())
    }
}
