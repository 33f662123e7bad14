//! Truck containers.

use crate::placement::PlacementRecord;
use crate::render::render_container;
use std::fmt;
use u_loading_core::geometry::Dimensions;

/// A fixed-size cell grid that shapes are placed into.
///
/// Cells are stored row-major with row 0 at the bottom. A container is only
/// written by the placement engine; once an allocation call returns it is
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Position of this container in its allocation result.
    index: usize,

    /// Grid size.
    dimensions: Dimensions,

    /// Dense grid, `None` = empty.
    cells: Vec<Option<char>>,

    /// Placements in the order they were made.
    placements: Vec<PlacementRecord>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(index: usize, dimensions: Dimensions) -> Self {
        Self {
            index,
            dimensions,
            cells: vec![None; dimensions.area()],
            placements: Vec::new(),
        }
    }

    /// Returns the container index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the grid size.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Returns the symbol at (`x`, `y`), or `None` if empty or out of range.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.offset(x, y).and_then(|i| self.cells[i])
    }

    /// Returns true if (`x`, `y`) holds a symbol.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some()
    }

    /// Returns the placements made in this container.
    pub fn placements(&self) -> &[PlacementRecord] {
        &self.placements
    }

    /// Returns true if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the number of empty cells.
    pub fn free_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }

    /// Utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.filled_count() as f64 / self.cells.len() as f64
        }
    }

    /// Returns row `y` as a string, empty cells as spaces.
    pub fn row_text(&self, y: usize) -> String {
        (0..self.width())
            .map(|x| self.cell(x, y).unwrap_or(' '))
            .collect()
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width() && y < self.height() {
            Some(y * self.width() + x)
        } else {
            None
        }
    }

    /// Writes a symbol; the caller has already checked bounds and overlap.
    pub(crate) fn fill(&mut self, x: usize, y: usize, symbol: char) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = Some(symbol);
        }
    }

    pub(crate) fn push_record(&mut self, record: PlacementRecord) {
        self.placements.push(record);
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_container(self))
    }
}
