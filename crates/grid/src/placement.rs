//! Placement records.

use crate::shape::Shape;
use u_loading_core::geometry::Footprint;

/// A shape placed in a container at an anchor coordinate.
///
/// The anchor is the bottom-left corner of the shape's bounding box;
/// `y = 0` is the container's bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRecord {
    shape: Shape,
    container: usize,
    x: usize,
    y: usize,
}

impl PlacementRecord {
    pub(crate) fn new(shape: Shape, container: usize, x: usize, y: usize) -> Self {
        Self {
            shape,
            container,
            x,
            y,
        }
    }

    /// Returns the placed shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the index of the container holding the shape.
    pub fn container(&self) -> usize {
        self.container
    }

    /// Returns the anchor column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Returns the anchor row (0 = bottom).
    pub fn y(&self) -> usize {
        self.y
    }

    /// Returns the anchor as `(x, y)`.
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Iterates the container cells covered by the shape as `(x, y, symbol)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy, c)| (self.x + dx, self.y + dy, c))
    }

    /// Returns the exclusive upper corner of the bounding box.
    pub fn max_corner(&self) -> (usize, usize) {
        (self.x + self.shape.width(), self.y + self.shape.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied_cells_are_offset() {
        let shape = Shape::parse("A\nBB").unwrap();
        let record = PlacementRecord::new(shape, 0, 2, 3);

        let mut cells: Vec<_> = record.occupied_cells().collect();
        cells.sort();
        assert_eq!(cells, vec![(2, 3, 'B'), (2, 4, 'A'), (3, 3, 'B')]);
        assert_eq!(record.max_corner(), (4, 5));
        assert_eq!(record.position(), (2, 3));
    }
}
