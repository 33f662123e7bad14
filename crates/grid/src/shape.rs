//! Parcel shapes.
//!
//! A shape is a textual bitmap: each line is a row (top row first), a space
//! is an empty cell and any other printable character is a filled cell
//! carrying that symbol.

use std::fmt;
use u_loading_core::geometry::{Footprint, ShapeId};
use u_loading_core::{Error, Result};

/// An immutable parcel shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Unique identifier.
    id: ShapeId,

    /// Rows from top to bottom, trailing spaces removed.
    rows: Vec<Vec<char>>,

    /// Widest row length.
    width: usize,

    /// Cached number of filled cells.
    filled: usize,
}

impl Shape {
    /// Parses raw shape text.
    ///
    /// The identifier defaults to the canonical text (rows joined by `\n`);
    /// use [`Shape::with_id`] to name it.
    ///
    /// # Errors
    /// [`Error::InvalidFormat`] if the text has no rows, a row is blank, or a
    /// row contains a non-printable character.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Err(Error::InvalidFormat("Shape has no rows".into()));
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let line = line.trim_end();
            if line.trim_start().is_empty() {
                return Err(Error::InvalidFormat(format!("Row {} is empty", index)));
            }
            if let Some(c) = line.chars().find(|&c| c != ' ' && (c.is_control() || c.is_whitespace())) {
                return Err(Error::InvalidFormat(format!(
                    "Row {} contains non-printable character {:?}",
                    index, c
                )));
            }
            rows.push(line.chars().collect::<Vec<char>>());
        }

        let shape = Self::from_char_rows(String::new(), rows);
        let id = shape.to_string();
        Ok(shape.with_id(id))
    }

    /// Parses raw shape text and checks structural support.
    ///
    /// This is the constructor for caller-supplied shapes.
    pub fn parse_validated(text: &str) -> Result<Self> {
        Self::parse(text)?.validate_support()
    }

    /// Builds a shape from rows that are known to be well formed.
    pub(crate) fn trusted(id: &str, rows: &[&str]) -> Self {
        let rows = rows.iter().map(|row| row.chars().collect()).collect();
        Self::from_char_rows(id.to_string(), rows)
    }

    fn from_char_rows(id: ShapeId, rows: Vec<Vec<char>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let filled = rows.iter().flatten().filter(|&&c| c != ' ').count();
        Self {
            id,
            rows,
            width,
            filled,
        }
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<ShapeId>) -> Self {
        self.id = id.into();
        self
    }

    /// Checks the structural support invariant, returning the shape on success.
    ///
    /// Rows are checked top to bottom. Every filled cell above the bottom row
    /// needs a filled cell directly beneath it, or filled neighbours on both
    /// sides. A row above the bottom must also be one contiguous run: a run
    /// that starts after an empty gap is a floating segment.
    ///
    /// # Errors
    /// [`Error::FloatingSegment`] with the first unsupported cell.
    pub fn validate_support(self) -> Result<Self> {
        self.check_support()?;
        Ok(self)
    }

    /// Non-consuming variant of [`Shape::validate_support`].
    pub fn check_support(&self) -> Result<()> {
        let height = self.height();
        for row in 0..height.saturating_sub(1) {
            let mut seen_fill = false;
            let mut seen_gap = false;

            for col in 0..self.width {
                if !self.is_filled(col, row) {
                    seen_gap |= seen_fill;
                    continue;
                }
                seen_fill = true;

                let below = self.is_filled(col, row + 1);
                let left = col > 0 && self.is_filled(col - 1, row);
                let right = self.is_filled(col + 1, row);

                if seen_gap || !(below || (left && right)) {
                    return Err(Error::FloatingSegment { row, col });
                }
            }
        }
        Ok(())
    }

    /// Returns the symbol at (`col`, `row`), row counted from the top.
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .filter(|&c| c != ' ')
    }

    /// Returns true if (`col`, `row`) is filled, row counted from the top.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.cell(col, row).is_some()
    }

    /// Iterates filled cells as `(dx, dy, symbol)` with `dy = 0` on the bottom row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let height = self.rows.len();
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &c)| c != ' ')
                .map(move |(col, &c)| (col, height - 1 - row, c))
        })
    }

    /// Returns the rows as strings, top row first.
    pub fn rows(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }
}

impl Footprint for Shape {
    fn id(&self) -> &ShapeId {
        &self.id
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn filled_count(&self) -> usize {
        self.filled
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangle() {
        let shape = Shape::parse("999\n999\n999").unwrap();
        assert_eq!(shape.width(), 3);
        assert_eq!(shape.height(), 3);
        assert_eq!(shape.filled_count(), 9);
        assert_eq!(shape.id(), "999\n999\n999");
    }

    #[test]
    fn test_width_is_widest_row() {
        let shape = Shape::parse("777\n7777").unwrap();
        assert_eq!(shape.width(), 4);
        assert_eq!(shape.height(), 2);

        let top_narrow = Shape::parse("X\nXXXXX").unwrap();
        assert_eq!(top_narrow.width(), 5);
    }

    #[test]
    fn test_parse_trims_trailing_space_and_crlf() {
        let shape = Shape::parse("55  \r\n55\r\n").unwrap();
        assert_eq!(shape.rows(), vec!["55".to_string(), "55".to_string()]);
        assert_eq!(shape.width(), 2);
    }

    #[test]
    fn test_leading_spaces_are_empty_cells() {
        let shape = Shape::parse(" X\nXXX").unwrap();
        assert_eq!(shape.width(), 3);
        assert!(!shape.is_filled(0, 0));
        assert!(shape.is_filled(1, 0));
        assert_eq!(shape.filled_count(), 4);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(Shape::parse(""), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_blank_row() {
        assert!(matches!(
            Shape::parse("XX\n   \nXX"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(Shape::parse("\nXX"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_control_characters() {
        assert!(matches!(Shape::parse("X\tX"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_cells_are_bottom_up() {
        let shape = Shape::parse("A\nBC").unwrap();
        let mut cells: Vec<_> = shape.cells().collect();
        cells.sort();
        assert_eq!(cells, vec![(0, 0, 'B'), (0, 1, 'A'), (1, 0, 'C')]);
    }

    #[test]
    fn test_support_accepts_stacked_rows() {
        assert!(Shape::parse_validated("666\n666").is_ok());
        assert!(Shape::parse_validated("777\n7777").is_ok());
        assert!(Shape::parse_validated("1").is_ok());
    }

    #[test]
    fn test_support_accepts_bridged_cell() {
        // Middle cell of the top row has nothing below but both neighbours.
        assert!(Shape::parse_validated("XXX\nX X").is_ok());
    }

    #[test]
    fn test_support_rejects_overhang() {
        let err = Shape::parse_validated("XXX\n X").unwrap_err();
        assert!(matches!(err, Error::FloatingSegment { row: 0, col: 0 }));

        let err = Shape::parse_validated("XX\nX").unwrap_err();
        assert!(matches!(err, Error::FloatingSegment { row: 0, col: 1 }));
    }

    #[test]
    fn test_support_rejects_split_upper_row() {
        let err = Shape::parse_validated("X X\nXXX").unwrap_err();
        assert!(matches!(err, Error::FloatingSegment { row: 0, col: 2 }));
    }

    #[test]
    fn test_support_rejects_second_tower_on_solid_base() {
        // Every top cell has a filled cell beneath it, but the upper row
        // splits into two runs and the second one counts as floating.
        let err = Shape::parse_validated("XX XX\nXXXXX").unwrap_err();
        assert!(matches!(err, Error::FloatingSegment { row: 0, col: 3 }));

        assert!(Shape::parse_validated("XX\nXXXXX").is_ok());
        assert!(Shape::parse_validated("   XX\nXXXXX").is_ok());
    }

    #[test]
    fn test_support_ignores_bottom_row_gaps() {
        assert!(Shape::parse_validated("X X").is_ok());
    }

    #[test]
    fn test_display_round_trips_text() {
        let text = " 8\n888";
        let shape = Shape::parse(text).unwrap();
        assert_eq!(shape.to_string(), text);
    }
}
