//! Core geometry traits and types.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a shape.
pub type ShapeId = String;

/// Default container width (cells).
pub const DEFAULT_WIDTH: usize = 6;

/// Default container height (cells).
pub const DEFAULT_HEIGHT: usize = 6;

/// Trait for anything with a rectangular cell footprint.
pub trait Footprint {
    /// Returns the identifier of this footprint.
    fn id(&self) -> &ShapeId;

    /// Returns the bounding-box width in cells.
    fn width(&self) -> usize;

    /// Returns the bounding-box height in cells.
    fn height(&self) -> usize;

    /// Returns the number of filled cells.
    fn filled_count(&self) -> usize;

    /// Returns the bounding-box area in cells.
    fn area(&self) -> usize {
        self.width() * self.height()
    }
}

/// Width and height of a container, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Dimensions {
    /// Creates new dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns the number of cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if a `width` x `height` box fits inside.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        width <= self.width && height <= self.height
    }

    /// Validates that both sides are non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "Container dimensions must be positive, got {}",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = Error;

    /// Parses `WxH` (also accepts `X` and `×` as separator).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidConfiguration(format!("Invalid dimensions '{}'", s));
        let (w, h) = s
            .trim()
            .split_once(|c: char| matches!(c, 'x' | 'X' | '×'))
            .ok_or_else(invalid)?;
        let width = w.trim().parse::<usize>().map_err(|_| invalid())?;
        let height = h.trim().parse::<usize>().map_err(|_| invalid())?;
        let dims = Self::new(width, height);
        dims.validate()?;
        Ok(dims)
    }
}
