//! Bounds/overlap testing and bottom-left first-fit search.

use crate::container::Container;
use crate::placement::PlacementRecord;
use crate::shape::Shape;
use u_loading_core::geometry::Footprint;
use u_loading_core::{Error, Result};

/// Returns true if `shape` anchored at (`x`, `y`) stays inside `container`
/// and none of its filled cells lands on a filled container cell.
///
/// Empty cells of the shape never collide, so shapes may interlock.
pub fn can_place(container: &Container, shape: &Shape, x: usize, y: usize) -> bool {
    let fits_x = x
        .checked_add(shape.width())
        .map_or(false, |right| right <= container.width());
    let fits_y = y
        .checked_add(shape.height())
        .map_or(false, |top| top <= container.height());
    if !(fits_x && fits_y) {
        return false;
    }
    shape
        .cells()
        .all(|(dx, dy, _)| !container.is_occupied(x + dx, y + dy))
}

/// Places `shape` at (`x`, `y`) and records the placement.
///
/// Feasibility is checked before any cell is written, so a rejected call
/// leaves the container unchanged.
///
/// # Errors
/// [`Error::Internal`] if [`can_place`] does not hold.
pub fn place(container: &mut Container, shape: &Shape, x: usize, y: usize) -> Result<()> {
    if !can_place(container, shape, x, y) {
        return Err(Error::Internal(format!(
            "Shape '{}' cannot be placed at ({}, {}) in container {}",
            shape.id(),
            x,
            y,
            container.index()
        )));
    }

    for (dx, dy, symbol) in shape.cells() {
        container.fill(x + dx, y + dy, symbol);
    }
    let record = PlacementRecord::new(shape.clone(), container.index(), x, y);
    container.push_record(record);
    Ok(())
}

/// Finds the first anchor where `shape` fits, scanning rows bottom-up and
/// columns left to right.
pub fn find_first_fit(container: &Container, shape: &Shape) -> Option<(usize, usize)> {
    if !container.dimensions().fits(shape.width(), shape.height()) {
        return None;
    }

    let max_x = container.width() - shape.width();
    let max_y = container.height() - shape.height();
    (0..=max_y)
        .flat_map(|y| (0..=max_x).map(move |x| (x, y)))
        .find(|&(x, y)| can_place(container, shape, x, y))
}

/// Places `shape` at its first-fit anchor, returning the anchor used.
///
/// Returns `Ok(None)` if no anchor exists.
pub fn place_first_fit(container: &mut Container, shape: &Shape) -> Result<Option<(usize, usize)>> {
    match find_first_fit(container, shape) {
        Some((x, y)) => {
            place(container, shape, x, y)?;
            log::debug!(
                "Placed '{}' in container {} at ({}, {})",
                shape.id(),
                container.index(),
                x,
                y
            );
            Ok(Some((x, y)))
        }
        None => Ok(None),
    }
}
