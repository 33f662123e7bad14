//! Largest-dimension-first ordering.

use crate::geometry::Footprint;
use std::cmp::Ordering;

/// Compares two footprints so that taller ones come first, then wider ones.
///
/// Footprints with equal height and width compare equal, so a stable sort
/// keeps their input order.
pub fn largest_first<F: Footprint + ?Sized>(a: &F, b: &F) -> Ordering {
    b.height()
        .cmp(&a.height())
        .then_with(|| b.width().cmp(&a.width()))
}

/// Returns the indices of `items` in [`largest_first`] order.
///
/// The sort is stable, so equal footprints keep their input order.
pub fn largest_first_order<F: Footprint>(items: &[F]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| largest_first(&items[a], &items[b]));
    order
}
