//! # U-Loading Grid
//!
//! Grid-based parcel placement for the U-Loading allocation engine.
//!
//! Parcels are textual bitmaps ([`Shape`]) loaded into fixed-size cell grids
//! ([`Container`], a "truck"). Placement is first-fit from the bottom-left
//! corner; the [`Loader`] distributes shapes over containers using one of
//! three strategies.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_loading_grid::{Allocator, Config, Loader, ShapeCatalog, Strategy};
//!
//! let catalog = ShapeCatalog::standard();
//! let shapes = catalog.lookup_all(["9", "6", "1", "1"]).unwrap();
//!
//! let config = Config::new()
//!     .with_strategy(Strategy::FirstFitDecreasing)
//!     .with_max_containers(2);
//!
//! let result = Loader::new(config).allocate(&shapes).unwrap();
//! assert_eq!(result.container_count(), 1);
//! print!("{}", u_loading_grid::render(&result));
//! ```
//!
//! ## Shape Text
//!
//! ```rust
//! use u_loading_grid::{parse_blocks, Error, Shape};
//!
//! // One block per parcel, blocks separated by blank lines.
//! let shapes = parse_blocks("1\n\n777\n7777\n").unwrap();
//! assert_eq!(shapes.len(), 2);
//!
//! // Cells above the bottom row need support.
//! let err = Shape::parse_validated("X X\nXXX").unwrap_err();
//! assert!(matches!(err, Error::FloatingSegment { row: 0, col: 2 }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON export/import in [`json`]

pub mod catalog;
pub mod container;
pub mod engine;
pub mod input;
#[cfg(feature = "serde")]
pub mod json;
pub mod loader;
pub mod placement;
pub mod render;
pub mod result;
pub mod shape;

// Re-exports
pub use catalog::ShapeCatalog;
pub use container::Container;
pub use engine::{can_place, find_first_fit, place, place_first_fit};
pub use input::{parse_blocks, parse_names};
#[cfg(feature = "serde")]
pub use json::{from_json, to_json, AllocationDocument};
pub use loader::{allocate, round_robin_targets, Loader};
pub use placement::PlacementRecord;
pub use render::{render, render_container};
pub use result::AllocationResult;
pub use shape::Shape;
pub use u_loading_core::{
    largest_first, AllocationSummary, Allocator, Config, Dimensions, Error, Footprint, Result,
    ShapeId, Strategy,
};
