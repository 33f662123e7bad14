//! # U-Loading Core
//!
//! Core traits and abstractions for the U-Loading parcel allocation engine.
//!
//! This crate provides the foundational types shared between the grid
//! placement engine and its front-ends.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Footprint`], [`Dimensions`]
//! - **Ordering**: [`largest_first`] - the comparator used by the multi-container strategies
//! - **Allocator trait**: [`Allocator`] - common interface for allocation engines
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Allocation Strategies
//!
//! | Strategy | Sorts input | Containers | Description |
//! |----------|-------------|------------|-------------|
//! | `OnePerContainer` | No | one per shape | Every shape in its own container |
//! | `FirstFitDecreasing` | Yes | on demand | First container that fits, largest first |
//! | `EvenRoundRobin` | Yes | fixed | Static round-robin over a fixed set |
//!
//! ## Configuration
//!
//! ```rust
//! use u_loading_core::{Config, Strategy};
//!
//! let config = Config::new()
//!     .with_strategy(Strategy::EvenRoundRobin)
//!     .with_max_containers(3)
//!     .with_dimensions(6, 6);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;
pub mod sort;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Dimensions, Footprint, ShapeId, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use result::AllocationSummary;
pub use solver::{Allocator, Config, Strategy};
pub use sort::{largest_first, largest_first_order};
