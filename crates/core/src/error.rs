//! Error types shared by all U-Loading crates.

use thiserror::Error;

/// Errors raised while building shapes or allocating them into containers.
///
/// Every error is fatal for the operation that produced it. An allocation
/// call that fails never returns a partially filled result.
#[derive(Debug, Error)]
pub enum Error {
    /// Shape text (or an imported document) is malformed.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A filled cell above the bottom row has no support.
    #[error("Floating segment at row {row}, column {col}")]
    FloatingSegment {
        /// Row index, counted from the top of the textual definition.
        row: usize,
        /// Column index, counted from the left.
        col: usize,
    },

    /// A shape does not fit even an empty container.
    #[error(
        "Shape '{shape}' ({width}x{height}) does not fit an empty {container_width}x{container_height} container"
    )]
    ShapeTooLarge {
        /// Identifier of the offending shape.
        shape: String,
        /// Shape width.
        width: usize,
        /// Shape height.
        height: usize,
        /// Width of the container that was tried.
        container_width: usize,
        /// Height of the container that was tried.
        container_height: usize,
    },

    /// The container budget ran out before every shape was placed.
    #[error("Insufficient capacity: shape '{shape}' could not be placed in {containers} container(s)")]
    InsufficientCapacity {
        /// Identifier of the first shape that could not be placed.
        shape: String,
        /// Number of containers available when placement failed.
        containers: usize,
    },

    /// The allocation configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A named shape has no catalog entry.
    #[error("Shape not found: {0}")]
    NotFound(String),

    /// Structured input (JSON) could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Internal invariant violated.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true if the error was raised while validating input,
    /// before any allocation work started.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_)
                | Self::FloatingSegment { .. }
                | Self::NotFound(_)
                | Self::ParseError(_)
                | Self::InvalidConfiguration(_)
        )
    }
}

/// Result alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;
