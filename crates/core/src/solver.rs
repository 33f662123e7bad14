//! Allocator trait and configuration.

use crate::geometry::{Dimensions, Footprint};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Allocation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Every shape gets its own fresh container, in input order.
    OnePerContainer,
    /// Largest-first, then first container that fits; opens containers on demand.
    #[default]
    FirstFitDecreasing,
    /// Largest-first, dealt round-robin across a fixed set of containers.
    EvenRoundRobin,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [
        Strategy::OnePerContainer,
        Strategy::FirstFitDecreasing,
        Strategy::EvenRoundRobin,
    ];

    /// Returns the wire name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnePerContainer => "one-per-container",
            Self::FirstFitDecreasing => "first-fit-decreasing",
            Self::EvenRoundRobin => "even-round-robin",
        }
    }

    /// Returns true if the strategy sorts its input largest-first.
    pub fn sorts_input(&self) -> bool {
        !matches!(self, Self::OnePerContainer)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "one-per-container" | "one" | "single" => Ok(Self::OnePerContainer),
            "first-fit-decreasing" | "ffd" | "dense" => Ok(Self::FirstFitDecreasing),
            "even-round-robin" | "round-robin" | "even" => Ok(Self::EvenRoundRobin),
            _ => Err(Error::InvalidConfiguration(format!(
                "Unknown strategy '{}'",
                s
            ))),
        }
    }
}

/// Allocation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Allocation strategy.
    pub strategy: Strategy,

    /// Maximum number of containers (`None` = unbounded).
    ///
    /// Mandatory for [`Strategy::EvenRoundRobin`].
    pub max_containers: Option<usize>,

    /// Container dimensions, cycled across newly created containers.
    pub dimensions: Vec<Dimensions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_containers: None,
            dimensions: vec![Dimensions::default()],
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allocation strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the container budget.
    pub fn with_max_containers(mut self, max: usize) -> Self {
        self.max_containers = Some(max);
        self
    }

    /// Uses a single container size for every container.
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.dimensions = vec![Dimensions::new(width, height)];
        self
    }

    /// Uses a list of container sizes, cycled in creation order.
    pub fn with_dimension_cycle(mut self, dimensions: Vec<Dimensions>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Returns the dimensions of the container created at `index`.
    pub fn dimensions_for(&self, index: usize) -> Dimensions {
        if self.dimensions.is_empty() {
            return Dimensions::default();
        }
        self.dimensions[index % self.dimensions.len()]
    }

    /// Returns true if another container may be opened when `open` already exist.
    pub fn can_open(&self, open: usize) -> bool {
        self.max_containers.map_or(true, |max| open < max)
    }

    /// Checks the configuration against the selected strategy.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.is_empty() {
            return Err(Error::InvalidConfiguration(
                "At least one container dimension is required".into(),
            ));
        }
        for dims in &self.dimensions {
            dims.validate()?;
        }

        match (self.strategy, self.max_containers) {
            (Strategy::EvenRoundRobin, None) => Err(Error::InvalidConfiguration(
                "even-round-robin requires max_containers".into(),
            )),
            (_, Some(0)) => Err(Error::InvalidConfiguration(format!(
                "{} requires max_containers >= 1",
                self.strategy
            ))),
            _ => Ok(()),
        }
    }
}

/// Trait for allocators that distribute shapes over containers.
pub trait Allocator {
    /// The shape type this allocator handles.
    type Shape: Footprint;
    /// The result produced by a successful call.
    type Output;

    /// Allocates every shape, or fails without a partial result.
    fn allocate(&self, shapes: &[Self::Shape]) -> Result<Self::Output>;
}
