//! Allocation summary representation.

use crate::solver::Strategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary statistics for an allocation result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationSummary {
    /// Strategy that produced the result.
    pub strategy: Strategy,
    /// Number of containers in the result.
    pub containers_used: usize,
    /// Number of containers holding no shape at all.
    pub empty_containers: usize,
    /// Number of placed shapes.
    pub shapes_placed: usize,
    /// Number of filled cells across all containers.
    pub filled_cells: usize,
    /// Number of cells across all containers.
    pub total_cells: usize,
}

impl AllocationSummary {
    /// Creates an empty summary for the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            containers_used: 0,
            empty_containers: 0,
            shapes_placed: 0,
            filled_cells: 0,
            total_cells: 0,
        }
    }

    /// Adds one container's figures to the summary.
    pub fn add_container(&mut self, shapes: usize, filled: usize, cells: usize) {
        self.containers_used += 1;
        if shapes == 0 {
            self.empty_containers += 1;
        }
        self.shapes_placed += shapes;
        self.filled_cells += filled;
        self.total_cells += cells;
    }

    /// Utilization ratio (0.0 - 1.0), filled cells over total cells.
    pub fn utilization(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.filled_cells as f64 / self.total_cells as f64
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_new() {
        let summary = AllocationSummary::new(Strategy::FirstFitDecreasing);
        assert_eq!(summary.containers_used, 0);
        assert_eq!(summary.utilization(), 0.0);
    }

    #[test]
    fn test_summary_accumulates() {
        let mut summary = AllocationSummary::new(Strategy::EvenRoundRobin);
        summary.add_container(3, 9, 36);
        summary.add_container(0, 0, 36);

        assert_eq!(summary.containers_used, 2);
        assert_eq!(summary.empty_containers, 1);
        assert_eq!(summary.shapes_placed, 3);
        assert_relative_eq!(summary.utilization(), 0.125, epsilon = 1e-12);
        assert_eq!(summary.utilization_percent(), "12.5%");
    }
}
