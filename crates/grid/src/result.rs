//! Allocation results.

use crate::container::Container;
use crate::placement::PlacementRecord;
use std::collections::BTreeMap;
use u_loading_core::geometry::{Footprint, ShapeId};
use u_loading_core::{AllocationSummary, Strategy};

/// Containers produced by one successful allocation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult {
    strategy: Strategy,
    containers: Vec<Container>,
}

impl AllocationResult {
    /// Wraps the containers built by `strategy`.
    pub fn new(strategy: Strategy, containers: Vec<Container>) -> Self {
        Self {
            strategy,
            containers,
        }
    }

    /// Returns the strategy that produced this result.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the containers in creation order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Consumes the result, returning its containers.
    pub fn into_containers(self) -> Vec<Container> {
        self.containers
    }

    /// Returns the number of containers.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Iterates every placement, container by container.
    pub fn placements(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.containers.iter().flat_map(|c| c.placements().iter())
    }

    /// Returns the number of placed shapes.
    pub fn placed_count(&self) -> usize {
        self.containers.iter().map(|c| c.placements().len()).sum()
    }

    /// Returns the placement of the first shape with the given id.
    pub fn find(&self, id: &str) -> Option<&PlacementRecord> {
        self.placements().find(|p| p.shape().id() == id)
    }

    /// Counts shapes per container, keyed by shape id.
    pub fn shape_counts(&self) -> Vec<BTreeMap<ShapeId, usize>> {
        self.containers
            .iter()
            .map(|container| {
                let mut counts = BTreeMap::new();
                for record in container.placements() {
                    *counts.entry(record.shape().id().clone()).or_insert(0) += 1;
                }
                counts
            })
            .collect()
    }

    /// Computes summary statistics.
    pub fn summary(&self) -> AllocationSummary {
        let mut summary = AllocationSummary::new(self.strategy);
        for container in &self.containers {
            summary.add_container(
                container.placements().len(),
                container.filled_count(),
                container.dimensions().area(),
            );
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::place;
    use crate::shape::Shape;
    use u_loading_core::geometry::Dimensions;

    fn sample() -> AllocationResult {
        let mut first = Container::new(0, Dimensions::default());
        let mut second = Container::new(1, Dimensions::default());
        let one = Shape::parse("1").unwrap().with_id("1");
        let two = Shape::parse("22").unwrap().with_id("2");
        place(&mut first, &one, 0, 0).unwrap();
        place(&mut first, &one, 1, 0).unwrap();
        place(&mut second, &two, 0, 0).unwrap();
        AllocationResult::new(Strategy::FirstFitDecreasing, vec![first, second])
    }

    #[test]
    fn test_counts_and_lookup() {
        let result = sample();
        assert_eq!(result.container_count(), 2);
        assert_eq!(result.placed_count(), 3);

        let counts = result.shape_counts();
        assert_eq!(counts[0].get("1"), Some(&2));
        assert_eq!(counts[1].get("2"), Some(&1));

        let record = result.find("2").unwrap();
        assert_eq!(record.container(), 1);
        assert!(result.find("9").is_none());
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.strategy, Strategy::FirstFitDecreasing);
        assert_eq!(summary.containers_used, 2);
        assert_eq!(summary.shapes_placed, 3);
        assert_eq!(summary.filled_cells, 4);
        assert_eq!(summary.total_cells, 72);
        assert_eq!(summary.empty_containers, 0);
    }
}
