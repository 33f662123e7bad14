//! Truck loading allocator.

use crate::container::Container;
use crate::engine::place_first_fit;
use crate::result::AllocationResult;
use crate::shape::Shape;
use u_loading_core::geometry::{Dimensions, Footprint};
use u_loading_core::solver::{Allocator, Config, Strategy};
use u_loading_core::sort::largest_first_order;
use u_loading_core::{Error, Result};

/// Allocates shapes into grid containers using the configured [`Strategy`].
///
/// A call either places every shape or fails; containers built before the
/// failure are dropped with the error.
#[derive(Debug, Clone)]
pub struct Loader {
    config: Config,
}

impl Loader {
    /// Creates a loader with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a loader with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every shape in its own container, first configured size.
    fn one_per_container(&self, shapes: &[Shape], order: &[usize]) -> Result<Vec<Container>> {
        if let Some(max) = self.config.max_containers {
            if let Some(&overflow) = order.get(max) {
                return Err(Error::InsufficientCapacity {
                    shape: shapes[overflow].id().clone(),
                    containers: max,
                });
            }
        }

        let dimensions = self.config.dimensions_for(0);
        let mut containers = Vec::with_capacity(order.len());

        for (index, shape) in order.iter().map(|&i| &shapes[i]).enumerate() {
            let mut container = Container::new(index, dimensions);
            if place_first_fit(&mut container, shape)?.is_none() {
                return Err(too_large(shape, dimensions));
            }
            containers.push(container);
        }

        Ok(containers)
    }

    /// Each shape goes into the first container with room, opening a new
    /// one while the budget allows.
    fn first_fit_decreasing(&self, shapes: &[Shape], order: &[usize]) -> Result<Vec<Container>> {
        let mut containers = vec![Container::new(0, self.config.dimensions_for(0))];

        for shape in order.iter().map(|&i| &shapes[i]) {

            let mut placed = false;
            for container in containers.iter_mut() {
                if place_first_fit(container, shape)?.is_some() {
                    placed = true;
                    break;
                }
            }
            if placed {
                continue;
            }

            if !self.config.can_open(containers.len()) {
                return Err(Error::InsufficientCapacity {
                    shape: shape.id().clone(),
                    containers: containers.len(),
                });
            }

            let next = containers.len();
            let dimensions = self.config.dimensions_for(next);
            log::debug!(
                "Opening container {} ({}) for '{}'",
                next,
                dimensions,
                shape.id()
            );

            let mut container = Container::new(next, dimensions);
            if place_first_fit(&mut container, shape)?.is_none() {
                return Err(too_large(shape, dimensions));
            }
            containers.push(container);
        }

        Ok(containers)
    }

    /// Shapes dealt round-robin over a fixed set of containers.
    /// An assigned shape that does not fit is fatal; nothing spills over.
    fn even_round_robin(&self, shapes: &[Shape], order: &[usize]) -> Result<Vec<Container>> {
        let count = match self.config.max_containers {
            Some(count) if count > 0 => count,
            _ => {
                return Err(Error::InvalidConfiguration(
                    "even-round-robin requires max_containers >= 1".into(),
                ))
            }
        };

        let mut containers: Vec<Container> = (0..count)
            .map(|i| Container::new(i, self.config.dimensions_for(i)))
            .collect();

        let targets = round_robin_targets(order.len(), count);
        let mut assigned: Vec<Vec<&Shape>> = vec![Vec::new(); count];
        for (&index, &target) in order.iter().zip(&targets) {
            assigned[target].push(&shapes[index]);
        }

        for (container, queue) in containers.iter_mut().zip(&assigned) {
            for shape in queue {
                if place_first_fit(container, shape)?.is_none() {
                    log::warn!(
                        "'{}' does not fit its assigned container {}",
                        shape.id(),
                        container.index()
                    );
                    return Err(Error::InsufficientCapacity {
                        shape: shape.id().clone(),
                        containers: count,
                    });
                }
            }
        }

        Ok(containers)
    }
}

impl Allocator for Loader {
    type Shape = Shape;
    type Output = AllocationResult;

    fn allocate(&self, shapes: &[Shape]) -> Result<AllocationResult> {
        self.config.validate()?;

        let strategy = self.config.strategy;
        log::debug!("Allocating {} shape(s) with {}", shapes.len(), strategy);

        let order: Vec<usize> = if strategy.sorts_input() {
            largest_first_order(shapes)
        } else {
            (0..shapes.len()).collect()
        };

        let containers = match strategy {
            Strategy::OnePerContainer => self.one_per_container(shapes, &order),
            Strategy::FirstFitDecreasing => self.first_fit_decreasing(shapes, &order),
            Strategy::EvenRoundRobin => self.even_round_robin(shapes, &order),
        }?;

        let result = AllocationResult::new(strategy, containers);
        let summary = result.summary();
        log::info!(
            "{}: {} shape(s) in {} container(s), utilization {}",
            strategy,
            summary.shapes_placed,
            summary.containers_used,
            summary.utilization_percent()
        );
        Ok(result)
    }
}

/// Allocates `shapes` with `config`.
pub fn allocate(shapes: &[Shape], config: &Config) -> Result<AllocationResult> {
    Loader::new(config.clone()).allocate(shapes)
}

/// Returns the container index for each sorted position under a static
/// round-robin over `containers` containers.
pub fn round_robin_targets(items: usize, containers: usize) -> Vec<usize> {
    if containers == 0 {
        return Vec::new();
    }
    (0..items).map(|position| position % containers).collect()
}

fn too_large(shape: &Shape, dimensions: Dimensions) -> Error {
    Error::ShapeTooLarge {
        shape: shape.id().clone(),
        width: shape.width(),
        height: shape.height(),
        container_width: dimensions.width,
        container_height: dimensions.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(text: &str, id: &str) -> Shape {
        Shape::parse(text).unwrap().with_id(id)
    }

    fn ids(container: &Container) -> Vec<&str> {
        container
            .placements()
            .iter()
            .map(|p| p.shape().id().as_str())
            .collect()
    }

    #[test]
    fn test_one_per_container_keeps_input_order() {
        let shapes = vec![shape("1", "a"), shape("999\n999\n999", "b"), shape("22", "c")];
        let loader = Loader::new(Config::new().with_strategy(Strategy::OnePerContainer));
        let result = loader.allocate(&shapes).unwrap();

        assert_eq!(result.container_count(), 3);
        for (i, container) in result.containers().iter().enumerate() {
            assert_eq!(container.index(), i);
            assert_eq!(container.placements().len(), 1);
            assert_eq!(container.placements()[0].position(), (0, 0));
        }
        assert_eq!(ids(&result.containers()[1]), vec!["b"]);
    }

    #[test]
    fn test_one_per_container_too_large() {
        let shapes = vec![shape("1234567", "wide")];
        let loader = Loader::new(Config::new().with_strategy(Strategy::OnePerContainer));
        let err = loader.allocate(&shapes).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeTooLarge {
                width: 7,
                container_width: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_one_per_container_respects_budget() {
        let shapes = vec![shape("1", "a"), shape("1", "b")];
        let loader = Loader::new(
            Config::new()
                .with_strategy(Strategy::OnePerContainer)
                .with_max_containers(1),
        );
        let err = loader.allocate(&shapes).unwrap_err();
        assert!(matches!(err, Error::InsufficientCapacity { containers: 1, .. }));
    }

    #[test]
    fn test_ffd_places_largest_first() {
        let shapes = vec![shape("1", "small"), shape("666\n666", "big")];
        let result = Loader::default_config().allocate(&shapes).unwrap();

        assert_eq!(result.container_count(), 1);
        assert_eq!(ids(&result.containers()[0]), vec!["big", "small"]);
        assert_eq!(result.find("big").unwrap().position(), (0, 0));
        assert_eq!(result.find("small").unwrap().position(), (3, 0));
    }

    #[test]
    fn test_ffd_opens_containers_on_demand() {
        let full = "666666\n666666\n666666\n666666\n666666\n666666";
        let shapes = vec![shape(full, "a"), shape(full, "b"), shape("1", "c")];
        let result = Loader::default_config().allocate(&shapes).unwrap();

        assert_eq!(result.container_count(), 3);
        assert_eq!(ids(&result.containers()[2]), vec!["c"]);
    }

    #[test]
    fn test_ffd_cycles_dimensions() {
        let config = Config::new().with_dimension_cycle(vec![
            Dimensions::new(2, 2),
            Dimensions::new(4, 1),
        ]);
        let shapes = vec![shape("88\n88", "a"), shape("4444", "b")];
        let result = Loader::new(config).allocate(&shapes).unwrap();

        assert_eq!(result.container_count(), 2);
        assert_eq!(result.containers()[1].dimensions(), Dimensions::new(4, 1));
    }

    #[test]
    fn test_ffd_too_large_for_new_container() {
        let shapes = vec![shape("1234567", "wide")];
        let err = Loader::default_config().allocate(&shapes).unwrap_err();
        assert!(matches!(err, Error::ShapeTooLarge { .. }));
    }

    #[test]
    fn test_ffd_empty_input_yields_one_container() {
        let result = Loader::default_config().allocate(&[]).unwrap();
        assert_eq!(result.container_count(), 1);
        assert_eq!(result.placed_count(), 0);
    }

    #[test]
    fn test_round_robin_targets() {
        assert_eq!(round_robin_targets(5, 2), vec![0, 1, 0, 1, 0]);
        assert_eq!(round_robin_targets(2, 3), vec![0, 1]);
        assert!(round_robin_targets(3, 0).is_empty());
    }

    #[test]
    fn test_round_robin_requires_budget() {
        let loader = Loader::new(Config::new().with_strategy(Strategy::EvenRoundRobin));
        let err = loader.allocate(&[shape("1", "a")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_round_robin_precreates_containers() {
        let loader = Loader::new(
            Config::new()
                .with_strategy(Strategy::EvenRoundRobin)
                .with_max_containers(3),
        );
        let result = loader.allocate(&[shape("1", "a")]).unwrap();
        assert_eq!(result.container_count(), 3);
        assert_eq!(result.summary().empty_containers, 2);
    }

    #[test]
    fn test_round_robin_does_not_spill_over() {
        // Sorted: big (container 0), big2 (container 1), tall (container 0).
        // tall no longer fits container 0 although the wider container 1 has room.
        let big = "88888\n88888\n88888\n88888\n88888";
        let shapes = vec![
            shape(big, "big"),
            shape("7\n7\n7\n7\n7", "tall"),
            shape("1", "small"),
            shape(big, "big2"),
        ];
        let config = Config::new()
            .with_strategy(Strategy::EvenRoundRobin)
            .with_max_containers(2)
            .with_dimension_cycle(vec![Dimensions::new(5, 5), Dimensions::new(10, 5)]);
        let err = Loader::new(config).allocate(&shapes).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientCapacity { ref shape, containers: 2 } if shape == "tall"
        ));
    }
}
