//! JSON export and import of allocation results.

use crate::container::Container;
use crate::engine::{can_place, place};
use crate::result::AllocationResult;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};
use u_loading_core::geometry::{Dimensions, Footprint};
use u_loading_core::{Error, Result, Strategy};

/// Serialized allocation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationDocument {
    /// Strategy that produced the result.
    #[serde(default)]
    pub strategy: Strategy,

    /// Containers in creation order.
    pub containers: Vec<ContainerDocument>,
}

/// Serialized container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerDocument {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Placements in the order they were made.
    #[serde(default)]
    pub placements: Vec<PlacementDocument>,
}

/// Serialized placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementDocument {
    /// Shape identifier.
    pub id: String,

    /// Shape rows, top row first.
    pub rows: Vec<String>,

    /// Anchor column.
    pub x: usize,

    /// Anchor row (0 = bottom).
    pub y: usize,
}

impl From<&AllocationResult> for AllocationDocument {
    fn from(result: &AllocationResult) -> Self {
        Self {
            strategy: result.strategy(),
            containers: result
                .containers()
                .iter()
                .map(|container| ContainerDocument {
                    width: container.width(),
                    height: container.height(),
                    placements: container
                        .placements()
                        .iter()
                        .map(|p| PlacementDocument {
                            id: p.shape().id().clone(),
                            rows: p.shape().rows(),
                            x: p.x(),
                            y: p.y(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl AllocationDocument {
    /// Rebuilds the allocation by replaying every placement.
    ///
    /// # Errors
    /// [`Error::InvalidFormat`] for bad dimensions, bad shape rows, or a
    /// placement that leaves its container or overlaps another one.
    pub fn into_result(self) -> Result<AllocationResult> {
        let mut containers = Vec::with_capacity(self.containers.len());

        for (index, doc) in self.containers.into_iter().enumerate() {
            let dimensions = Dimensions::new(doc.width, doc.height);
            dimensions
                .validate()
                .map_err(|e| Error::InvalidFormat(format!("Container {}: {}", index, e)))?;
            let mut container = Container::new(index, dimensions);

            for p in doc.placements {
                let shape = Shape::parse(&p.rows.join("\n"))?.with_id(p.id);
                if !can_place(&container, &shape, p.x, p.y) {
                    return Err(Error::InvalidFormat(format!(
                        "Shape '{}' at ({}, {}) does not fit container {}",
                        shape.id(),
                        p.x,
                        p.y,
                        index
                    )));
                }
                place(&mut container, &shape, p.x, p.y)?;
            }
            containers.push(container);
        }

        Ok(AllocationResult::new(self.strategy, containers))
    }
}

/// Serializes a result as pretty-printed JSON.
pub fn to_json(result: &AllocationResult) -> Result<String> {
    serde_json::to_string_pretty(&AllocationDocument::from(result))
        .map_err(|e| Error::ParseError(e.to_string()))
}

/// Parses a JSON document produced by [`to_json`].
pub fn from_json(json: &str) -> Result<AllocationResult> {
    let doc: AllocationDocument =
        serde_json::from_str(json).map_err(|e| Error::ParseError(e.to_string()))?;
    doc.into_result()
}
