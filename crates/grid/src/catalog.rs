//! Named shape catalog.

use crate::shape::Shape;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use u_loading_core::geometry::ShapeId;
use u_loading_core::{Error, Result};

/// Rows of the nine standard parcels, named `"1"` to `"9"`.
const STANDARD_SHAPES: [(&str, &[&str]); 9] = [
    ("1", &["1"]),
    ("2", &["22"]),
    ("3", &["333"]),
    ("4", &["4444"]),
    ("5", &["55555"]),
    ("6", &["666", "666"]),
    ("7", &["777", "7777"]),
    ("8", &["8888", "8888"]),
    ("9", &["999", "999", "999"]),
];

/// Name → shape lookup table.
///
/// Shapes added through [`ShapeCatalog::insert`] are parsed and
/// support-checked; [`ShapeCatalog::lookup`] returns them as-is.
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    shapes: BTreeMap<ShapeId, Shape>,
}

impl ShapeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the nine standard parcels.
    pub fn standard() -> Self {
        let shapes = STANDARD_SHAPES
            .iter()
            .map(|&(name, rows)| (name.to_string(), Shape::trusted(name, rows)))
            .collect();
        Self { shapes }
    }

    /// Parses, validates and stores `text` under `name`, replacing any
    /// previous entry.
    pub fn insert(&mut self, name: &str, text: &str) -> Result<&Shape> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidFormat("Shape name must not be empty".into()));
        }
        let shape = Shape::parse_validated(text)?.with_id(name);
        let slot = match self.shapes.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                log::warn!("Replacing catalog shape '{}'", name);
                entry.insert(shape);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(shape),
        };
        Ok(slot)
    }

    /// Removes and returns the shape stored under `name`.
    pub fn remove(&mut self, name: &str) -> Result<Shape> {
        self.shapes
            .remove(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Returns a copy of the shape stored under `name`.
    pub fn lookup(&self, name: &str) -> Result<Shape> {
        self.shapes
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Looks up every name; the first unknown name aborts the whole batch.
    pub fn lookup_all<I, S>(&self, names: I) -> Result<Vec<Shape>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.lookup(name.as_ref()))
            .collect()
    }

    /// Returns true if `name` is known.
    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Returns the names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    /// Iterates `(name, shape)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shape)> {
        self.shapes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_loading_core::geometry::Footprint;

    #[test]
    fn test_standard_catalog() {
        let catalog = ShapeCatalog::standard();
        assert_eq!(catalog.len(), 9);

        let nine = catalog.lookup("9").unwrap();
        assert_eq!(nine.id(), "9");
        assert_eq!((nine.width(), nine.height()), (3, 3));

        let seven = catalog.lookup("7").unwrap();
        assert_eq!((seven.width(), seven.height()), (4, 2));
        assert_eq!(seven.filled_count(), 7);
    }

    #[test]
    fn test_standard_shapes_are_supported() {
        for (_, shape) in ShapeCatalog::standard().iter() {
            assert!(shape.check_support().is_ok(), "{}", shape);
        }
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = ShapeCatalog::standard();
        assert!(matches!(catalog.lookup("10"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_lookup_all_aborts_on_unknown() {
        let catalog = ShapeCatalog::standard();
        let shapes = catalog.lookup_all(["1", "9", "1"]).unwrap();
        assert_eq!(shapes.len(), 3);

        let err = catalog.lookup_all(["1", "box", "9"]).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "box"));
    }

    #[test]
    fn test_insert_validates() {
        let mut catalog = ShapeCatalog::new();
        assert!(catalog.is_empty());

        let shape = catalog.insert("cup", "X X\nXXX");
        assert!(matches!(shape, Err(Error::FloatingSegment { .. })));

        let stairs = catalog.insert("stairs", "S\nSS").unwrap();
        assert_eq!(stairs.id(), "stairs");
        assert!(catalog.contains("stairs"));

        assert!(matches!(catalog.insert(" ", "X"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_remove() {
        let mut catalog = ShapeCatalog::standard();
        let removed = catalog.remove("5").unwrap();
        assert_eq!(removed.width(), 5);
        assert!(!catalog.contains("5"));
        assert!(matches!(catalog.remove("5"), Err(Error::NotFound(_))));
        assert_eq!(catalog.names().collect::<Vec<_>>().len(), 8);
    }
}
