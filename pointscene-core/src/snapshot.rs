//! Immutable, cheaply clonable views of a point collection

use crate::collection::PointCollection;
use crate::point::Point;
use std::ops::Deref;
use std::sync::Arc;

/// A frozen copy of a [`PointCollection`] at one moment in time.
///
/// Cloning shares the underlying buffer. Readers can hold a snapshot for as
/// long as they like; later edits produce a new snapshot instead of changing
/// this one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSnapshot {
    points: Arc<[Point]>,
}

impl PointSnapshot {
    pub fn new(collection: &PointCollection) -> Self {
        Self {
            points: Arc::from(collection.as_slice()),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Copy the points back into an owned, editable collection
    pub fn to_collection(&self) -> PointCollection {
        PointCollection::from_points(self.points.to_vec())
    }
}

impl Deref for PointSnapshot {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl AsRef<[Point]> for PointSnapshot {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl From<&PointCollection> for PointSnapshot {
    fn from(collection: &PointCollection) -> Self {
        Self::new(collection)
    }
}

impl From<Vec<Point>> for PointSnapshot {
    fn from(points: Vec<Point>) -> Self {
        Self {
            points: Arc::from(points),
        }
    }
}
