//! Ordered point collection

use crate::point::{Point, PointPatch};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered list of points.
///
/// Insertion order is the display order. Indices are always dense
/// (`0..len`): removing a point shifts every later point down by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCollection {
    points: Vec<Point>,
}

impl PointCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a collection from a vector of points
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point at the end
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the point at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Replace the point at `index` with `patch` merged over it.
    ///
    /// Returns `false` and leaves the collection untouched when `index` is
    /// out of range.
    pub fn update(&mut self, index: usize, patch: &PointPatch) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = patch.apply(slot);
                true
            }
            None => false,
        }
    }

    /// Remove the point at `index`, shifting later points down.
    ///
    /// Returns `None` and leaves the collection untouched when `index` is
    /// out of range.
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl Index<usize> for PointCollection {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl AsRef<[Point]> for PointCollection {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl IntoIterator for PointCollection {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointCollection {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point> for PointCollection {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point> for PointCollection {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}
