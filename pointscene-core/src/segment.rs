//! Line segments drawn between derived and user-placed points

use crate::point::{Point, Point3d};
use nalgebra::distance;
use serde::{Deserialize, Serialize};

/// A straight segment from `start` to `end`.
///
/// In a scene the start is always the centroid and the end one of the points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        let start: Point3d = self.start.into();
        let end: Point3d = self.end.into();
        distance(&start, &end)
    }

    /// Endpoints as a flat `[sx, sy, sz, ex, ey, ez]` array, the layout line
    /// vertex buffers expect
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.start.x,
            self.start.y,
            self.start.z,
            self.end.x,
            self.end.y,
            self.end.z,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_length() {
        let segment = LineSegment::new(Point::origin(), Point::new(3.0, 4.0, 0.0));
        assert_relative_eq!(segment.length(), 5.0);
    }

    #[test]
    fn test_segment_array_layout() {
        let segment = LineSegment::new(Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0));
        assert_eq!(segment.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
