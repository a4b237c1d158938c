//! Centroid and centroid-to-point segments
//!
//! Everything here is a pure function of the point list. Callers recompute
//! after every change; nothing is cached between calls.

use pointscene_core::{LineSegment, Point, PointCollection, PointSnapshot, Vector3d};

/// Minimum number of points for the centroid to be defined
pub const MIN_CENTROID_POINTS: usize = 2;

/// Compute the per-axis arithmetic mean of `points`.
///
/// Returns `None` for fewer than [`MIN_CENTROID_POINTS`] points. Summation
/// runs in collection order in `f64`.
///
/// # Example
/// ```rust
/// use pointscene_core::Point;
/// use pointscene_algorithms::compute_centroid;
///
/// let points = [Point::new(1.0, 0.0, 0.0), Point::new(3.0, 0.0, 0.0)];
/// assert_eq!(compute_centroid(&points), Some(Point::new(2.0, 0.0, 0.0)));
/// assert_eq!(compute_centroid(&points[..1]), None);
/// ```
pub fn compute_centroid(points: &[Point]) -> Option<Point> {
    if points.len() < MIN_CENTROID_POINTS {
        return None;
    }

    let sum = points
        .iter()
        .fold(Vector3d::zeros(), |acc, p| acc + p.coords());

    Some(Point::from(sum / points.len() as f64))
}

/// Build one segment from `centroid` to each point, in collection order.
///
/// Returns an empty list when `centroid` is `None`.
pub fn compute_line_segments(points: &[Point], centroid: Option<Point>) -> Vec<LineSegment> {
    match centroid {
        Some(center) => points
            .iter()
            .map(|p| LineSegment::new(center, *p))
            .collect(),
        None => Vec::new(),
    }
}

/// Extension trait adding derived geometry to point containers
pub trait CentroidGeometry {
    /// See [`compute_centroid`]
    fn centroid(&self) -> Option<Point>;

    /// Segments from the centroid to every point; see [`compute_line_segments`]
    fn line_segments(&self) -> Vec<LineSegment>;
}

impl CentroidGeometry for [Point] {
    fn centroid(&self) -> Option<Point> {
        compute_centroid(self)
    }

    fn line_segments(&self) -> Vec<LineSegment> {
        compute_line_segments(self, compute_centroid(self))
    }
}

impl CentroidGeometry for PointCollection {
    fn centroid(&self) -> Option<Point> {
        self.as_slice().centroid()
    }

    fn line_segments(&self) -> Vec<LineSegment> {
        self.as_slice().line_segments()
    }
}

impl CentroidGeometry for PointSnapshot {
    fn centroid(&self) -> Option<Point> {
        self.points().centroid()
    }

    fn line_segments(&self) -> Vec<LineSegment> {
        self.points().line_segments()
    }
}
