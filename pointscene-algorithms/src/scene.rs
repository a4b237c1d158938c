//! Render input for a presentation layer
//!
//! A [`SceneModel`] is everything a renderer needs to draw one frame of the
//! editor: the points (with stable display keys), the centroid, the
//! connecting segments and the bounds for camera framing.

use crate::geometry::{compute_centroid, compute_line_segments};
use pointscene_core::{Drawable, LineSegment, Point};
use serde::Serialize;

/// A point as placed in the scene, tagged with its collection index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePoint {
    pub index: usize,
    pub position: Point,
    /// Display key, unique within a scene: `"{x}-{y}-{z}-{index}"`
    pub key: String,
}

impl ScenePoint {
    fn new(index: usize, position: Point) -> Self {
        let key = format!("{}-{}-{}-{}", position.x, position.y, position.z, index);
        Self { index, position, key }
    }
}

/// Derived, read-only description of the scene
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SceneModel {
    pub points: Vec<ScenePoint>,
    pub centroid: Option<Point>,
    pub segments: Vec<LineSegment>,
    pub bounds: Option<(Point, Point)>,
}

impl SceneModel {
    /// Derive the scene for `points` from scratch
    pub fn derive(points: &[Point]) -> Self {
        let centroid = compute_centroid(points);
        let segments = compute_line_segments(points, centroid);

        Self {
            points: points
                .iter()
                .enumerate()
                .map(|(index, p)| ScenePoint::new(index, *p))
                .collect(),
            centroid,
            segments,
            bounds: points.bounding_box(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene() {
        let scene = SceneModel::derive(&[]);
        assert!(scene.is_empty());
        assert_eq!(scene.centroid, None);
        assert!(scene.segments.is_empty());
        assert_eq!(scene.bounds, None);
    }

    #[test]
    fn test_scene_from_two_points() {
        let points = [Point::new(1.0, 1.0, 1.0), Point::new(3.0, 1.0, 1.0)];
        let scene = SceneModel::derive(&points);

        assert_eq!(scene.centroid, Some(Point::new(2.0, 1.0, 1.0)));
        assert_eq!(scene.segments.len(), 2);
        assert_eq!(scene.points[1].index, 1);
        assert_eq!(scene.points[1].key, "3-1-1-1");
        assert_eq!(
            scene.bounds,
            Some((Point::new(1.0, 1.0, 1.0), Point::new(3.0, 1.0, 1.0)))
        );
    }

    #[test]
    fn test_duplicate_points_get_distinct_keys() {
        let p = Point::new(0.5, 0.0, -2.0);
        let scene = SceneModel::derive(&[p, p]);
        assert_ne!(scene.points[0].key, scene.points[1].key);
    }
}
