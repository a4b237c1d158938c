//! Core traits for pointscene

use crate::{collection::PointCollection, point::Point, snapshot::PointSnapshot};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the axis-aligned bounding box as `(min, max)`, or `None` when
    /// there is nothing to draw
    fn bounding_box(&self) -> Option<(Point, Point)>;

    /// Get the center of the bounding box
    fn center(&self) -> Option<Point> {
        let (min, max) = self.bounding_box()?;
        Some(Point::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        ))
    }
}

impl Drawable for [Point] {
    fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.first()?;
        let mut min = first;
        let mut max = first;

        for p in &self[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }
}

impl Drawable for PointCollection {
    fn bounding_box(&self) -> Option<(Point, Point)> {
        self.as_slice().bounding_box()
    }
}

impl Drawable for PointSnapshot {
    fn bounding_box(&self) -> Option<(Point, Point)> {
        self.points().bounding_box()
    }
}
