//! Point types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A user-placed point in the scene.
///
/// Points are plain values: editing one produces a new `Point` that replaces
/// the old one at its index in a [`PointCollection`](crate::PointCollection).
/// The serialized form is the flat `{"x": .., "y": .., "z": ..}` record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin `(0, 0, 0)`
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Read one coordinate
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Return a copy with one coordinate replaced
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    /// Position vector from the origin
    pub fn coords(&self) -> Vector3d {
        Vector3d::new(self.x, self.y, self.z)
    }

    /// Whether every coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Point3d> for Point {
    fn from(p: Point3d) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point> for Point3d {
    fn from(p: Point) -> Self {
        Point3d::new(p.x, p.y, p.z)
    }
}

impl From<Vector3d> for Point {
    fn from(v: Vector3d) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// One of the three coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in `x, y, z` order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Field name as used in the serialized point record
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A partial point: only the coordinates that are `Some` are changed when
/// the patch is merged over an existing point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl PointPatch {
    /// An empty patch; merging it changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Set the field for `axis`
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = Some(value),
            Axis::Y => self.y = Some(value),
            Axis::Z => self.z = Some(value),
        }
    }

    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Merge this patch over `base`, keeping every field the patch omits
    pub fn apply(&self, base: &Point) -> Point {
        Point {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            z: self.z.unwrap_or(base.z),
        }
    }
}

impl From<Point> for PointPatch {
    fn from(p: Point) -> Self {
        Self {
            x: Some(p.x),
            y: Some(p.y),
            z: Some(p.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_keeps_omitted_fields() {
        let base = Point::new(1.0, 2.0, 3.0);
        let merged = PointPatch::new().with_y(5.0).apply(&base);
        assert_eq!(merged, Point::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = Point::new(-1.5, 0.0, 7.25);
        let patch = PointPatch::new();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&base), base);
    }

    #[test]
    fn test_full_patch_replaces_point() {
        let base = Point::new(1.0, 1.0, 1.0);
        let replacement = Point::new(4.0, 5.0, 6.0);
        assert_eq!(PointPatch::from(replacement).apply(&base), replacement);
    }

    #[test]
    fn test_point_json_shape() {
        let json = serde_json::to_value(Point::new(1.0, 2.5, -3.0)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1.0, "y": 2.5, "z": -3.0}));
    }

    #[test]
    fn test_patch_omits_absent_fields_when_serialized() {
        let json = serde_json::to_string(&PointPatch::new().with_z(2.0)).unwrap();
        assert_eq!(json, r#"{"z":2.0}"#);

        let patch: PointPatch = serde_json::from_str(r#"{"x": 9}"#).unwrap();
        assert_eq!(patch, PointPatch::new().with_x(9.0));
    }

    #[test]
    fn test_axis_accessors() {
        let p = Point::new(1.0, 2.0, 3.0);
        let values: Vec<f64> = Axis::ALL.iter().map(|a| p.get(*a)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(p.with(Axis::Z, 0.0), Point::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_nalgebra_conversion() {
        let p = Point::new(1.0, -2.0, 0.5);
        let na: Point3d = p.into();
        assert_eq!(Point::from(na), p);
        assert_eq!(p.coords(), Vector3d::new(1.0, -2.0, 0.5));
    }
}
