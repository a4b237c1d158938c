//! # pointscene Algorithms
//!
//! Geometry derived from an editable point set.
//!
//! This crate computes the centroid of the current points, the segments
//! connecting the centroid to each point, and bundles both into a
//! [`SceneModel`] for a renderer.

pub mod geometry;
pub mod scene;

// Re-export commonly used items
pub use geometry::*;
pub use scene::*;
