//! Core data structures and traits for pointscene
//!
//! This crate provides the fundamental types of an editable 3D point set:
//! points, partial point updates, the ordered collection, immutable snapshots
//! and the line segments drawn between them.

pub mod point;
pub mod collection;
pub mod snapshot;
pub mod segment;
pub mod traits;
pub mod error;

pub use point::*;
pub use collection::*;
pub use snapshot::*;
pub use segment::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
