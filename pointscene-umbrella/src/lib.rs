//! # pointscene
//!
//! An editable, persistent 3D point set with derived centroid geometry.
//!
//! This is the umbrella crate that provides convenient access to all pointscene
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Points, partial updates, the ordered collection and snapshots
//! - **Algorithms**: Centroid, centroid-to-point segments and the scene model
//! - **I/O**: Key-value snapshot storage and the JSON snapshot codec
//! - **Editor**: The persistent point store and the edit form
//!
//! ## Quick Start
//!
//! ```rust
//! use pointscene::prelude::*;
//!
//! let mut store = PointStore::in_memory();
//! store.add_point(Point::new(1.0, 1.0, 1.0));
//! store.add_point(Point::new(3.0, 1.0, 1.0));
//! assert_eq!(store.centroid(), Some(Point::new(2.0, 1.0, 1.0)));
//!
//! store.remove_point(0);
//! assert_eq!(store.centroid(), None);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms, io and editor
//! - `algorithms`: Derived geometry
//! - `io`: Snapshot storage
//! - `editor`: Point store and edit form (implies `algorithms` and `io`)

// Re-export core functionality
pub use pointscene_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use pointscene_algorithms as algorithms;

#[cfg(feature = "io")]
pub use pointscene_io as io;

#[cfg(feature = "editor")]
pub use pointscene_editor as editor;

/// Convenient imports for common use cases
pub mod prelude {
    pub use pointscene_core::*;

    #[cfg(feature = "algorithms")]
    pub use pointscene_algorithms::*;

    #[cfg(feature = "io")]
    pub use pointscene_io::*;

    #[cfg(feature = "editor")]
    pub use pointscene_editor::*;
}
