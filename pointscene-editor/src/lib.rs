//! Editing layer for pointscene
//!
//! [`PointStore`] owns the point collection, persists it after every edit and
//! notifies subscribers; [`PointForm`] validates user input before it
//! reaches the store.

pub mod config;
pub mod error;
pub mod form;
pub mod store;

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{FieldError, FormError};
pub use form::{validate_patch, PointForm};
pub use store::{PointStore, SubscriptionId};
