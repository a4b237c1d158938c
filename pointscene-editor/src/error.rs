//! Error types for the edit form

use pointscene_core::Axis;
use thiserror::Error;

/// Why a single form field was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("{axis} is required")]
    Missing { axis: Axis },

    #[error("{axis} must be a number, got {input:?}")]
    NotANumber { axis: Axis, input: String },

    #[error("{axis} must be finite, got {input:?}")]
    NotFinite { axis: Axis, input: String },
}

impl FieldError {
    pub fn axis(&self) -> Axis {
        match self {
            FieldError::Missing { axis }
            | FieldError::NotANumber { axis, .. }
            | FieldError::NotFinite { axis, .. } => *axis,
        }
    }
}

/// Every field that failed validation, in `x, y, z` order
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid point input: {}", describe(.errors))]
pub struct FormError {
    pub errors: Vec<FieldError>,
}

impl FormError {
    /// The error for `axis`, if that field failed
    pub fn field(&self, axis: Axis) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.axis() == axis)
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
