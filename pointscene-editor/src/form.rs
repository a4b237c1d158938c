//! Point edit form
//!
//! The form is the validation boundary in front of the store: it holds raw
//! text for each coordinate and only hands a [`Point`] to the store once all
//! three fields parse as finite numbers.

use crate::error::{FieldError, FormError};
use crate::store::PointStore;
use pointscene_core::{Axis, Point, PointPatch};

/// Three text fields for `x`, `y` and `z`.
///
/// A form built with [`PointForm::new`] starts empty (add mode); one built
/// with [`PointForm::from_point`] starts prefilled (edit mode). [`reset`]
/// restores whichever initial values the form was built with.
///
/// [`reset`]: PointForm::reset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointForm {
    fields: [String; 3],
    initial: [String; 3],
}

impl PointForm {
    /// Empty form for adding a new point
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled with `point`, for editing it
    pub fn from_point(point: &Point) -> Self {
        let initial = Axis::ALL.map(|axis| point.get(axis).to_string());
        Self {
            fields: initial.clone(),
            initial,
        }
    }

    /// Raw text of one field
    pub fn field(&self, axis: Axis) -> &str {
        &self.fields[slot(axis)]
    }

    /// Replace the text of one field
    pub fn set<S: Into<String>>(&mut self, axis: Axis, text: S) {
        self.fields[slot(axis)] = text.into();
    }

    /// Restore the initial field values
    pub fn reset(&mut self) {
        self.fields = self.initial.clone();
    }

    /// Whether any field differs from its initial value
    pub fn is_dirty(&self) -> bool {
        self.fields != self.initial
    }

    /// Parse all three fields.
    ///
    /// Every field is required and must be a finite number; surrounding
    /// whitespace is ignored. All failing fields are reported together.
    pub fn validate(&self) -> Result<Point, FormError> {
        let mut point = Point::origin();
        let mut errors = Vec::new();

        for axis in Axis::ALL {
            match parse_field(axis, self.field(axis)) {
                Ok(value) => point = point.with(axis, value),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(point)
        } else {
            Err(FormError { errors })
        }
    }

    /// Validate, append the point to `store` and clear the form
    pub fn submit_add(&mut self, store: &mut PointStore) -> Result<Point, FormError> {
        let point = self.validate()?;
        store.add_point(point);
        self.reset();
        Ok(point)
    }

    /// Validate and write all three fields over the point at `index`.
    ///
    /// Returns `Ok(false)` when `index` no longer exists in the store.
    pub fn submit_update(&self, store: &mut PointStore, index: usize) -> Result<bool, FormError> {
        let point = self.validate()?;
        Ok(store.update_point(index, PointPatch::from(point)))
    }
}

/// Parse a partial edit, one optional text per axis in `x, y, z` order.
///
/// Absent fields stay absent in the patch. A present field is checked like
/// a [`PointForm`] field, so blank, non-numeric and non-finite text is
/// rejected, with all failing fields reported together.
pub fn validate_patch(fields: [Option<&str>; 3]) -> Result<PointPatch, FormError> {
    let mut patch = PointPatch::new();
    let mut errors = Vec::new();

    for (axis, text) in Axis::ALL.into_iter().zip(fields) {
        let Some(text) = text else { continue };
        match parse_field(axis, text) {
            Ok(value) => patch.set(axis, value),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(FormError { errors })
    }
}

fn slot(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

fn parse_field(axis: Axis, text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing { axis });
    }

    let value: f64 = trimmed.parse().map_err(|_| FieldError::NotANumber {
        axis,
        input: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(FieldError::NotFinite {
            axis,
            input: trimmed.to_string(),
        });
    }
    Ok(value)
}
