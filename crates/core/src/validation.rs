//! Shared field validation helpers.
//!
//! Record validators collect every failing rule into a [`FieldErrors`] and
//! report them together, so a client sees all problems with a form at once.

use crate::error::CoreError;

/// Accumulates human-readable validation failures for one record.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure message.
    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Record `"{field} can't be blank"` if `value` is empty or whitespace.
    pub fn require_present(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(format!("{field} can't be blank"));
        }
    }

    /// Record a failure if `value` lies outside `[min, max]`.
    pub fn require_range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if !value.is_finite() || !(min..=max).contains(&value) {
            self.add(format!("{field} must be between {min} and {max}, got {value}"));
        }
    }

    /// Record a failure if `value` is not one of `allowed`.
    pub fn require_one_of(&mut self, field: &str, value: &str, allowed: &[&str]) {
        if !allowed.contains(&value) {
            self.add(format!(
                "{field} must be one of: {}, got '{value}'",
                allowed.join(", ")
            ));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Convert into `Ok(())` when nothing failed, or a single
    /// [`CoreError::Validation`] joining every message.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.messages.join("; ")))
        }
    }
}

/// Validate a latitude/longitude pair into `errors`.
pub fn check_coordinates(errors: &mut FieldErrors, latitude: f64, longitude: f64) {
    errors.require_range("latitude", latitude, -90.0, 90.0);
    errors.require_range("longitude", longitude, -180.0, 180.0);
}
