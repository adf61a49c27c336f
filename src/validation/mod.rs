//! # Validation
//!
//! Rule checking for request payloads, applied before any store access.
//!
//! Validators collect every violation instead of stopping at the first one,
//! so a rejected payload reports all of its bad fields at once.

mod errors;
pub mod rules;

pub use errors::{FieldViolation, ValidationError};

use crate::patch::FieldUpdate;

/// Collector for rule violations.
#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.items.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a violation when a required field is missing.
    pub fn required<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.add(field, "is required");
        }
        value
    }

    /// Unwraps an update to a non-nullable field; explicit `null` is a violation.
    pub fn non_null<T>(&mut self, field: &'static str, update: FieldUpdate<T>) -> Option<T> {
        match update {
            FieldUpdate::Absent => None,
            FieldUpdate::Null => {
                self.add(field, "must not be null");
                None
            }
            FieldUpdate::Value(value) => Some(value),
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError::new(self.items)
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}
