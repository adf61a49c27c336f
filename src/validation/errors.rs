//! Validation error types

use serde::Serialize;
use thiserror::Error;

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every rule a payload violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fields: {}", field_list(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

fn field_list(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub(super) fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}
