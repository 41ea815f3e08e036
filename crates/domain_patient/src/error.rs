//! Patient store errors

use std::fmt;
use thiserror::Error;

use core_kernel::PatientId;

use crate::validation::{FieldError, ValidationResult};

/// Field-tagged validation failures from a rejected registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// The individual field errors
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Names of the offending fields
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// True when the given field is among the failures
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl From<ValidationResult> for ValidationErrors {
    fn from(result: ValidationResult) -> Self {
        Self(result.errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|e| e.field).collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// Errors raised by the patient record store
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("validation failed for fields: {0}")]
    Validation(ValidationErrors),

    #[error("patient record not found: {0}")]
    NotFound(PatientId),
}
