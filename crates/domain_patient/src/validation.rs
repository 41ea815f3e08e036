//! Registration validation rules
//!
//! Validation is a pure function over the registration input, separate from
//! the mutation that inserts the record. Failures are field-tagged so the
//! operator sees every offending field at once.
//!
//! # Rules
//!
//! - name, phone, email, address, study id, study name, BSB, and account
//!   number must all be non-empty
//! - age must be in [18, 100]
//! - visit duration must be in [1, 8] hours
//! - for car and taxi travel the distance must be in [1, 200] km; for
//!   public transport any supplied distance is ignored and stored as 0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use domain_reimbursement::TransportMethod;

use crate::hospital::Hospital;

/// Minimum patient age accepted by the programme
pub const MIN_AGE: u32 = 18;
/// Maximum patient age accepted by the programme
pub const MAX_AGE: u32 = 100;
/// Visit duration bounds, in hours
pub const DURATION_RANGE: (u32, u32) = (1, 8);
/// Claimable distance bounds, in kilometres
pub const DISTANCE_RANGE: (u32, u32) = (1, 200);

/// Operator-entered fields for a new patient registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPatientRecord {
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub study_id: String,
    pub study_name: String,
    pub hospital: Hospital,
    pub bsb: String,
    pub account_number: String,
    pub scheduled_visit: DateTime<Utc>,
    pub visit_duration_hours: u32,
    pub transport_method: TransportMethod,
    pub distance_km: u32,
}

impl NewPatientRecord {
    /// Distance that will actually be stored: forced to 0 for public transport
    pub fn effective_distance_km(&self) -> u32 {
        if self.transport_method.is_reimbursable() {
            self.distance_km
        } else {
            0
        }
    }
}

/// A single field-tagged validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of registration validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Fatal errors; any entry means the record must not be inserted
    pub errors: Vec<FieldError>,
    /// Non-fatal issues surfaced to the operator
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Whether the input may be inserted
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds a fatal error against a field
    pub fn add_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Adds a non-fatal warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Names of every field with an error
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

/// Validator for registration input
pub struct RecordValidator;

impl RecordValidator {
    /// Validates a registration, reporting every offending field
    pub fn validate(input: &NewPatientRecord) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::require_non_empty(&mut result, "name", &input.name);
        Self::require_non_empty(&mut result, "phone", &input.phone);
        Self::require_non_empty(&mut result, "email", &input.email);
        Self::require_non_empty(&mut result, "address", &input.address);
        Self::require_non_empty(&mut result, "study_id", &input.study_id);
        Self::require_non_empty(&mut result, "study_name", &input.study_name);
        Self::require_non_empty(&mut result, "bsb", &input.bsb);
        Self::require_non_empty(&mut result, "account_number", &input.account_number);

        if !(MIN_AGE..=MAX_AGE).contains(&input.age) {
            result.add_error(
                "age",
                format!("must be between {MIN_AGE} and {MAX_AGE}, got {}", input.age),
            );
        }

        let (min_duration, max_duration) = DURATION_RANGE;
        if !(min_duration..=max_duration).contains(&input.visit_duration_hours) {
            result.add_error(
                "visit_duration_hours",
                format!(
                    "must be between {min_duration} and {max_duration} hours, got {}",
                    input.visit_duration_hours
                ),
            );
        }

        if input.transport_method.is_reimbursable() {
            let (min_distance, max_distance) = DISTANCE_RANGE;
            if !(min_distance..=max_distance).contains(&input.distance_km) {
                result.add_error(
                    "distance_km",
                    format!(
                        "must be between {min_distance} and {max_distance} km for {} travel, got {}",
                        input.transport_method, input.distance_km
                    ),
                );
            }
        } else if input.distance_km != 0 {
            result.add_warning(format!(
                "distance of {} km ignored: public transport is not eligible for distance reimbursement",
                input.distance_km
            ));
        }

        result
    }

    fn require_non_empty(result: &mut ValidationResult, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            result.add_error(field, "is required");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_input() -> NewPatientRecord {
        NewPatientRecord {
            name: "Sarah Mitchell".to_string(),
            age: 34,
            phone: "(08) 9123-4567".to_string(),
            email: "sarah.mitchell@email.com".to_string(),
            address: "45 Stirling Highway, Nedlands WA 6009".to_string(),
            study_id: "CARDIO-2024-001".to_string(),
            study_name: "Cardiac Prevention Study".to_string(),
            hospital: Hospital::RoyalPerth,
            bsb: "036-012".to_string(),
            account_number: "123456789".to_string(),
            scheduled_visit: Utc::now(),
            visit_duration_hours: 4,
            transport_method: TransportMethod::Car,
            distance_km: 12,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let result = RecordValidator::validate(&valid_input());
        assert!(result.is_valid(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_email_is_reported_by_field() {
        let mut input = valid_input();
        input.email = String::new();

        let result = RecordValidator::validate(&input);
        assert!(!result.is_valid());
        assert_eq!(result.fields(), vec!["email"]);
    }

    #[test]
    fn test_every_missing_field_is_enumerated() {
        let mut input = valid_input();
        input.name = "  ".to_string();
        input.bsb = String::new();
        input.account_number = String::new();

        let result = RecordValidator::validate(&input);
        let fields = result.fields();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"bsb"));
        assert!(fields.contains(&"account_number"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_age_bounds() {
        for (age, valid) in [(17, false), (18, true), (100, true), (101, false)] {
            let mut input = valid_input();
            input.age = age;
            let result = RecordValidator::validate(&input);
            assert_eq!(result.is_valid(), valid, "age {age}");
            if !valid {
                assert_eq!(result.fields(), vec!["age"]);
            }
        }
    }

    #[test]
    fn test_duration_bounds() {
        for (hours, valid) in [(0, false), (1, true), (8, true), (9, false)] {
            let mut input = valid_input();
            input.visit_duration_hours = hours;
            assert_eq!(
                RecordValidator::validate(&input).is_valid(),
                valid,
                "duration {hours}"
            );
        }
    }

    #[test]
    fn test_distance_bounds_for_reimbursable_transport() {
        for (km, valid) in [(0, false), (1, true), (200, true), (201, false)] {
            let mut input = valid_input();
            input.distance_km = km;
            assert_eq!(
                RecordValidator::validate(&input).is_valid(),
                valid,
                "distance {km}"
            );
        }
    }

    #[test]
    fn test_public_transport_ignores_distance_with_a_warning() {
        let mut input = valid_input();
        input.transport_method = TransportMethod::Public;
        input.distance_km = 50;

        let result = RecordValidator::validate(&input);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(input.effective_distance_km(), 0);
    }

    #[test]
    fn test_public_transport_with_zero_distance_is_clean() {
        let mut input = valid_input();
        input.transport_method = TransportMethod::Public;
        input.distance_km = 0;

        let result = RecordValidator::validate(&input);
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }
}
