//! In-memory patient record store
//!
//! Holds the working set of visit records for one operator session.
//! Records are insertion-ordered, never physically deleted, and mutated
//! only through claim status transitions.

use chrono::Utc;

use core_kernel::PatientId;

use crate::error::RecordError;
use crate::record::PatientVisitRecord;
use crate::seed;
use crate::validation::{NewPatientRecord, RecordValidator};

/// The patient record store
#[derive(Debug, Clone, Default)]
pub struct PatientDirectory {
    records: Vec<PatientVisitRecord>,
}

impl PatientDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding the demo seed records
    pub fn seeded() -> Self {
        Self {
            records: seed::demo_records(),
        }
    }

    /// All records, in insertion order
    pub fn list(&self) -> &[PatientVisitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier
    pub fn find(&self, id: PatientId) -> Result<&PatientVisitRecord, RecordError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(RecordError::NotFound(id))
    }

    /// Looks up a record by identifier for mutation
    pub fn find_mut(&mut self, id: PatientId) -> Result<&mut PatientVisitRecord, RecordError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RecordError::NotFound(id))
    }

    /// The identifier the next registration will receive
    pub fn next_patient_id(&self) -> PatientId {
        let highest = self
            .records
            .iter()
            .map(|r| r.id.ordinal())
            .max()
            .unwrap_or(0);
        PatientId::from_ordinal(highest + 1)
    }

    /// Validates and inserts a new registration
    ///
    /// Nothing is inserted when validation fails; the error enumerates
    /// every offending field.
    pub fn add_record(
        &mut self,
        input: NewPatientRecord,
    ) -> Result<&PatientVisitRecord, RecordError> {
        let validation = RecordValidator::validate(&input);
        if !validation.is_valid() {
            tracing::debug!(
                fields = ?validation.fields(),
                "registration rejected by validation"
            );
            return Err(RecordError::Validation(validation.into()));
        }
        for warning in &validation.warnings {
            tracing::warn!(%warning, "registration warning");
        }

        let id = self.next_patient_id();
        let now = Utc::now();
        let distance_km = input.effective_distance_km();
        let record = PatientVisitRecord {
            id,
            name: input.name,
            age: input.age,
            phone: input.phone,
            email: input.email,
            address: input.address,
            bsb: input.bsb,
            account_number: input.account_number,
            study_id: input.study_id,
            study_name: input.study_name,
            hospital: input.hospital,
            scheduled_visit: input.scheduled_visit,
            visit_duration_hours: input.visit_duration_hours,
            transport_method: input.transport_method,
            distance_km,
            status: domain_reimbursement::ClaimStatus::Upcoming,
            receipts: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        tracing::info!(patient = %id, study = %record.study_id, "patient record registered");
        self.records.push(record);
        Ok(self.records.last().expect("record was just inserted"))
    }

    /// Case-insensitive search over name, identifier, and study name
    pub fn search(&self, term: &str) -> Vec<&PatientVisitRecord> {
        self.records.iter().filter(|r| r.matches(term)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hospital::Hospital;
    use chrono::Utc;
    use domain_reimbursement::TransportMethod;

    fn registration() -> NewPatientRecord {
        NewPatientRecord {
            name: "Test Patient".to_string(),
            age: 30,
            phone: "(08) 9000-0000".to_string(),
            email: "test@email.com".to_string(),
            address: "1 Test Street, Perth WA 6000".to_string(),
            study_id: "TEST-2024-001".to_string(),
            study_name: "Test Study".to_string(),
            hospital: Hospital::RoyalPerth,
            bsb: "000-000".to_string(),
            account_number: "00000000".to_string(),
            scheduled_visit: Utc::now(),
            visit_duration_hours: 2,
            transport_method: TransportMethod::Car,
            distance_km: 10,
        }
    }

    #[test]
    fn test_empty_directory_assigns_pt001() {
        let mut directory = PatientDirectory::new();
        let record = directory.add_record(registration()).unwrap();
        assert_eq!(record.id.to_string(), "PT001");
    }

    #[test]
    fn test_sequential_ids() {
        let mut directory = PatientDirectory::new();
        directory.add_record(registration()).unwrap();
        let second = directory.add_record(registration()).unwrap();
        assert_eq!(second.id.to_string(), "PT002");
    }

    #[test]
    fn test_failed_validation_inserts_nothing() {
        let mut directory = PatientDirectory::new();
        let mut input = registration();
        input.email = String::new();

        let result = directory.add_record(input);
        assert!(matches!(result, Err(RecordError::Validation(_))));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_find_unknown_id() {
        let directory = PatientDirectory::new();
        let result = directory.find(core_kernel::PatientId::from_ordinal(99));
        assert!(matches!(result, Err(RecordError::NotFound(_))));
    }
}
