//! Pre-built test fixtures
//!
//! Ready-to-use registrations and records for common scenarios, consistent
//! and predictable across the suite.

use chrono::{Days, Utc};

use domain_patient::{Hospital, NewPatientRecord, PatientVisitRecord};
use domain_reimbursement::{ClaimStatus, TransportMethod};

use crate::builders::TestRecordBuilder;

/// Fixture for registration input
pub struct RegistrationFixtures;

impl RegistrationFixtures {
    /// A registration that passes every validation rule
    pub fn valid() -> NewPatientRecord {
        NewPatientRecord {
            name: "Alex Nguyen".to_string(),
            age: 27,
            phone: "(08) 9678-9012".to_string(),
            email: "alex.nguyen@email.com".to_string(),
            address: "12 Riverside Drive, East Perth WA 6004".to_string(),
            study_id: "IMMUNO-2024-009".to_string(),
            study_name: "Immunology Response Study".to_string(),
            hospital: Hospital::FionaStanley,
            bsb: "066-001".to_string(),
            account_number: "555666777".to_string(),
            scheduled_visit: Utc::now() + Days::new(3),
            visit_duration_hours: 5,
            transport_method: TransportMethod::Car,
            distance_km: 35,
        }
    }

    /// A public-transport registration (distance ignored)
    pub fn public_transport() -> NewPatientRecord {
        NewPatientRecord {
            transport_method: TransportMethod::Public,
            distance_km: 0,
            ..Self::valid()
        }
    }
}

/// Fixture for visit records
pub struct RecordFixtures;

impl RecordFixtures {
    /// Completed car claim: 28 km, 5 hours (reimburses 37.32)
    pub fn completed_car() -> PatientVisitRecord {
        TestRecordBuilder::new()
            .with_transport(TransportMethod::Car)
            .with_distance(28)
            .with_duration(5)
            .with_status(ClaimStatus::Completed)
            .build()
    }

    /// Completed public-transport claim (never approvable)
    pub fn completed_public() -> PatientVisitRecord {
        TestRecordBuilder::new()
            .with_transport(TransportMethod::Public)
            .with_distance(0)
            .with_duration(2)
            .with_status(ClaimStatus::Completed)
            .build()
    }

    /// Approved taxi claim awaiting payment: 22 km, 4 hours
    pub fn approved_taxi() -> PatientVisitRecord {
        TestRecordBuilder::new()
            .with_transport(TransportMethod::Taxi)
            .with_distance(22)
            .with_duration(4)
            .with_status(ClaimStatus::Approved)
            .build()
    }
}
