//! Test data builders
//!
//! Builder for constructing visit records with sensible defaults, so tests
//! specify only the fields they care about.

use chrono::{Days, Utc};

use core_kernel::{PatientId, ReceiptRef};
use domain_patient::{Hospital, PatientVisitRecord};
use domain_reimbursement::{ClaimStatus, TransportMethod};

/// Builder for test visit records
pub struct TestRecordBuilder {
    id: PatientId,
    name: String,
    age: u32,
    hospital: Hospital,
    visit_duration_hours: u32,
    transport_method: TransportMethod,
    distance_km: u32,
    status: ClaimStatus,
    receipts: Vec<ReceiptRef>,
}

impl Default for TestRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRecordBuilder {
    /// Creates a builder for a completed 10 km car claim
    pub fn new() -> Self {
        Self {
            id: PatientId::from_ordinal(1),
            name: "Test Patient".to_string(),
            age: 30,
            hospital: Hospital::RoyalPerth,
            visit_duration_hours: 2,
            transport_method: TransportMethod::Car,
            distance_km: 10,
            status: ClaimStatus::Completed,
            receipts: Vec::new(),
        }
    }

    pub fn with_id(mut self, ordinal: u32) -> Self {
        self.id = PatientId::from_ordinal(ordinal);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_hospital(mut self, hospital: Hospital) -> Self {
        self.hospital = hospital;
        self
    }

    pub fn with_duration(mut self, hours: u32) -> Self {
        self.visit_duration_hours = hours;
        self
    }

    pub fn with_transport(mut self, transport: TransportMethod) -> Self {
        self.transport_method = transport;
        self
    }

    pub fn with_distance(mut self, km: u32) -> Self {
        self.distance_km = km;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_receipts(mut self, refs: &[&str]) -> Self {
        self.receipts = refs.iter().map(|r| ReceiptRef::new(*r)).collect();
        self
    }

    /// Builds the record
    pub fn build(self) -> PatientVisitRecord {
        let now = Utc::now();
        PatientVisitRecord {
            id: self.id,
            name: self.name,
            age: self.age,
            phone: "(08) 9000-0000".to_string(),
            email: "test.patient@email.com".to_string(),
            address: "1 Test Street, Perth WA 6000".to_string(),
            bsb: "000-000".to_string(),
            account_number: "00000000".to_string(),
            study_id: "TEST-2024-001".to_string(),
            study_name: "Test Study".to_string(),
            hospital: self.hospital,
            scheduled_visit: now + Days::new(1),
            visit_duration_hours: self.visit_duration_hours,
            transport_method: self.transport_method,
            distance_km: self.distance_km,
            status: self.status,
            receipts: self.receipts,
            created_at: now,
            updated_at: now,
        }
    }
}
