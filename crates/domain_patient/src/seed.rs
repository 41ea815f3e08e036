//! Demo seed records
//!
//! The five registrations the demo build ships with. Visit dates are
//! generated relative to now so the "next upcoming visit" card always has
//! something in the near future to show.

use chrono::{Days, Utc};

use core_kernel::{PatientId, ReceiptRef};
use domain_reimbursement::{ClaimStatus, TransportMethod};

use crate::hospital::Hospital;
use crate::record::PatientVisitRecord;

struct SeedRow {
    ordinal: u32,
    name: &'static str,
    account_number: &'static str,
    bsb: &'static str,
    address: &'static str,
    study_id: &'static str,
    study_name: &'static str,
    age: u32,
    phone: &'static str,
    email: &'static str,
    visit_in_days: u64,
    visit_duration_hours: u32,
    hospital: Hospital,
    transport_method: TransportMethod,
    distance_km: u32,
    status: ClaimStatus,
    receipts: &'static [&'static str],
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        ordinal: 1,
        name: "Sarah Mitchell",
        account_number: "123456789",
        bsb: "036-012",
        address: "45 Stirling Highway, Nedlands WA 6009",
        study_id: "CARDIO-2024-001",
        study_name: "Cardiac Prevention Study",
        age: 34,
        phone: "(08) 9123-4567",
        email: "sarah.mitchell@email.com",
        visit_in_days: 2,
        visit_duration_hours: 4,
        hospital: Hospital::RoyalPerth,
        transport_method: TransportMethod::Car,
        distance_km: 12,
        status: ClaimStatus::Upcoming,
        receipts: &["parking-receipt-001.pdf", "meal-receipt-001.pdf"],
    },
    SeedRow {
        ordinal: 2,
        name: "James Wilson",
        account_number: "987654321",
        bsb: "066-102",
        address: "78 Hay Street, Subiaco WA 6008",
        study_id: "NEURO-2024-003",
        study_name: "Neurological Assessment Trial",
        age: 42,
        phone: "(08) 9234-5678",
        email: "james.wilson@email.com",
        visit_in_days: 7,
        visit_duration_hours: 2,
        hospital: Hospital::SirCharlesGairdner,
        transport_method: TransportMethod::Public,
        distance_km: 0,
        status: ClaimStatus::Completed,
        receipts: &[],
    },
    SeedRow {
        ordinal: 3,
        name: "Emma Thompson",
        account_number: "456789123",
        bsb: "016-789",
        address: "23 Ocean Drive, Cottesloe WA 6011",
        study_id: "ONCOLOGY-2024-007",
        study_name: "Cancer Treatment Efficacy Study",
        age: 56,
        phone: "(08) 9345-6789",
        email: "emma.thompson@email.com",
        visit_in_days: 1,
        visit_duration_hours: 5,
        hospital: Hospital::FionaStanley,
        transport_method: TransportMethod::Car,
        distance_km: 28,
        status: ClaimStatus::Upcoming,
        receipts: &["parking-receipt-003.pdf", "meal-receipt-003.pdf"],
    },
    SeedRow {
        ordinal: 4,
        name: "Michael Brown",
        account_number: "789123456",
        bsb: "086-023",
        address: "156 Great Eastern Highway, Belmont WA 6104",
        study_id: "DIABETES-2024-012",
        study_name: "Diabetes Management Protocol",
        age: 48,
        phone: "(08) 9456-7890",
        email: "michael.brown@email.com",
        visit_in_days: 4,
        visit_duration_hours: 3,
        hospital: Hospital::RoyalPerth,
        transport_method: TransportMethod::Taxi,
        distance_km: 22,
        status: ClaimStatus::Completed,
        receipts: &["taxi-receipt-004.pdf"],
    },
    SeedRow {
        ordinal: 5,
        name: "Lisa Anderson",
        account_number: "321654987",
        bsb: "036-089",
        address: "89 Canning Highway, South Perth WA 6151",
        study_id: "RESPIRATORY-2024-005",
        study_name: "Respiratory Function Analysis",
        age: 39,
        phone: "(08) 9567-8901",
        email: "lisa.anderson@email.com",
        visit_in_days: 10,
        visit_duration_hours: 6,
        hospital: Hospital::SirCharlesGairdner,
        transport_method: TransportMethod::Car,
        distance_km: 18,
        status: ClaimStatus::Approved,
        receipts: &["parking-receipt-005.pdf", "meal-receipt-005.pdf"],
    },
];

/// Builds the demo records
pub fn demo_records() -> Vec<PatientVisitRecord> {
    let now = Utc::now();
    SEED_ROWS
        .iter()
        .map(|row| PatientVisitRecord {
            id: PatientId::from_ordinal(row.ordinal),
            name: row.name.to_string(),
            age: row.age,
            phone: row.phone.to_string(),
            email: row.email.to_string(),
            address: row.address.to_string(),
            bsb: row.bsb.to_string(),
            account_number: row.account_number.to_string(),
            study_id: row.study_id.to_string(),
            study_name: row.study_name.to_string(),
            hospital: row.hospital,
            scheduled_visit: now + Days::new(row.visit_in_days),
            visit_duration_hours: row.visit_duration_hours,
            transport_method: row.transport_method,
            distance_km: row.distance_km,
            status: row.status,
            receipts: row
                .receipts
                .iter()
                .map(|r| ReceiptRef::new(*r))
                .collect(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_seed_records() {
        let records = demo_records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].id.to_string(), "PT001");
        assert_eq!(records[4].id.to_string(), "PT005");
    }

    #[test]
    fn test_public_transport_seed_has_zero_distance() {
        let records = demo_records();
        let james = &records[1];
        assert_eq!(james.transport_method, TransportMethod::Public);
        assert_eq!(james.distance_km, 0);
        assert!(james.receipts.is_empty());
    }

    #[test]
    fn test_seed_statuses_cover_the_review_queue() {
        let records = demo_records();
        let completed = records
            .iter()
            .filter(|r| r.status == ClaimStatus::Completed)
            .count();
        let approved = records
            .iter()
            .filter(|r| r.status == ClaimStatus::Approved)
            .count();
        assert_eq!(completed, 2);
        assert_eq!(approved, 1);
    }
}
