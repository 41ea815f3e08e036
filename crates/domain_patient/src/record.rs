//! Patient visit record aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PatientId, ReceiptRef};
use domain_reimbursement::{ClaimAction, ClaimError, ClaimStatus, ClaimView, Tariff, TransportMethod};

use crate::hospital::Hospital;

/// One patient's trial visit and its travel claim
///
/// The reimbursement amount is never stored here; it is recomputed from the
/// transport method, distance, and duration whenever needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientVisitRecord {
    /// Sequential identifier (PT001, PT002, ...)
    pub id: PatientId,
    /// Patient full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Home address, used as the travel origin
    pub address: String,
    /// Bank-state-branch code for the payout account
    pub bsb: String,
    /// Payout account number
    pub account_number: String,
    /// Study identifier (e.g., CARDIO-2024-001)
    pub study_id: String,
    /// Study display name
    pub study_name: String,
    /// Trial site, carries the destination address
    pub hospital: Hospital,
    /// Scheduled visit time
    pub scheduled_visit: DateTime<Utc>,
    /// Visit duration in whole hours
    pub visit_duration_hours: u32,
    /// How the patient travels
    pub transport_method: TransportMethod,
    /// Distance travelled in kilometres, 0 for public transport
    pub distance_km: u32,
    /// Claim lifecycle status
    pub status: ClaimStatus,
    /// Receipt references attached to the claim, in upload order
    pub receipts: Vec<ReceiptRef>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl PatientVisitRecord {
    /// The destination address for this visit
    pub fn hospital_address(&self) -> &'static str {
        self.hospital.address()
    }

    /// Computes the reimbursement owed for this visit
    pub fn reimbursement(&self, tariff: &Tariff) -> Money {
        tariff.for_claim(self)
    }

    /// Records that the visit has taken place
    pub fn complete_visit(&mut self) -> Result<(), ClaimError> {
        self.apply_action(ClaimAction::Complete)
    }

    /// Approves the claim for payment
    pub fn approve(&mut self) -> Result<(), ClaimError> {
        self.apply_action(ClaimAction::Approve)
    }

    /// Rejects the claim
    pub fn reject(&mut self) -> Result<(), ClaimError> {
        self.apply_action(ClaimAction::Reject)
    }

    /// Records the payout
    pub fn mark_paid(&mut self) -> Result<(), ClaimError> {
        self.apply_action(ClaimAction::MarkPaid)
    }

    /// True when the record matches a free-text search term
    ///
    /// Matches case-insensitively on the name, identifier, or study name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.id.to_string().to_lowercase().contains(&term)
            || self.study_name.to_lowercase().contains(&term)
    }

    // Status is mutated only when the state machine admits the action.
    fn apply_action(&mut self, action: ClaimAction) -> Result<(), ClaimError> {
        let next = self.status.apply(action, self.transport_method)?;
        tracing::info!(
            patient = %self.id,
            from = %self.status,
            to = %next,
            "claim status transition"
        );
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl ClaimView for PatientVisitRecord {
    fn transport_method(&self) -> TransportMethod {
        self.transport_method
    }

    fn distance_km(&self) -> u32 {
        self.distance_km
    }

    fn visit_duration_hours(&self) -> u32 {
        self.visit_duration_hours
    }

    fn status(&self) -> ClaimStatus {
        self.status
    }
}
