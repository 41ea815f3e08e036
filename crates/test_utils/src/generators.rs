//! Property-based test generators
//!
//! Proptest strategies that stay inside the registration invariants, so
//! generated records are always ones the store could actually hold.

use proptest::prelude::*;

use domain_patient::PatientVisitRecord;
use domain_reimbursement::{ClaimAction, ClaimStatus, TransportMethod};

use crate::builders::TestRecordBuilder;

/// Strategy for generating transport methods
pub fn transport_strategy() -> impl Strategy<Value = TransportMethod> {
    prop_oneof![
        Just(TransportMethod::Car),
        Just(TransportMethod::Taxi),
        Just(TransportMethod::Public),
    ]
}

/// Strategy for generating claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Upcoming),
        Just(ClaimStatus::Completed),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::Paid),
    ]
}

/// Strategy for generating operator actions
pub fn claim_action_strategy() -> impl Strategy<Value = ClaimAction> {
    prop_oneof![
        Just(ClaimAction::Complete),
        Just(ClaimAction::Approve),
        Just(ClaimAction::Reject),
        Just(ClaimAction::MarkPaid),
    ]
}

/// Strategy for claimable distances (registration range)
pub fn distance_strategy() -> impl Strategy<Value = u32> {
    1u32..=200
}

/// Strategy for visit durations (registration range)
pub fn duration_strategy() -> impl Strategy<Value = u32> {
    1u32..=8
}

/// Strategy for whole visit records respecting the store invariants
///
/// Public-transport records carry distance 0, matching what registration
/// would have stored.
pub fn record_strategy() -> impl Strategy<Value = PatientVisitRecord> {
    (
        transport_strategy(),
        distance_strategy(),
        duration_strategy(),
        claim_status_strategy(),
    )
        .prop_map(|(transport, distance, duration, status)| {
            let distance = if transport.is_reimbursable() {
                distance
            } else {
                0
            };
            TestRecordBuilder::new()
                .with_transport(transport)
                .with_distance(distance)
                .with_duration(duration)
                .with_status(status)
                .build()
        })
}
