//! Comprehensive tests for domain_reimbursement

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_reimbursement::claim::{ClaimAction, ClaimStatus};
use domain_reimbursement::error::ClaimError;
use domain_reimbursement::metrics::{average_approved, ClaimSummary};
use domain_reimbursement::tariff::Tariff;
use domain_reimbursement::transport::TransportMethod;
use domain_reimbursement::view::ClaimView;

struct FakeClaim {
    transport: TransportMethod,
    distance: u32,
    duration: u32,
    status: ClaimStatus,
}

impl ClaimView for FakeClaim {
    fn transport_method(&self) -> TransportMethod {
        self.transport
    }

    fn distance_km(&self) -> u32 {
        self.distance
    }

    fn visit_duration_hours(&self) -> u32 {
        self.duration
    }

    fn status(&self) -> ClaimStatus {
        self.status
    }
}

// ============================================================================
// Tariff Tests
// ============================================================================

mod tariff_tests {
    use super::*;

    #[test]
    fn test_documented_car_scenario() {
        // 28 km by car on a 5 hour visit: 28 x 0.44 + 25 = 37.32
        let amount = Tariff::default().reimbursement(TransportMethod::Car, 28, 5);
        assert_eq!(amount.amount(), dec!(37.32));
        assert_eq!(amount.to_string(), "$37.32");
    }

    #[test]
    fn test_documented_public_scenario() {
        let amount = Tariff::default().reimbursement(TransportMethod::Public, 0, 2);
        assert!(amount.is_zero());
    }

    #[test]
    fn test_duration_boundary_excludes_then_includes_meal() {
        let tariff = Tariff::default();
        let at_three = tariff.reimbursement(TransportMethod::Taxi, 50, 3);
        let at_four = tariff.reimbursement(TransportMethod::Taxi, 50, 4);

        assert_eq!(at_three.amount(), dec!(22.00));
        assert_eq!(at_four.amount(), dec!(47.00));
    }

    #[test]
    fn test_zero_distance_long_visit_still_earns_meal_allowance() {
        let amount = Tariff::default().reimbursement(TransportMethod::Car, 0, 6);
        assert_eq!(amount.amount(), dec!(25));
    }

    #[test]
    fn test_for_claim_matches_raw_calculation() {
        let tariff = Tariff::default();
        let claim = FakeClaim {
            transport: TransportMethod::Taxi,
            distance: 22,
            duration: 3,
            status: ClaimStatus::Completed,
        };

        assert_eq!(
            tariff.for_claim(&claim),
            tariff.reimbursement(TransportMethod::Taxi, 22, 3)
        );
    }
}

// ============================================================================
// State Machine Tests
// ============================================================================

mod transition_tests {
    use super::*;

    #[test]
    fn test_full_lifecycle_to_paid() {
        let mut status = ClaimStatus::Upcoming;
        for action in [
            ClaimAction::Complete,
            ClaimAction::Approve,
            ClaimAction::MarkPaid,
        ] {
            status = status.apply(action, TransportMethod::Car).unwrap();
        }
        assert_eq!(status, ClaimStatus::Paid);
    }

    #[test]
    fn test_approve_public_fails_with_dedicated_error() {
        let result = ClaimStatus::Completed.apply(ClaimAction::Approve, TransportMethod::Public);
        assert_eq!(result, Err(ClaimError::PublicTransportNotApprovable));
    }

    #[test]
    fn test_rejected_is_terminal() {
        let status = ClaimStatus::Completed
            .apply(ClaimAction::Reject, TransportMethod::Car)
            .unwrap();
        assert_eq!(status, ClaimStatus::Rejected);

        for action in [
            ClaimAction::Complete,
            ClaimAction::Approve,
            ClaimAction::Reject,
            ClaimAction::MarkPaid,
        ] {
            let result = status.apply(action, TransportMethod::Car);
            assert_eq!(
                result,
                Err(ClaimError::InvalidTransition {
                    from: ClaimStatus::Rejected,
                    action
                })
            );
        }
    }

    #[test]
    fn test_mark_paid_only_from_approved() {
        assert!(ClaimStatus::Approved
            .apply(ClaimAction::MarkPaid, TransportMethod::Taxi)
            .is_ok());
        assert!(ClaimStatus::Upcoming
            .apply(ClaimAction::MarkPaid, TransportMethod::Taxi)
            .is_err());
        assert!(ClaimStatus::Completed
            .apply(ClaimAction::MarkPaid, TransportMethod::Taxi)
            .is_err());
    }

    #[test]
    fn test_error_message_names_the_action_and_status() {
        let err = ClaimStatus::Paid
            .apply(ClaimAction::Approve, TransportMethod::Car)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("approve"));
        assert!(message.contains("paid"));
    }
}

// ============================================================================
// Metrics Tests
// ============================================================================

mod metrics_tests {
    use super::*;

    #[test]
    fn test_summary_over_empty_set() {
        let summary = ClaimSummary::compute::<FakeClaim>(&Tariff::default(), &[]);
        assert_eq!(summary.eligible_count, 0);
        assert_eq!(summary.eligible_distance_km, 0);
        assert!(summary.eligible_total.is_zero());
        assert!(summary.average_approved.is_zero());
    }

    #[test]
    fn test_average_over_zero_approved_is_zero_not_an_error() {
        let claims = vec![FakeClaim {
            transport: TransportMethod::Car,
            distance: 50,
            duration: 5,
            status: ClaimStatus::Completed,
        }];
        assert!(average_approved(&Tariff::default(), &claims).is_zero());
    }

    #[test]
    fn test_public_claims_never_count_as_eligible() {
        let claims = vec![
            FakeClaim {
                transport: TransportMethod::Public,
                distance: 0,
                duration: 2,
                status: ClaimStatus::Completed,
            },
            FakeClaim {
                transport: TransportMethod::Public,
                distance: 0,
                duration: 6,
                status: ClaimStatus::Approved,
            },
        ];
        let summary = ClaimSummary::compute(&Tariff::default(), &claims);
        assert_eq!(summary.eligible_count, 0);
        assert!(summary.eligible_total.is_zero());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn transport_strategy() -> impl Strategy<Value = TransportMethod> {
        prop_oneof![
            Just(TransportMethod::Car),
            Just(TransportMethod::Taxi),
            Just(TransportMethod::Public),
        ]
    }

    proptest! {
        #[test]
        fn public_transport_is_always_zero(distance in 0u32..1000, duration in 0u32..24) {
            let amount = Tariff::default()
                .reimbursement(TransportMethod::Public, distance, duration);
            prop_assert!(amount.is_zero());
        }

        #[test]
        fn short_visits_pay_distance_only(
            transport in prop_oneof![Just(TransportMethod::Car), Just(TransportMethod::Taxi)],
            distance in 0u32..1000,
            duration in 0u32..=3
        ) {
            let amount = Tariff::default().reimbursement(transport, distance, duration);
            prop_assert_eq!(amount.amount(), dec!(0.44) * Decimal::from(distance));
        }

        #[test]
        fn long_visits_add_the_flat_allowance(
            transport in prop_oneof![Just(TransportMethod::Car), Just(TransportMethod::Taxi)],
            distance in 0u32..1000,
            duration in 4u32..24
        ) {
            let amount = Tariff::default().reimbursement(transport, distance, duration);
            prop_assert_eq!(
                amount.amount(),
                dec!(0.44) * Decimal::from(distance) + dec!(25)
            );
        }

        #[test]
        fn reimbursement_is_deterministic(
            transport in transport_strategy(),
            distance in 0u32..1000,
            duration in 0u32..24
        ) {
            let tariff = Tariff::default();
            prop_assert_eq!(
                tariff.reimbursement(transport, distance, duration),
                tariff.reimbursement(transport, distance, duration)
            );
        }

        #[test]
        fn terminal_states_reject_every_action(
            terminal in prop_oneof![Just(ClaimStatus::Rejected), Just(ClaimStatus::Paid)],
            action in prop_oneof![
                Just(ClaimAction::Complete),
                Just(ClaimAction::Approve),
                Just(ClaimAction::Reject),
                Just(ClaimAction::MarkPaid),
            ],
            transport in transport_strategy()
        ) {
            prop_assert!(terminal.apply(action, transport).is_err());
        }

        #[test]
        fn transitions_never_panic(
            status in prop_oneof![
                Just(ClaimStatus::Upcoming),
                Just(ClaimStatus::Completed),
                Just(ClaimStatus::Approved),
                Just(ClaimStatus::Rejected),
                Just(ClaimStatus::Paid),
            ],
            action in prop_oneof![
                Just(ClaimAction::Complete),
                Just(ClaimAction::Approve),
                Just(ClaimAction::Reject),
                Just(ClaimAction::MarkPaid),
            ],
            transport in transport_strategy()
        ) {
            // total over the whole domain: every pair either transitions or errors
            let _ = status.apply(action, transport);
        }
    }
}
