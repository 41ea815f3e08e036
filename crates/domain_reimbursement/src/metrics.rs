//! Summary metrics over a set of claims
//!
//! These back the coordinator and finance dashboards: eligibility counts,
//! kilometre totals, and reimbursement sums filtered by claim status.
//! Eligibility requires BOTH a completed-or-approved status AND a
//! non-public transport method.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::claim::ClaimStatus;
use crate::tariff::Tariff;
use crate::view::ClaimView;

/// Returns true if a claim counts toward reimbursement totals
pub fn is_eligible<V: ClaimView>(claim: &V) -> bool {
    matches!(
        claim.status(),
        ClaimStatus::Completed | ClaimStatus::Approved
    ) && claim.transport_method().is_reimbursable()
}

/// Sum of computed reimbursements across claims in the given status
pub fn total_for_status<V: ClaimView>(
    tariff: &Tariff,
    status: ClaimStatus,
    claims: &[V],
) -> Money {
    claims
        .iter()
        .filter(|c| c.status() == status)
        .fold(Money::zero(tariff.currency), |acc, c| {
            acc + tariff.for_claim(c)
        })
}

/// Mean reimbursement across approved claims, zero when there are none
pub fn average_approved<V: ClaimView>(tariff: &Tariff, claims: &[V]) -> Money {
    let approved = claims
        .iter()
        .filter(|c| c.status() == ClaimStatus::Approved)
        .count();
    if approved == 0 {
        return Money::zero(tariff.currency);
    }

    let total = total_for_status(tariff, ClaimStatus::Approved, claims);
    total
        .divide(Decimal::from(approved as u64))
        .unwrap_or_else(|_| Money::zero(tariff.currency))
}

/// Dashboard summary over one set of claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSummary {
    /// Claims with completed/approved status and reimbursable transport
    pub eligible_count: usize,
    /// Total kilometres across eligible claims
    pub eligible_distance_km: u64,
    /// Total reimbursement owed across eligible claims
    pub eligible_total: Money,
    /// Approved claims awaiting payment
    pub approved_count: usize,
    /// Total reimbursement across approved claims
    pub approved_total: Money,
    /// Total reimbursement across completed (not yet reviewed) claims
    pub completed_total: Money,
    /// Mean reimbursement per approved claim, zero when none are approved
    pub average_approved: Money,
}

impl ClaimSummary {
    /// Computes the summary in one pass over the claims
    pub fn compute<V: ClaimView>(tariff: &Tariff, claims: &[V]) -> Self {
        let eligible: Vec<&V> = claims.iter().filter(|c| is_eligible(*c)).collect();

        let eligible_total = eligible
            .iter()
            .fold(Money::zero(tariff.currency), |acc, c| {
                acc + tariff.for_claim(*c)
            });
        let eligible_distance_km = eligible.iter().map(|c| u64::from(c.distance_km())).sum();

        let approved_count = claims
            .iter()
            .filter(|c| c.status() == ClaimStatus::Approved)
            .count();

        Self {
            eligible_count: eligible.len(),
            eligible_distance_km,
            eligible_total,
            approved_count,
            approved_total: total_for_status(tariff, ClaimStatus::Approved, claims),
            completed_total: total_for_status(tariff, ClaimStatus::Completed, claims),
            average_approved: average_approved(tariff, claims),
        }
    }
}
