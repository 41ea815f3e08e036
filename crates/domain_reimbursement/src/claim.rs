//! Claim status state machine
//!
//! Transitions are operator-invoked and checked against an explicit table;
//! an illegal (status, action) pair is rejected uniformly rather than being
//! merely hidden by the presentation layer. Approval additionally requires
//! a reimbursable transport method.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClaimError;
use crate::transport::TransportMethod;

/// Lifecycle status of a travel claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Visit scheduled, claim not yet claimable
    Upcoming,
    /// Visit has taken place, awaiting coordinator review
    Completed,
    /// Approved for payment
    Approved,
    /// Rejected by the coordinator
    Rejected,
    /// Paid out
    Paid,
}

impl ClaimStatus {
    /// Returns true if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Rejected | ClaimStatus::Paid)
    }

    /// Applies an operator action, returning the resulting status
    ///
    /// The record is left for the caller to mutate only on `Ok`; an error
    /// carries enough context to tell the operator what was illegal.
    pub fn apply(
        self,
        action: ClaimAction,
        transport: TransportMethod,
    ) -> Result<ClaimStatus, ClaimError> {
        use ClaimAction::*;
        use ClaimStatus::*;

        match (self, action) {
            (Upcoming, Complete) => Ok(Completed),
            (Completed, Approve) if transport.is_reimbursable() => Ok(Approved),
            (Completed, Approve) => Err(ClaimError::PublicTransportNotApprovable),
            (Completed, Reject) => Ok(Rejected),
            (Approved, MarkPaid) => Ok(Paid),
            (from, action) => Err(ClaimError::InvalidTransition { from, action }),
        }
    }

    /// Actions currently legal for a claim in this status
    ///
    /// Drives button-style presentations; the guard on approval is applied
    /// here too so a public-transport claim never offers an approve action.
    pub fn available_actions(&self, transport: TransportMethod) -> Vec<ClaimAction> {
        use ClaimAction::*;

        [Complete, Approve, Reject, MarkPaid]
            .into_iter()
            .filter(|action| self.apply(*action, transport).is_ok())
            .collect()
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimStatus::Upcoming => "upcoming",
            ClaimStatus::Completed => "completed",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Paid => "paid",
        };
        write!(f, "{s}")
    }
}

/// Operator actions on a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimAction {
    /// Record that the visit has taken place
    Complete,
    /// Approve the claim for payment
    Approve,
    /// Reject the claim
    Reject,
    /// Record the payout
    MarkPaid,
}

impl fmt::Display for ClaimAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimAction::Complete => "complete",
            ClaimAction::Approve => "approve",
            ClaimAction::Reject => "reject",
            ClaimAction::MarkPaid => "mark paid",
        };
        write!(f, "{s}")
    }
}
