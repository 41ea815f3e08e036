//! Reimbursement engine errors

use thiserror::Error;

use crate::claim::{ClaimAction, ClaimStatus};

/// Errors raised by claim status transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("invalid status transition: cannot {action} a claim in status {from}")]
    InvalidTransition {
        from: ClaimStatus,
        action: ClaimAction,
    },

    #[error("public transport claims are not eligible for approval")]
    PublicTransportNotApprovable,
}
