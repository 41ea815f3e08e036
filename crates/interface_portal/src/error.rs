//! Portal error handling

use thiserror::Error;

use domain_patient::RecordError;
use domain_reimbursement::ClaimError;

use crate::session::OperatorRole;

/// Portal error types
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("role {role} may not {operation}")]
    AccessDenied {
        role: OperatorRole,
        operation: &'static str,
    },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Claim(#[from] ClaimError),
}
