//! Reimbursement & Claim Engine
//!
//! This crate implements the computational core of the travel reimbursement
//! programme: the tariff calculation, the claim status state machine, and
//! the summary metrics the dashboards display.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Upcoming -> Completed -> Approved -> Paid
//!                       \-> Rejected
//! ```
//!
//! Approval is guarded: public-transport claims can never be approved.

pub mod claim;
pub mod error;
pub mod metrics;
pub mod tariff;
pub mod transport;
pub mod view;

pub use claim::{ClaimAction, ClaimStatus};
pub use error::ClaimError;
pub use metrics::{average_approved, is_eligible, total_for_status, ClaimSummary};
pub use tariff::{ReimbursementBreakdown, Tariff};
pub use transport::TransportMethod;
pub use view::ClaimView;
