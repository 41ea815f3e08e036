//! Seam between the engine and record types
//!
//! The engine never depends on how records are stored; anything that can
//! report its transport method, distance, duration, and status can be
//! priced and aggregated.

use crate::claim::ClaimStatus;
use crate::transport::TransportMethod;

/// Read-only view of one claim, as the engine sees it
pub trait ClaimView {
    fn transport_method(&self) -> TransportMethod;

    /// Distance travelled in kilometres (semantically 0 for public transport)
    fn distance_km(&self) -> u32;

    /// Visit duration in whole hours
    fn visit_duration_hours(&self) -> u32;

    fn status(&self) -> ClaimStatus;
}
