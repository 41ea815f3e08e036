//! Transport methods and reimbursement eligibility

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a patient travelled to a trial visit
///
/// Serialized in lowercase to match the values recorded on claim forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMethod {
    /// Private car, reimbursed per kilometre
    Car,
    /// Taxi or rideshare, reimbursed per kilometre
    Taxi,
    /// Public transport, categorically not reimbursable
    Public,
}

impl TransportMethod {
    /// Returns true if distance travelled by this method is reimbursable
    pub fn is_reimbursable(&self) -> bool {
        !matches!(self, TransportMethod::Public)
    }

    /// Human-facing label for dashboards and invoices
    pub fn label(&self) -> &'static str {
        match self {
            TransportMethod::Car => "Car",
            TransportMethod::Taxi => "Taxi",
            TransportMethod::Public => "Public",
        }
    }
}

impl fmt::Display for TransportMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportMethod::Car => "car",
            TransportMethod::Taxi => "taxi",
            TransportMethod::Public => "public",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TransportMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(TransportMethod::Car),
            "taxi" => Ok(TransportMethod::Taxi),
            "public" => Ok(TransportMethod::Public),
            other => Err(format!("unknown transport method: {other:?}")),
        }
    }
}
