//! Trial site hospitals
//!
//! The programme runs across a fixed set of Perth hospitals; each carries
//! the street address used as the destination for directions links and
//! distance claims.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A participating trial hospital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hospital {
    RoyalPerth,
    SirCharlesGairdner,
    FionaStanley,
    Fremantle,
    PrincessMargaret,
}

impl Hospital {
    /// All participating hospitals, in registration-form order
    pub fn all() -> [Hospital; 5] {
        [
            Hospital::RoyalPerth,
            Hospital::SirCharlesGairdner,
            Hospital::FionaStanley,
            Hospital::Fremantle,
            Hospital::PrincessMargaret,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Hospital::RoyalPerth => "Royal Perth Hospital",
            Hospital::SirCharlesGairdner => "Sir Charles Gairdner Hospital",
            Hospital::FionaStanley => "Fiona Stanley Hospital",
            Hospital::Fremantle => "Fremantle Hospital",
            Hospital::PrincessMargaret => "Princess Margaret Hospital",
        }
    }

    /// Street address, used as the destination for travel claims
    pub fn address(&self) -> &'static str {
        match self {
            Hospital::RoyalPerth => "197 Wellington Street, Perth WA 6000",
            Hospital::SirCharlesGairdner => "Hospital Avenue, Nedlands WA 6009",
            Hospital::FionaStanley => "11 Robin Warren Drive, Murdoch WA 6150",
            Hospital::Fremantle => "Alma Street, Fremantle WA 6160",
            Hospital::PrincessMargaret => "Roberts Road, Subiaco WA 6008",
        }
    }
}

impl fmt::Display for Hospital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
