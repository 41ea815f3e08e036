//! Strongly-typed identifiers for domain entities
//!
//! Patient identifiers are sequential and human-facing (`PT001`, `PT002`,
//! ...), matching the numbering printed on trial paperwork. Generated
//! documents (invoices, sessions) use UUID-backed newtypes instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Width of the zero-padded ordinal in a patient identifier
const PATIENT_ID_WIDTH: usize = 3;

/// Error parsing a patient identifier
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid patient id: {0:?} (expected PT followed by digits)")]
pub struct PatientIdError(pub String);

/// Sequential patient identifier in the `PT` + zero-padded ordinal form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct PatientId(u32);

impl PatientId {
    /// Creates an identifier from its ordinal (1 -> `PT001`)
    pub fn from_ordinal(ordinal: u32) -> Self {
        Self(ordinal)
    }

    /// Returns the ordinal behind this identifier
    pub fn ordinal(&self) -> u32 {
        self.0
    }

    /// Returns the identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PT{:0width$}", self.0, width = PATIENT_ID_WIDTH)
    }
}

impl FromStr for PatientId {
    type Err = PatientIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("PT")
            .ok_or_else(|| PatientIdError(s.to_string()))?;
        let ordinal: u32 = digits
            .parse()
            .map_err(|_| PatientIdError(s.to_string()))?;
        Ok(Self(ordinal))
    }
}

impl From<PatientId> for String {
    fn from(id: PatientId) -> String {
        id.to_string()
    }
}

impl TryFrom<String> for PatientId {
    type Error = PatientIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Opaque reference to an uploaded receipt artifact
///
/// The store never interprets these; they are listed on invoices verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptRef(String);

impl ReceiptRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Document identifiers
define_id!(InvoiceId, "INV");

// Operator session identifiers
define_id!(SessionId, "SES");
