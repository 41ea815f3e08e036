//! Patient Record Store
//!
//! Holds the set of patient/visit records behind the reimbursement engine:
//! the record aggregate, registration validation, the in-memory directory,
//! and the demo seed data.
//!
//! Registration is decomposed into a pure validation step and a separate
//! mutation step, so the rules are testable without any form harness.

pub mod directory;
pub mod error;
pub mod hospital;
pub mod record;
pub mod seed;
pub mod validation;

pub use directory::PatientDirectory;
pub use error::{RecordError, ValidationErrors};
pub use hospital::Hospital;
pub use record::PatientVisitRecord;
pub use validation::{FieldError, NewPatientRecord, RecordValidator, ValidationResult};
