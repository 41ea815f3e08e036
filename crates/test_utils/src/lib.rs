//! Shared test utilities for the reimbursement test suite
//!
//! Provides deterministic fixtures, a record builder with sensible
//! defaults, and proptest strategies that respect the registration
//! invariants.

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::TestRecordBuilder;
pub use fixtures::{RecordFixtures, RegistrationFixtures};
