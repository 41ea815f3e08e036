//! Core Kernel - Foundational types for the trial travel reimbursement system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Sequential patient identifiers and UUID-backed document identifiers

pub mod identifiers;
pub mod money;

pub use identifiers::{InvoiceId, PatientId, PatientIdError, ReceiptRef, SessionId};
pub use money::{Currency, Money, MoneyError};
