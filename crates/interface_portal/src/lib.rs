//! Operator Portal Layer
//!
//! The presentation-adjacent surface over the patient store and the
//! reimbursement engine: role-scoped sessions, invoice assembly, the
//! delimited payment export, and external directions links.
//!
//! Rendering (dashboards, charts, PDF styling) is out of scope; this crate
//! produces the structured data and plain-text artifacts a renderer
//! consumes.

pub mod config;
pub mod directions;
pub mod error;
pub mod export;
pub mod invoice;
pub mod session;

pub use config::PortalConfig;
pub use directions::directions_url;
pub use error::PortalError;
pub use export::{payment_rows, to_delimited, PaymentRow};
pub use invoice::{BankingDetails, Invoice, InvoiceLine};
pub use session::{OperatorRole, Session};
