//! Role-scoped operator sessions
//!
//! Every operation runs against an explicit session carrying the operator
//! role and the record-store handle; there is no ambient global state. An
//! operation the role is not entitled to fails with `AccessDenied`, the
//! same way for every caller, instead of being hidden behind a disabled
//! button.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{PatientId, SessionId};
use domain_patient::{NewPatientRecord, PatientDirectory, PatientVisitRecord};
use domain_reimbursement::{ClaimSummary, Tariff};

use crate::directions;
use crate::error::PortalError;
use crate::export;
use crate::invoice::Invoice;

/// Operator roles available at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorRole {
    /// Trial participant: reads records and registers new ones
    Participant,
    /// Study coordinator: reviews completed visits
    Coordinator,
    /// Admin/finance: processes payments and exports
    Admin,
}

impl OperatorRole {
    /// May complete visits, approve/reject claims, and read metrics
    pub fn can_review_claims(&self) -> bool {
        matches!(self, OperatorRole::Coordinator | OperatorRole::Admin)
    }

    /// May mark claims paid, assemble invoices, and export payment data
    pub fn can_process_payments(&self) -> bool {
        matches!(self, OperatorRole::Admin)
    }
}

impl fmt::Display for OperatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperatorRole::Participant => "participant",
            OperatorRole::Coordinator => "coordinator",
            OperatorRole::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

/// One operator's working session over the record store
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    role: OperatorRole,
    directory: PatientDirectory,
    tariff: Tariff,
}

impl Session {
    /// Opens a session for a role over a record store
    pub fn new(role: OperatorRole, directory: PatientDirectory) -> Self {
        let id = SessionId::new_v7();
        tracing::info!(session = %id, %role, "session opened");
        Self {
            id,
            role,
            directory,
            tariff: Tariff::default(),
        }
    }

    /// Overrides the programme tariff for this session
    pub fn with_tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn role(&self) -> OperatorRole {
        self.role
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[PatientVisitRecord] {
        self.directory.list()
    }

    /// Looks up one record
    pub fn find(&self, id: PatientId) -> Result<&PatientVisitRecord, PortalError> {
        Ok(self.directory.find(id)?)
    }

    /// Free-text search over name, identifier, and study name
    pub fn search(&self, term: &str) -> Vec<&PatientVisitRecord> {
        self.directory.search(term)
    }

    /// Registers a new patient record
    pub fn register_patient(&mut self, input: NewPatientRecord) -> Result<PatientId, PortalError> {
        let record = self.directory.add_record(input)?;
        Ok(record.id)
    }

    /// Records that a visit has taken place
    pub fn complete_visit(&mut self, id: PatientId) -> Result<(), PortalError> {
        self.require(self.role.can_review_claims(), "complete visits")?;
        Ok(self.directory.find_mut(id)?.complete_visit()?)
    }

    /// Approves a completed claim
    pub fn approve_claim(&mut self, id: PatientId) -> Result<(), PortalError> {
        self.require(self.role.can_review_claims(), "approve claims")?;
        Ok(self.directory.find_mut(id)?.approve()?)
    }

    /// Rejects a completed claim
    pub fn reject_claim(&mut self, id: PatientId) -> Result<(), PortalError> {
        self.require(self.role.can_review_claims(), "reject claims")?;
        Ok(self.directory.find_mut(id)?.reject()?)
    }

    /// Records the payout of an approved claim
    pub fn mark_paid(&mut self, id: PatientId) -> Result<(), PortalError> {
        self.require(self.role.can_process_payments(), "process payments")?;
        Ok(self.directory.find_mut(id)?.mark_paid()?)
    }

    /// Dashboard summary metrics over the current records
    pub fn summary(&self) -> Result<ClaimSummary, PortalError> {
        self.require(self.role.can_review_claims(), "view claim metrics")?;
        Ok(ClaimSummary::compute(&self.tariff, self.directory.list()))
    }

    /// Assembles the reimbursement invoice for one record
    pub fn invoice_for(&self, id: PatientId) -> Result<Invoice, PortalError> {
        self.require(self.role.can_process_payments(), "generate invoices")?;
        let record = self.directory.find(id)?;
        Ok(Invoice::for_record(record, &self.tariff))
    }

    /// Renders the delimited payment export over approved claims
    pub fn payment_export(&self, delimiter: &str) -> Result<String, PortalError> {
        self.require(self.role.can_process_payments(), "export payment data")?;
        let rows = export::payment_rows(self.directory.list(), &self.tariff);
        Ok(export::to_delimited(&rows, delimiter))
    }

    /// Builds the external directions link for one record's journey
    pub fn directions_for(
        &self,
        id: PatientId,
        maps_base_url: &str,
    ) -> Result<String, PortalError> {
        let record = self.directory.find(id)?;
        Ok(directions::directions_url(
            maps_base_url,
            &record.address,
            record.hospital_address(),
        ))
    }

    /// Closes the session, handing the record store back
    pub fn into_directory(self) -> PatientDirectory {
        tracing::info!(session = %self.id, "session closed");
        self.directory
    }

    fn require(&self, allowed: bool, operation: &'static str) -> Result<(), PortalError> {
        if allowed {
            Ok(())
        } else {
            tracing::warn!(session = %self.id, role = %self.role, operation, "access denied");
            Err(PortalError::AccessDenied {
                role: self.role,
                operation,
            })
        }
    }
}
