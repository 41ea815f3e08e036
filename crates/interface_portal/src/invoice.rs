//! Reimbursement invoice assembly
//!
//! Builds the structured invoice for one visit from the record and the
//! tariff breakdown, and renders it as the plain-text artifact the portal
//! offers for download.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use core_kernel::{InvoiceId, Money, PatientId, ReceiptRef};
use domain_patient::PatientVisitRecord;
use domain_reimbursement::{Tariff, TransportMethod};

/// Payout account details printed on the invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankingDetails {
    pub bsb: String,
    pub account_number: String,
    /// Account is held in the patient's name
    pub account_name: String,
}

/// One priced line on the invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub amount: Money,
}

/// A reimbursement invoice for one trial visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Human-readable invoice number
    pub invoice_number: String,
    /// Patient the reimbursement is owed to
    pub patient_id: PatientId,
    pub patient_name: String,
    pub study_id: String,
    pub study_name: String,
    /// The visit being reimbursed
    pub visit_date: DateTime<Utc>,
    pub transport_method: TransportMethod,
    pub distance_km: u32,
    pub visit_duration_hours: u32,
    /// Priced lines (kilometre reimbursement, meal allowance)
    pub lines: Vec<InvoiceLine>,
    /// Sum of the lines
    pub total: Money,
    pub banking: BankingDetails,
    /// Receipt references attached to the claim
    pub receipts: Vec<ReceiptRef>,
    /// Assembly timestamp
    pub issued_at: DateTime<Utc>,
}

impl Invoice {
    /// Assembles the invoice for a record under the given tariff
    pub fn for_record(record: &PatientVisitRecord, tariff: &Tariff) -> Self {
        let breakdown = tariff.breakdown(
            record.transport_method,
            record.distance_km,
            record.visit_duration_hours,
        );

        let lines = vec![
            InvoiceLine {
                description: format!(
                    "Kilometre reimbursement ({} km at {}/km)",
                    record.distance_km, tariff.km_rate
                ),
                amount: breakdown.travel,
            },
            InvoiceLine {
                description: format!(
                    "Meal allowance (visits over {} hours)",
                    tariff.meal_threshold_hours
                ),
                amount: breakdown.meal,
            },
        ];

        Self {
            id: InvoiceId::new_v7(),
            invoice_number: generate_invoice_number(),
            patient_id: record.id,
            patient_name: record.name.clone(),
            study_id: record.study_id.clone(),
            study_name: record.study_name.clone(),
            visit_date: record.scheduled_visit,
            transport_method: record.transport_method,
            distance_km: record.distance_km,
            visit_duration_hours: record.visit_duration_hours,
            lines,
            total: breakdown.total,
            banking: BankingDetails {
                bsb: record.bsb.clone(),
                account_number: record.account_number.clone(),
                account_name: record.name.clone(),
            },
            receipts: record.receipts.clone(),
            issued_at: Utc::now(),
        }
    }

    /// Renders the downloadable plain-text artifact
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "CLINICAL TRIAL REIMBURSEMENT INVOICE");
        let _ = writeln!(out, "{}", self.invoice_number);
        let _ = writeln!(out);
        let _ = writeln!(out, "Patient ID:       {}", self.patient_id);
        let _ = writeln!(out, "Patient Name:     {}", self.patient_name);
        let _ = writeln!(out, "Study:            {}", self.study_name);
        let _ = writeln!(out, "Visit Date:       {}", self.visit_date.format("%Y-%m-%d"));
        let _ = writeln!(out, "Transport Method: {}", self.transport_method.label());
        let _ = writeln!(out, "Distance:         {} km", self.distance_km);
        let _ = writeln!(out, "Duration:         {} hours", self.visit_duration_hours);
        let _ = writeln!(out);
        for line in &self.lines {
            let _ = writeln!(out, "{}: {}", line.description, line.amount);
        }
        let _ = writeln!(out, "TOTAL REIMBURSEMENT: {}", self.total);
        let _ = writeln!(out);
        let _ = writeln!(out, "BANKING DETAILS");
        let _ = writeln!(out, "BSB:            {}", self.banking.bsb);
        let _ = writeln!(out, "Account Number: {}", self.banking.account_number);
        let _ = writeln!(out, "Account Name:   {}", self.banking.account_name);
        let _ = writeln!(out);
        let _ = writeln!(out, "ATTACHED RECEIPTS");
        if self.receipts.is_empty() {
            let _ = writeln!(out, "No receipts attached");
        } else {
            for receipt in &self.receipts {
                let _ = writeln!(out, "- {receipt}");
            }
        }

        out
    }
}

/// Generates a unique invoice number
fn generate_invoice_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("INV-{}", duration.as_millis() % 10_000_000_000)
}
