//! Delimited payment export
//!
//! Renders the approved-claim payment queue as delimited text with a header
//! row, the way the finance team pulls it into their banking spreadsheet.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, PatientId};
use domain_patient::PatientVisitRecord;
use domain_reimbursement::{ClaimStatus, Tariff, TransportMethod};

/// Column headers, in output order
const HEADERS: [&str; 13] = [
    "patient_id",
    "name",
    "study",
    "transport",
    "distance_km",
    "duration_hours",
    "travel_cost",
    "meal_allowance",
    "total",
    "bsb",
    "account_number",
    "hospital",
    "receipts",
];

/// One payment-ready claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRow {
    pub patient_id: PatientId,
    pub name: String,
    pub study_name: String,
    pub transport_method: TransportMethod,
    pub distance_km: u32,
    pub duration_hours: u32,
    pub travel_cost: Money,
    pub meal_allowance: Money,
    pub total: Money,
    pub bsb: String,
    pub account_number: String,
    pub hospital: String,
    pub receipt_count: usize,
}

/// Collects the payment rows for every approved claim
pub fn payment_rows(records: &[PatientVisitRecord], tariff: &Tariff) -> Vec<PaymentRow> {
    records
        .iter()
        .filter(|r| r.status == ClaimStatus::Approved)
        .map(|r| {
            let breakdown =
                tariff.breakdown(r.transport_method, r.distance_km, r.visit_duration_hours);
            PaymentRow {
                patient_id: r.id,
                name: r.name.clone(),
                study_name: r.study_name.clone(),
                transport_method: r.transport_method,
                distance_km: r.distance_km,
                duration_hours: r.visit_duration_hours,
                travel_cost: breakdown.travel,
                meal_allowance: breakdown.meal,
                total: breakdown.total,
                bsb: r.bsb.clone(),
                account_number: r.account_number.clone(),
                hospital: r.hospital.name().to_string(),
                receipt_count: r.receipts.len(),
            }
        })
        .collect()
}

/// Renders rows as delimited text with a header line
pub fn to_delimited(rows: &[PaymentRow], delimiter: &str) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADERS.join(delimiter));

    for row in rows {
        let fields = [
            row.patient_id.to_string(),
            row.name.clone(),
            row.study_name.clone(),
            row.transport_method.label().to_string(),
            row.distance_km.to_string(),
            row.duration_hours.to_string(),
            row.travel_cost.to_string(),
            row.meal_allowance.to_string(),
            row.total.to_string(),
            row.bsb.clone(),
            row.account_number.clone(),
            row.hospital.clone(),
            row.receipt_count.to_string(),
        ];
        let escaped: Vec<String> = fields.iter().map(|f| escape(f, delimiter)).collect();
        lines.push(escaped.join(delimiter));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

// Quote a field when it would break the row shape.
fn escape(field: &str, delimiter: &str) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
