//! The pending claims table
//!
//! Holds the text of every cell exactly as it is shown on screen. The HTML
//! view renders from it and the exporters serialize it, so what a clerk
//! downloads is what they were looking at.

use serde::Serialize;

use core_kernel::{ClaimId, Timezone, VisitId};
use crate::claim::{ClaimStatus, PendingClaim};

/// Column headers, in display order
pub const HEADERS: [&str; 10] = [
    "Medical Aid Name",
    "Treatment Date",
    "Visit ID",
    "Patient Name",
    "Medical Aid No.",
    "Suffix",
    "Claim Date",
    "Bill Total",
    "status",
    "file",
];

/// Display settings applied while building rows
#[derive(Debug, Clone, Copy, Default)]
pub struct RowContext {
    pub timezone: Timezone,
}

/// One rendered claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimRow {
    pub claim_id: ClaimId,
    pub visit_id: VisitId,
    pub medical_aid_name: String,
    pub treatment_date: String,
    pub patient_name: String,
    pub medical_aid_number: String,
    pub medical_aid_suffix: String,
    pub claim_date: String,
    pub bill_total: String,
    pub status: ClaimStatus,
}

impl ClaimRow {
    pub fn from_claim(pending: &PendingClaim, context: &RowContext) -> Self {
        let claim = pending.claim();
        let patient = pending.patient();
        // Treatment and claim date both come from the claim's creation time.
        let created = context.timezone.format_timestamp(claim.created_at);

        Self {
            claim_id: claim.id,
            visit_id: claim.visit_id,
            medical_aid_name: pending.medical_aid().name.clone(),
            treatment_date: created.clone(),
            patient_name: patient.full_name(),
            medical_aid_number: patient.medical_aid_number.clone(),
            medical_aid_suffix: patient.medical_aid_suffix.clone(),
            claim_date: created,
            bill_total: claim.claim_amount.to_string(),
            status: claim.status,
        }
    }

    /// Visible text of each cell, trimmed, in [`HEADERS`] order
    ///
    /// The file column holds only an icon link, so its text is empty.
    pub fn cells(&self) -> Vec<String> {
        let visit_id = self.visit_id.to_string();
        let cells: [&str; 10] = [
            &self.medical_aid_name,
            &self.treatment_date,
            &visit_id,
            &self.patient_name,
            &self.medical_aid_number,
            &self.medical_aid_suffix,
            &self.claim_date,
            &self.bill_total,
            self.status.as_str(),
            "",
        ];
        cells.iter().map(|cell| cell.trim().to_string()).collect()
    }
}

/// Header plus one row per claim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimsTable {
    rows: Vec<ClaimRow>,
}

impl ClaimsTable {
    pub fn from_claims(claims: &[PendingClaim], context: &RowContext) -> Self {
        Self {
            rows: claims.iter().map(|c| ClaimRow::from_claim(c, context)).collect(),
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        &HEADERS
    }

    pub fn rows(&self) -> &[ClaimRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every `<tr>` of the rendered table as cell text, header row first
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(HEADERS.iter().map(|h| h.to_string()).collect())
            .chain(self.rows.iter().map(ClaimRow::cells))
            .collect()
    }
}
