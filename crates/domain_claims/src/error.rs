//! Claims domain errors

use thiserror::Error;

use core_kernel::ClaimId;
use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),

    #[error("Claim {claim_id} is {status}, not pending")]
    NotPending { claim_id: ClaimId, status: ClaimStatus },

    #[error("Claim {claim_id} does not reference the supplied {association}")]
    AssociationMismatch {
        claim_id: ClaimId,
        association: &'static str,
    },
}

/// Errors raised while serializing the claims table for download
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export buffer error: {0}")]
    Buffer(String),
}
