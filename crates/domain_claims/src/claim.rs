//! Claim aggregate and the records it is billed against

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, MedicalAidId, Money, PatientId, VisitId};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Submitted to the medical aid, awaiting an outcome
    Pending,
    /// Accepted by the medical aid
    Approved,
    /// Rejected by the medical aid
    Rejected,
    /// Settled
    Paid,
}

impl ClaimStatus {
    /// Value stored in the `claims.status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ClaimStatus::Pending),
            "approved" => Ok(ClaimStatus::Approved),
            "rejected" => Ok(ClaimStatus::Rejected),
            "paid" => Ok(ClaimStatus::Paid),
            other => Err(ClaimError::UnknownStatus(other.to_string())),
        }
    }
}

/// A medical aid (insurance provider)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAid {
    pub id: MedicalAidId,
    pub name: String,
}

/// A patient as known to billing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    /// Membership number on the patient's medical aid
    pub medical_aid_number: String,
    /// Dependant code on the membership (`00` for the main member)
    pub medical_aid_suffix: String,
}

impl Patient {
    /// First and last name separated by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A claim raised against a medical aid for one visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub visit_id: VisitId,
    pub medical_aid_id: MedicalAidId,
    pub patient_id: PatientId,
    pub claim_amount: Money,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }
}

/// A pending claim with its medical aid and patient resolved
///
/// Holding both associations by value means a row of the pending claims
/// table can never be built from a claim whose relations failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingClaim {
    claim: Claim,
    medical_aid: MedicalAid,
    patient: Patient,
}

impl PendingClaim {
    /// Joins a claim to its associations, checking they belong to it
    pub fn new(claim: Claim, medical_aid: MedicalAid, patient: Patient) -> Result<Self, ClaimError> {
        if !claim.is_pending() {
            return Err(ClaimError::NotPending {
                claim_id: claim.id,
                status: claim.status,
            });
        }
        if claim.medical_aid_id != medical_aid.id {
            return Err(ClaimError::AssociationMismatch {
                claim_id: claim.id,
                association: "medical aid",
            });
        }
        if claim.patient_id != patient.id {
            return Err(ClaimError::AssociationMismatch {
                claim_id: claim.id,
                association: "patient",
            });
        }
        Ok(Self { claim, medical_aid, patient })
    }

    pub fn claim(&self) -> &Claim {
        &self.claim
    }

    pub fn medical_aid(&self) -> &MedicalAid {
        &self.medical_aid
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn visit_id(&self) -> VisitId {
        self.claim.visit_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.claim.created_at
    }
}
