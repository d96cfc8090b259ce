//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, Money, VisitId};
use domain_claims::{Claim, ClaimStatus, MedicalAid, Patient, PendingClaim};

use crate::fixtures::{EntityFixtures, IdFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for constructing pending claims
pub struct TestPendingClaimBuilder {
    claim_id: ClaimId,
    visit_id: VisitId,
    medical_aid: MedicalAid,
    patient: Patient,
    claim_amount: Money,
    created_at: DateTime<Utc>,
}

impl Default for TestPendingClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPendingClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_id: IdFixtures::claim_id(),
            visit_id: IdFixtures::visit_id(),
            medical_aid: EntityFixtures::medical_aid(),
            patient: EntityFixtures::patient(),
            claim_amount: MoneyFixtures::usd_bill(),
            created_at: TemporalFixtures::claim_created(),
        }
    }

    /// Sets the claim ID
    pub fn with_claim_id(mut self, id: i64) -> Self {
        self.claim_id = ClaimId::new(id);
        self
    }

    /// Sets the visit ID
    pub fn with_visit_id(mut self, id: i64) -> Self {
        self.visit_id = VisitId::new(id);
        self
    }

    /// Sets the medical aid
    pub fn with_medical_aid(mut self, medical_aid: MedicalAid) -> Self {
        self.medical_aid = medical_aid;
        self
    }

    /// Sets the medical aid name, keeping its ID
    pub fn with_medical_aid_name(mut self, name: impl Into<String>) -> Self {
        self.medical_aid.name = name.into();
        self
    }

    /// Sets the patient
    pub fn with_patient(mut self, patient: Patient) -> Self {
        self.patient = patient;
        self
    }

    /// Sets the patient's first and last name
    pub fn with_patient_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.patient.first_name = first.into();
        self.patient.last_name = last.into();
        self
    }

    /// Sets the claim amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.claim_amount = amount;
        self
    }

    /// Sets the creation time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// The raw claim record, before associations are attached
    pub fn build_claim(&self) -> Claim {
        Claim {
            id: self.claim_id,
            visit_id: self.visit_id,
            medical_aid_id: self.medical_aid.id,
            patient_id: self.patient.id,
            claim_amount: self.claim_amount,
            status: ClaimStatus::Pending,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }

    /// Builds the pending claim
    ///
    /// # Panics
    ///
    /// Never for builder-made data; the claim always references the
    /// builder's own medical aid and patient.
    pub fn build(self) -> PendingClaim {
        let claim = self.build_claim();
        PendingClaim::new(claim, self.medical_aid, self.patient)
            .expect("builder produces consistent pending claims")
    }
}

/// `count` pending claims with ids `1..=count`, visit ids `1000 + id` and
/// creation times one minute apart (claim 1 oldest)
pub fn pending_claims(count: usize) -> Vec<PendingClaim> {
    (1..=count)
        .map(|n| {
            let id = i64::try_from(n).expect("claim count fits in i64");
            TestPendingClaimBuilder::new()
                .with_claim_id(id)
                .with_visit_id(1000 + id)
                .with_created_at(TemporalFixtures::minutes_later(id))
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_is_pending() {
        let claim = TestPendingClaimBuilder::new().build();

        assert!(claim.claim().is_pending());
        assert_eq!(claim.visit_id(), IdFixtures::visit_id());
        assert_eq!(claim.patient().full_name(), "Thandi Mokoena");
    }

    #[test]
    fn test_pending_claims_are_distinct() {
        let claims = pending_claims(3);

        let visits: Vec<i64> = claims.iter().map(|c| c.visit_id().value()).collect();
        assert_eq!(visits, vec![1001, 1002, 1003]);
        assert!(claims[0].created_at() < claims[2].created_at());
    }
}
