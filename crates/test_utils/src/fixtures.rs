//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the billing entities.
//! These fixtures are consistent and predictable for unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{ClaimId, Currency, MedicalAidId, Money, PatientId, VisitId};
use domain_claims::{MedicalAid, Patient};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical consultation bill in USD
    pub fn usd_bill() -> Money {
        Money::new(dec!(1250.00), Currency::USD)
    }

    /// A bill in rand
    pub fn zar_bill() -> Money {
        Money::new(dec!(780.25), Currency::ZAR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Creation time of the default claim (14 May 2024 09:30 UTC)
    pub fn claim_created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap()
    }

    /// `n` minutes after [`TemporalFixtures::claim_created`]
    pub fn minutes_later(n: i64) -> DateTime<Utc> {
        Self::claim_created() + Duration::minutes(n)
    }
}

/// Fixture for record identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn claim_id() -> ClaimId {
        ClaimId::new(1)
    }

    pub fn visit_id() -> VisitId {
        VisitId::new(4821)
    }

    pub fn medical_aid_id() -> MedicalAidId {
        MedicalAidId::new(3)
    }

    pub fn patient_id() -> PatientId {
        PatientId::new(11)
    }
}

/// Fixture for the associated entities of a claim
pub struct EntityFixtures;

impl EntityFixtures {
    pub fn medical_aid() -> MedicalAid {
        MedicalAid {
            id: IdFixtures::medical_aid_id(),
            name: "Discovery Health".to_string(),
        }
    }

    pub fn patient() -> Patient {
        Patient {
            id: IdFixtures::patient_id(),
            first_name: "Thandi".to_string(),
            last_name: "Mokoena".to_string(),
            medical_aid_number: "DH0099812".to_string(),
            medical_aid_suffix: "01".to_string(),
        }
    }

    /// A patient whose name needs HTML escaping
    pub fn patient_with_markup() -> Patient {
        Patient {
            first_name: "<b>Sean</b>".to_string(),
            last_name: "O'Neil & Co".to_string(),
            ..Self::patient()
        }
    }
}
