//! Test Data Generators
//!
//! Proptest strategies that keep domain invariants, plus `fake`-backed
//! generators for realistic-looking names.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Currency, MedicalAidId, Money, PatientId};
use domain_claims::{MedicalAid, Patient, PendingClaim};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use proptest::prelude::*;

use crate::builders::TestPendingClaimBuilder;

/// Strategy for generating supported Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::ZAR),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::INR),
        Just(Currency::KES),
        Just(Currency::NGN),
        Just(Currency::BWP),
    ]
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating bill totals
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for timestamps between 2020 and 2030
pub fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (1_577_836_800i64..1_893_456_000i64)
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
}

/// Strategy for free text cells, markup and delimiters included
pub fn cell_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,\"'<>&\t\n-]{0,24}"
}

/// Strategy for generating pending claims with arbitrary cell contents
pub fn pending_claim_strategy() -> impl Strategy<Value = PendingClaim> {
    (
        1i64..1_000_000,
        1i64..1_000_000,
        cell_text_strategy(),
        cell_text_strategy(),
        cell_text_strategy(),
        money_strategy(),
        timestamp_strategy(),
    )
        .prop_map(|(id, visit, aid_name, first, last, amount, created_at)| {
            TestPendingClaimBuilder::new()
                .with_claim_id(id)
                .with_visit_id(visit)
                .with_medical_aid_name(aid_name)
                .with_patient_name(first, last)
                .with_amount(amount)
                .with_created_at(created_at)
                .build()
        })
}

/// A medical aid with a generated company name
pub fn fake_medical_aid(id: i64) -> MedicalAid {
    MedicalAid {
        id: MedicalAidId::new(id),
        name: CompanyName().fake(),
    }
}

/// A patient with generated names and membership number
pub fn fake_patient(id: i64) -> Patient {
    let number: u32 = (100_000..999_999).fake();
    let suffix: u8 = (0..10).fake();
    Patient {
        id: PatientId::new(id),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        medical_aid_number: format!("MA{number}"),
        medical_aid_suffix: format!("{suffix:02}"),
    }
}

/// A pending claim for generated people
pub fn fake_pending_claim(id: i64) -> PendingClaim {
    TestPendingClaimBuilder::new()
        .with_claim_id(id)
        .with_visit_id(10_000 + id)
        .with_medical_aid(fake_medical_aid(id))
        .with_patient(fake_patient(id))
        .build()
}
