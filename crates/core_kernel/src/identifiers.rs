//! Strongly-typed identifiers for domain entities
//!
//! The billing database keys every table with a `BIGINT` surrogate key.
//! Wrapping them in newtypes keeps a visit id from being passed where a
//! patient id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates from a raw database key
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw database key
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(ClaimId);
define_id!(VisitId);
define_id!(PatientId);
define_id!(MedicalAidId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_id_displays_raw_key() {
        assert_eq!(VisitId::new(1042).to_string(), "1042");
    }

    #[test]
    fn test_id_parsing() {
        let parsed: ClaimId = " 77 ".parse().unwrap();
        assert_eq!(parsed, ClaimId::new(77));
        assert!("abc".parse::<ClaimId>().is_err());
    }

    #[test]
    fn test_i64_conversion() {
        let id = PatientId::from(9);
        let back: i64 = id.into();
        assert_eq!(back, 9);
    }
}
