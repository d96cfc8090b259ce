//! Core Kernel - Foundational types shared by the billing crates
//!
//! This crate provides the fundamental building blocks used across all modules:
//! - Money types with precise decimal arithmetic
//! - Timezone-aware timestamp display
//! - Strongly-typed record identifiers
//! - Length-aware pagination
//! - Port/adapter infrastructure

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod pagination;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{Timezone, TemporalError};
pub use identifiers::{ClaimId, VisitId, PatientId, MedicalAidId};
pub use pagination::{Page, PageRequest, PageElement, DEFAULT_PER_PAGE, DEFAULT_ON_EACH_SIDE};
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable, OperationMetadata,
};
pub use error::CoreError;
