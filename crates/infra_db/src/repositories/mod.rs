//! Repository implementations for domain entities
//!
//! Each repository wraps a connection pool, owns its SQL, and maps rows
//! onto domain types. Repositories implement their domain's port trait so
//! the HTTP layer never sees SQLx types.

pub mod claims;

pub use claims::{PgClaimsRepository, PendingClaimRow};
