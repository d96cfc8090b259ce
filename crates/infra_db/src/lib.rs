//! Infrastructure Database Layer
//!
//! PostgreSQL access for the billing system using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Repositories implement the
//! domain port traits, so handlers depend on `ClaimsPort` and never on SQL.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PgClaimsRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/hospital_billing")).await?;
//! run_migrations(&pool).await?;
//! let repo = PgClaimsRepository::new(pool, Currency::ZAR);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool, MIGRATOR};
pub use error::DatabaseError;
pub use repositories::{PgClaimsRepository, PendingClaimRow};
