//! Database error types
//!
//! Failures of the claims queries, classified so the HTTP layer can tell a
//! database that is down from data it cannot show.

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while reading claims
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A joined record a claim depends on is missing
    #[error("Claim {claim_id} has no {association}")]
    MissingAssociation {
        claim_id: i64,
        association: &'static str,
    },

    /// A stored value could not be mapped onto a domain type
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(#[from] sqlx::migrate::MigrateError),

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a missing association error for a claim row
    pub fn missing_association(claim_id: i64, association: &'static str) -> Self {
        DatabaseError::MissingAssociation { claim_id, association }
    }

    /// Whether retrying against a recovered database could succeed
    pub fn is_connection_error(&self) -> bool {
        match self {
            DatabaseError::ConnectionFailed(_) => true,
            DatabaseError::SqlError(e) => is_unreachable(e),
            _ => false,
        }
    }
}

/// Errors raised before a query reaches PostgreSQL
fn is_unreachable(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_)
    )
}

/// Maps database failures onto the port error vocabulary the HTTP layer
/// understands
impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::MissingAssociation { claim_id, association } => {
                PortError::missing_association("Claim", claim_id, association)
            }
            DatabaseError::ConnectionFailed(message) => PortError::connection(message),
            DatabaseError::SqlError(e) if is_unreachable(&e) => PortError::Connection {
                message: e.to_string(),
                source: Some(Box::new(e)),
            },
            DatabaseError::SqlError(e) => PortError::Internal {
                message: format!("Query failed: {e}"),
                source: Some(Box::new(e)),
            },
            other => PortError::internal(other.to_string()),
        }
    }
}
