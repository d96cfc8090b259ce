//! Claims Domain
//!
//! Claims raised against medical aids for patient visits, and the pending
//! claims table built from them.
//!
//! # Flow
//!
//! ```text
//! ClaimsPort::pending_claims -> Page<PendingClaim> -> ClaimsTable -> HTML view
//!                                                                 -> export file
//! ```

pub mod claim;
pub mod table;
pub mod export;
pub mod ports;
pub mod error;

pub use claim::{Claim, ClaimStatus, MedicalAid, Patient, PendingClaim};
pub use table::{ClaimRow, ClaimsTable, RowContext, HEADERS};
pub use export::{encode_uri_component, serialize_rows, serialize_table, DownloadLink, ExportFormat};
pub use ports::ClaimsPort;
pub use error::{ClaimError, ExportError};
