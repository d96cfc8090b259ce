//! Claims repository implementation
//!
//! This module provides database access for the pending claims view: one
//! page of pending claims joined to their medical aid and patient, plus the
//! total count the pagination control needs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::time::Instant;
use tracing::{debug, error, warn};

use core_kernel::{
    AdapterHealth, ClaimId, Currency, DomainPort, HealthCheckResult, HealthCheckable,
    MedicalAidId, Money, OperationMetadata, Page, PageRequest, PatientId, PortError, VisitId,
};
use domain_claims::{Claim, ClaimStatus, ClaimsPort, MedicalAid, Patient, PendingClaim};

use crate::error::DatabaseError;

const PENDING_CLAIMS_SQL: &str = r#"
    SELECT
        c.id                   AS claim_id,
        c.visit_id             AS visit_id,
        c.medical_aid_id       AS medical_aid_id,
        c.patient_id           AS patient_id,
        c.claim_amount         AS claim_amount,
        c.status               AS status,
        c.created_at           AS created_at,
        c.updated_at           AS updated_at,
        ma.id                  AS joined_medical_aid_id,
        ma.name                AS medical_aid_name,
        p.id                   AS joined_patient_id,
        p.first_name           AS patient_first_name,
        p.last_name            AS patient_last_name,
        p.medical_aid_number   AS patient_medical_aid_number,
        p.medical_aid_suffix   AS patient_medical_aid_suffix
    FROM claims c
    LEFT JOIN medical_aids ma ON ma.id = c.medical_aid_id
    LEFT JOIN patients p ON p.id = c.patient_id
    WHERE c.status = $1
    ORDER BY c.created_at DESC, c.id DESC
    LIMIT $2 OFFSET $3
"#;

const COUNT_PENDING_SQL: &str = "SELECT COUNT(*) FROM claims WHERE status = $1";

/// A pending claim as it comes back from the joined query
///
/// The association columns are nullable because the join is a LEFT JOIN: a
/// claim pointing at a deleted patient still comes back, and is reported
/// instead of silently dropping out of the page.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PendingClaimRow {
    pub claim_id: i64,
    pub visit_id: i64,
    pub medical_aid_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub claim_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub joined_medical_aid_id: Option<i64>,
    pub medical_aid_name: Option<String>,
    pub joined_patient_id: Option<i64>,
    pub patient_first_name: Option<String>,
    pub patient_last_name: Option<String>,
    pub patient_medical_aid_number: Option<String>,
    pub patient_medical_aid_suffix: Option<String>,
}

impl PendingClaimRow {
    /// Converts the row into a domain claim with resolved associations
    ///
    /// # Errors
    ///
    /// `DatabaseError::MissingAssociation` when the medical aid or patient
    /// did not join, `DatabaseError::InvalidData` for an unknown status.
    pub fn into_pending(self, currency: Currency) -> Result<PendingClaim, DatabaseError> {
        let Some(medical_aid_id) = self.joined_medical_aid_id else {
            return Err(DatabaseError::missing_association(self.claim_id, "medical aid"));
        };
        let Some(patient_id) = self.joined_patient_id else {
            return Err(DatabaseError::missing_association(self.claim_id, "patient"));
        };

        let status: ClaimStatus = self
            .status
            .parse()
            .map_err(|e: domain_claims::ClaimError| DatabaseError::InvalidData(e.to_string()))?;

        let claim = Claim {
            id: ClaimId::new(self.claim_id),
            visit_id: VisitId::new(self.visit_id),
            medical_aid_id: MedicalAidId::new(medical_aid_id),
            patient_id: PatientId::new(patient_id),
            claim_amount: Money::new(self.claim_amount, currency),
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        let medical_aid = MedicalAid {
            id: MedicalAidId::new(medical_aid_id),
            name: self.medical_aid_name.unwrap_or_default(),
        };
        let patient = Patient {
            id: PatientId::new(patient_id),
            first_name: self.patient_first_name.unwrap_or_default(),
            last_name: self.patient_last_name.unwrap_or_default(),
            medical_aid_number: self.patient_medical_aid_number.unwrap_or_default(),
            medical_aid_suffix: self.patient_medical_aid_suffix.unwrap_or_default(),
        };

        PendingClaim::new(claim, medical_aid, patient)
            .map_err(|e| DatabaseError::InvalidData(e.to_string()))
    }
}

/// Repository for reading claims data
///
/// Claim amounts are stored without a currency column; every amount read is
/// tagged with the billing currency the repository was built with.
#[derive(Debug, Clone)]
pub struct PgClaimsRepository {
    pool: PgPool,
    currency: Currency,
}

impl PgClaimsRepository {
    /// Creates a new PgClaimsRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    /// * `currency` - Currency of the stored claim amounts
    pub fn new(pool: PgPool, currency: Currency) -> Self {
        Self { pool, currency }
    }

    /// Counts all pending claims
    pub async fn count_pending(&self) -> Result<u64, DatabaseError> {
        let count: i64 = sqlx::query_scalar(COUNT_PENDING_SQL)
            .bind(ClaimStatus::Pending.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Fetches the raw joined rows for one page of pending claims
    pub async fn find_pending(&self, request: PageRequest) -> Result<Vec<PendingClaimRow>, DatabaseError> {
        let offset = i64::try_from(request.offset())
            .map_err(|_| DatabaseError::InvalidData(format!("offset {} out of range", request.offset())))?;

        let rows = sqlx::query_as::<_, PendingClaimRow>(PENDING_CLAIMS_SQL)
            .bind(ClaimStatus::Pending.as_str())
            .bind(i64::from(request.limit()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// One page of pending claims with associations resolved
    ///
    /// # Arguments
    ///
    /// * `request` - Page number and size
    pub async fn pending_page(&self, request: PageRequest) -> Result<Page<PendingClaim>, DatabaseError> {
        let total = self.count_pending().await?;
        let rows = self.find_pending(request).await?;

        debug!(
            page = request.page(),
            per_page = request.per_page(),
            rows = rows.len(),
            total,
            "Loaded pending claims"
        );

        Page::new(rows, total, request).try_map(|row| row.into_pending(self.currency))
    }
}

impl DomainPort for PgClaimsRepository {}

#[async_trait]
impl HealthCheckable for PgClaimsRepository {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let outcome = sqlx::query("SELECT 1").execute(&self.pool).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (status, message) = match outcome {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => {
                warn!(error = %e, "Claims database health check failed");
                (AdapterHealth::Unhealthy, Some(e.to_string()))
            }
        };

        HealthCheckResult {
            adapter_id: "postgres-claims".to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimsPort for PgClaimsRepository {
    async fn pending_claims(
        &self,
        request: PageRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Page<PendingClaim>, PortError> {
        let metadata = metadata.unwrap_or_default();
        self.pending_page(request).await.map_err(|e| {
            if e.is_connection_error() {
                warn!(
                    correlation_id = metadata.correlation(),
                    page = request.page(),
                    error = %e,
                    "Claims database unreachable"
                );
            } else {
                error!(
                    correlation_id = metadata.correlation(),
                    page = request.page(),
                    error = %e,
                    "Failed to load pending claims"
                );
            }
            PortError::from(e)
        })
    }
}
