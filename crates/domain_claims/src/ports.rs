//! Claims Domain Ports
//!
//! The `ClaimsPort` trait is everything the pending claims view needs from
//! its data source. Adapters:
//!
//! - **PostgreSQL**: `infra_db::PgClaimsRepository`
//! - **Mock**: [`mock::MockClaimsPort`], in memory, for tests
//!
//! ```rust,ignore
//! let port: Arc<dyn ClaimsPort> = Arc::new(PgClaimsRepository::new(pool, Currency::ZAR));
//! let page = port.pending_claims(PageRequest::new(2, 15), None).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, OperationMetadata, Page, PageRequest, PortError};

use crate::claim::PendingClaim;

/// Read access to claims and their associations
#[async_trait]
pub trait ClaimsPort: DomainPort + HealthCheckable {
    /// One page of pending claims, newest first, with medical aid and
    /// patient resolved
    ///
    /// A pending claim whose medical aid or patient is missing fails the
    /// whole page with [`PortError::MissingAssociation`].
    async fn pending_claims(
        &self,
        request: PageRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Page<PendingClaim>, PortError>;
}

/// Mock implementation of ClaimsPort for testing
///
/// Stores claims in memory; useful for exercising handlers without a
/// database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of ClaimsPort
    #[derive(Debug, Default, Clone)]
    pub struct MockClaimsPort {
        claims: Arc<RwLock<Vec<PendingClaim>>>,
        failure: Option<String>,
    }

    impl MockClaimsPort {
        /// Creates a new, empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with claims for testing
        pub fn with_claims(claims: Vec<PendingClaim>) -> Self {
            Self {
                claims: Arc::new(RwLock::new(claims)),
                failure: None,
            }
        }

        /// A port whose every call fails with a connection error
        pub fn unavailable(message: impl Into<String>) -> Self {
            Self {
                claims: Arc::default(),
                failure: Some(message.into()),
            }
        }

        /// Adds a claim after construction
        pub async fn insert(&self, claim: PendingClaim) {
            self.claims.write().await.push(claim);
        }
    }

    impl DomainPort for MockClaimsPort {}

    #[async_trait]
    impl HealthCheckable for MockClaimsPort {
        async fn health_check(&self) -> HealthCheckResult {
            let (status, message) = match &self.failure {
                Some(reason) => (AdapterHealth::Unhealthy, reason.clone()),
                None => (AdapterHealth::Healthy, "Mock adapter always healthy".to_string()),
            };
            HealthCheckResult {
                adapter_id: "mock-claims-port".to_string(),
                status,
                latency_ms: 0,
                message: Some(message),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ClaimsPort for MockClaimsPort {
        async fn pending_claims(
            &self,
            request: PageRequest,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Page<PendingClaim>, PortError> {
            if let Some(reason) = &self.failure {
                return Err(PortError::connection(reason.clone()));
            }

            let mut claims = self.claims.read().await.clone();
            claims.sort_by(|a, b| {
                b.created_at()
                    .cmp(&a.created_at())
                    .then_with(|| b.claim().id.cmp(&a.claim().id))
            });

            let total = claims.len() as u64;
            let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
            let items = claims
                .into_iter()
                .skip(offset)
                .take(request.limit() as usize)
                .collect();

            Ok(Page::new(items, total, request))
        }
    }
}
