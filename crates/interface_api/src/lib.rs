//! HTTP Layer
//!
//! This crate serves the pending claims page of the hospital billing system
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: the claims page, its export download and health checks
//! - **Views**: server-rendered HTML (layout, table, pagination, export script)
//! - **Middleware**: request ids, tracing and request logging
//! - **DTOs**: query strings and health responses
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let claims = Arc::new(PgClaimsRepository::new(pool, config.currency));
//! let app = create_router(claims, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimsPort;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::{request_log_middleware, MakeRequestUuid};
use crate::routes::{ClaimRoutes, PENDING_CLAIMS_EXPORT_PATH, PENDING_CLAIMS_PATH};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<dyn ClaimsPort>,
    pub config: ApiConfig,
    pub routes: ClaimRoutes,
}

impl AppState {
    pub fn new(claims: Arc<dyn ClaimsPort>, config: ApiConfig) -> Self {
        let routes = ClaimRoutes::from_config(&config);
        Self { claims, config, routes }
    }
}

/// Creates the main router
///
/// # Arguments
///
/// * `claims` - Source of pending claims
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(claims: Arc<dyn ClaimsPort>, config: ApiConfig) -> Router {
    let state = AppState::new(claims, config);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route(PENDING_CLAIMS_PATH, get(claims::list_pending))
        .route(PENDING_CLAIMS_EXPORT_PATH, get(claims::export_pending));

    Router::new()
        .merge(health_routes)
        .merge(claims_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
