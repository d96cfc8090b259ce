//! API configuration

use serde::Deserialize;
use std::time::Duration;

use core_kernel::{CoreError, Currency, Timezone, DEFAULT_PER_PAGE};
use domain_claims::ExportFormat;
use infra_db::DatabaseConfig;

/// Placeholder substituted with the visit id in the PDF route template
pub const VISIT_PLACEHOLDER: &str = "{visit}";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum database connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// Seconds a request waits for a pooled connection
    pub acquire_timeout_secs: u64,
    /// Log level
    pub log_level: String,
    /// Claims per page when the request does not say
    pub per_page: u32,
    /// Currency of stored claim amounts
    pub currency: Currency,
    /// Zone used to display claim timestamps
    pub timezone: Timezone,
    /// Format produced by the export button
    pub export_format: ExportFormat,
    /// URL of the full-document PDF route, with `{visit}` for the visit id
    pub pdf_route_template: String,
    /// Prefix for stylesheet and script URLs
    pub asset_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/hospital_billing".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 5,
            log_level: "info".to_string(),
            per_page: DEFAULT_PER_PAGE,
            currency: Currency::USD,
            timezone: Timezone::default(),
            export_format: ExportFormat::Csv,
            pdf_route_template: "/claims/download-pdf-full-document/{visit}".to_string(),
            asset_base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their defaults; `DATABASE_URL` is honoured when
    /// `API_DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(
            config::Environment::with_prefix("API"),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    fn load(
        environment: config::Environment,
        fallback_database_url: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(url) = fallback_database_url {
            builder = builder.set_default("database_url", url)?;
        }
        builder.add_source(environment).build()?.try_deserialize()
    }

    /// Checks values serde cannot
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.pdf_route_template.contains(VISIT_PLACEHOLDER) {
            return Err(CoreError::configuration(format!(
                "pdf_route_template must contain {VISIT_PLACEHOLDER}, got {}",
                self.pdf_route_template
            )));
        }
        if self.per_page == 0 {
            return Err(CoreError::configuration("per_page must be at least 1"));
        }
        if self.max_connections == 0 {
            return Err(CoreError::configuration("max_connections must be at least 1"));
        }
        Ok(())
    }

    /// Pool settings for the claims database
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
