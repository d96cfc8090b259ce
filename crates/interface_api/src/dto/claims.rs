//! Claims DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::PageRequest;

/// Query string of the pending claims page
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PendingClaimsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u32>,
}

impl PendingClaimsQuery {
    pub fn page_request(&self, default_per_page: u32) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.per_page.unwrap_or(default_per_page))
    }
}

/// Query string of the export endpoint
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ExportQuery {
    #[validate(length(min = 1, max = 32, message = "format must not be empty"))]
    pub format: Option<String>,
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u32>,
}

impl ExportQuery {
    pub fn page_request(&self, default_per_page: u32) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.per_page.unwrap_or(default_per_page))
    }
}

/// Body of `GET /health` and `GET /health/ready`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
