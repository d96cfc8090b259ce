//! URL builders for the claims pages

use core_kernel::VisitId;
use domain_claims::ExportFormat;

use crate::config::{ApiConfig, VISIT_PLACEHOLDER};

pub const PENDING_CLAIMS_PATH: &str = "/claims/pending";
pub const PENDING_CLAIMS_EXPORT_PATH: &str = "/claims/pending/export";

/// Builds links to the pending claims pages and to the PDF route
///
/// Query strings leave out `per_page` when it equals the configured default,
/// so the plain page links match what a user would type.
#[derive(Debug, Clone)]
pub struct ClaimRoutes {
    pdf_route_template: String,
    default_per_page: u32,
}

impl ClaimRoutes {
    pub fn new(pdf_route_template: impl Into<String>, default_per_page: u32) -> Self {
        Self {
            pdf_route_template: pdf_route_template.into(),
            default_per_page,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.pdf_route_template.clone(), config.per_page)
    }

    /// URL of the full-document PDF for a visit
    pub fn pdf_full_document(&self, visit_id: VisitId) -> String {
        self.pdf_route_template
            .replace(VISIT_PLACEHOLDER, &visit_id.to_string())
    }

    pub fn pending_page(&self, page: u32, per_page: u32) -> String {
        format!("{PENDING_CLAIMS_PATH}?{}", self.page_query(page, per_page))
    }

    pub fn export(&self, format: ExportFormat, page: u32, per_page: u32) -> String {
        format!(
            "{PENDING_CLAIMS_EXPORT_PATH}?format={}&{}",
            format.as_str(),
            self.page_query(page, per_page)
        )
    }

    fn page_query(&self, page: u32, per_page: u32) -> String {
        if per_page == self.default_per_page {
            format!("page={page}")
        } else {
            format!("page={page}&per_page={per_page}")
        }
    }
}
