//! Router tests for interface_api
//!
//! Drive the full router with `oneshot` against in-memory claims ports.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::Utc;
use tower::ServiceExt;

use core_kernel::{
    AdapterHealth, Currency, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata,
    Page, PageRequest, PortError,
};
use domain_claims::ports::mock::MockClaimsPort;
use domain_claims::{ClaimsPort, ExportFormat, PendingClaim, HEADERS};
use interface_api::{config::ApiConfig, create_router};
use test_utils::{
    assert_body_rows, assert_empty_body, assert_links_to, fake_pending_claim, pending_claims,
    EntityFixtures, MoneyFixtures, TestPendingClaimBuilder,
};

fn app(claims: Vec<PendingClaim>) -> Router {
    create_router(Arc::new(MockClaimsPort::with_claims(claims)), ApiConfig::default())
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header_value(response: &Response, name: header::HeaderName) -> String {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// A store whose pending claims reference a patient that no longer exists
struct OrphanedClaimsPort;

impl DomainPort for OrphanedClaimsPort {}

#[async_trait]
impl HealthCheckable for OrphanedClaimsPort {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "orphaned".to_string(),
            status: AdapterHealth::Degraded,
            latency_ms: 3,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimsPort for OrphanedClaimsPort {
    async fn pending_claims(
        &self,
        _request: PageRequest,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Page<PendingClaim>, PortError> {
        Err(PortError::missing_association("Claim", 5, "patient"))
    }
}

// ============================================================================
// Pending Claims Page
// ============================================================================

mod page_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_collection_renders_empty_body() {
        let response = get(app(vec![]), "/claims/pending").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(header_value(&response, header::CONTENT_TYPE).starts_with("text/html"));

        let html = body_text(response).await;
        assert_empty_body(&html);
        assert!(html.contains(r#"<table class="table" id="my_table">"#));
        assert!(!html.contains(r#"<ul class="pagination">"#));
        assert!(!html.contains("No records"));
    }

    #[tokio::test]
    async fn test_one_row_per_claim_with_derived_fields() {
        let html = body_text(get(app(pending_claims(3)), "/claims/pending").await).await;

        assert_body_rows(&html, 3);
        assert_eq!(html.matches(">Thandi Mokoena</span>").count(), 3);
        assert_eq!(html.matches(">$1250.00</span>").count(), 3);
        assert_eq!(
            html.matches(r#"<span class="badge rounded-pill bg-warning">pending</span>"#).count(),
            3
        );
    }

    #[tokio::test]
    async fn test_rows_are_newest_first() {
        let html = body_text(get(app(pending_claims(3)), "/claims/pending").await).await;

        let newest = html.find(">1003</span>").unwrap();
        let oldest = html.find(">1001</span>").unwrap();
        assert!(newest < oldest);
    }

    #[tokio::test]
    async fn test_pdf_link_embeds_visit_id() {
        let html = body_text(get(app(pending_claims(2)), "/claims/pending").await).await;

        assert_links_to(&html, "/claims/download-pdf-full-document/1001");
        assert_links_to(&html, "/claims/download-pdf-full-document/1002");
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert_eq!(
            html.matches(r#"<i class="bx bxs-file-pdf" style="color:#F16060; font-size: 25px"></i>"#)
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_generated_people_render_in_their_rows() {
        let claims: Vec<PendingClaim> = (1..=4).map(fake_pending_claim).collect();
        let html = body_text(get(app(claims.clone()), "/claims/pending").await).await;

        assert_body_rows(&html, 4);
        for claim in &claims {
            let number = format!(">{}</span>", claim.patient().medical_aid_number);
            assert!(html.contains(&number), "missing {number}");
            assert_links_to(
                &html,
                &format!("/claims/download-pdf-full-document/{}", claim.visit_id()),
            );
        }
    }

    #[tokio::test]
    async fn test_interpolated_text_is_escaped() {
        let claim = TestPendingClaimBuilder::new()
            .with_patient(EntityFixtures::patient_with_markup())
            .build();
        let html = body_text(get(app(vec![claim]), "/claims/pending").await).await;

        assert!(html.contains("&lt;b&gt;Sean&lt;/b&gt; O&#039;Neil &amp; Co"));
        assert!(!html.contains("<b>Sean</b>"));
    }

    #[tokio::test]
    async fn test_layout_sections_present() {
        let html = body_text(get(app(vec![]), "/claims/pending").await).await;

        assert!(html.contains("<title>Pending Claims | Hospital Billing</title>"));
        assert!(html.contains("boxicons"));
        assert!(html.contains(r#"<li class="nav-item active">"#));
        assert!(html.contains(r#"<button type="button" id="export-claims""#));
        assert!(html.contains(r#""filename":"pending-claims.csv""#));
    }

    #[tokio::test]
    async fn test_pagination_links_when_more_than_one_page() {
        let html = body_text(get(app(pending_claims(20)), "/claims/pending").await).await;

        assert_body_rows(&html, 15);
        assert!(html.contains(r#"<ul class="pagination">"#));
        assert!(html.contains(r#"href="/claims/pending?page=2" rel="next""#));
    }

    #[tokio::test]
    async fn test_second_page_holds_the_rest() {
        let html = body_text(get(app(pending_claims(20)), "/claims/pending?page=2").await).await;

        assert_body_rows(&html, 5);
        assert!(html.contains(r#"href="/claims/pending?page=1" rel="prev""#));
    }

    #[tokio::test]
    async fn test_custom_page_size_is_kept_in_links() {
        let html =
            body_text(get(app(pending_claims(12)), "/claims/pending?per_page=5").await).await;

        assert_body_rows(&html, 5);
        assert!(html.contains("href=\"/claims/pending?page=2&amp;per_page=5\""));
    }

    #[tokio::test]
    async fn test_invalid_page_size_is_bad_request() {
        let response = get(app(vec![]), "/claims/pending?per_page=0").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("validation_error"));
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_bad_request() {
        let response = get(app(vec![]), "/claims/pending?page=abc").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(header_value(&response, header::CONTENT_TYPE).starts_with("application/json"));
        let body = body_text(response).await;
        assert!(body.contains(r#""error":"validation_error""#));
        assert!(body.contains("Failed to deserialize query string"));
    }

    #[tokio::test]
    async fn test_currency_and_timezone_follow_config() {
        let config = ApiConfig {
            currency: Currency::ZAR,
            timezone: "Africa/Johannesburg".parse().unwrap(),
            ..ApiConfig::default()
        };
        let claim = TestPendingClaimBuilder::new()
            .with_amount(MoneyFixtures::zar_bill())
            .build();
        let app = create_router(Arc::new(MockClaimsPort::with_claims(vec![claim])), config);

        let html = body_text(get(app, "/claims/pending").await).await;
        assert!(html.contains(">R780.25</span>"));
        assert!(html.contains(">2024-05-14 11:30:00</span>"));
    }

    #[tokio::test]
    async fn test_pdf_route_template_from_config() {
        let config = ApiConfig {
            pdf_route_template: "https://records.test/visits/{visit}/full.pdf".to_string(),
            ..ApiConfig::default()
        };
        let app = create_router(Arc::new(MockClaimsPort::with_claims(pending_claims(1))), config);

        let html = body_text(get(app, "/claims/pending").await).await;
        assert_links_to(&html, "https://records.test/visits/1001/full.pdf");
    }
}

// ============================================================================
// Export Endpoint
// ============================================================================

mod export_tests {
    use super::*;

    #[tokio::test]
    async fn test_default_export_is_csv_download() {
        let response = get(app(pending_claims(2)), "/claims/pending/export").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header_value(&response, header::CONTENT_TYPE), "text/csv; charset=utf-8");
        assert_eq!(
            header_value(&response, header::CONTENT_DISPOSITION),
            "attachment; filename=\"pending-claims.csv\""
        );

        let body = body_text(response).await;
        assert_eq!(body.lines().count(), 3);
        assert!(body.starts_with(&HEADERS.join(",")));
    }

    #[tokio::test]
    async fn test_empty_export_still_has_header() {
        let body = body_text(get(app(vec![]), "/claims/pending/export?format=csv").await).await;

        assert_eq!(body, format!("{}\r\n", HEADERS.join(",")));
    }

    #[tokio::test]
    async fn test_legacy_export_reproduces_delimiters() {
        let response = get(app(pending_claims(1)), "/claims/pending/export?format=legacy_excel").await;

        assert_eq!(
            header_value(&response, header::CONTENT_DISPOSITION),
            "attachment; filename=\"filename\""
        );
        assert!(header_value(&response, header::CONTENT_TYPE)
            .starts_with(ExportFormat::LegacyExcel.mime_type()));

        let body = body_text(response).await;
        let expected = format!(
            "{},\n{}",
            HEADERS.join("\t\t  "),
            [
                "Discovery Health",
                "2024-05-14 09:31:00",
                "1001",
                "Thandi Mokoena",
                "DH0099812",
                "01",
                "2024-05-14 09:31:00",
                "$1250.00",
                "pending",
                "",
            ]
            .join("\t\t  ")
        );
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_csv_export_escapes_cells() {
        let claim = TestPendingClaimBuilder::new()
            .with_medical_aid_name("Bonitas, \"Gold\"")
            .build();
        let body = body_text(get(app(vec![claim]), "/claims/pending/export").await).await;

        assert!(body.contains("\r\n\"Bonitas, \"\"Gold\"\"\",2024-05-14 09:30:00,"));
    }

    #[tokio::test]
    async fn test_json_export() {
        let response = get(app(pending_claims(2)), "/claims/pending/export?format=json").await;

        assert_eq!(
            header_value(&response, header::CONTENT_TYPE),
            "application/json; charset=utf-8"
        );
        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Visit ID"], "1002");
        assert_eq!(records[0]["file"], "");
    }

    #[tokio::test]
    async fn test_unknown_format_is_bad_request() {
        let response = get(app(vec![]), "/claims/pending/export?format=xlsx").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_configured_format_applies_without_query() {
        let config = ApiConfig {
            export_format: ExportFormat::LegacyExcel,
            ..ApiConfig::default()
        };
        let app = create_router(Arc::new(MockClaimsPort::new()), config);

        let response = get(app, "/claims/pending/export").await;
        assert_eq!(
            header_value(&response, header::CONTENT_DISPOSITION),
            "attachment; filename=\"filename\""
        );
    }
}

// ============================================================================
// Errors, Health and Request Ids
// ============================================================================

mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_store_is_service_unavailable() {
        let app = create_router(Arc::new(MockClaimsPort::unavailable("db down")), ApiConfig::default());

        let response = get(app, "/claims/pending").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_missing_association_is_internal_error() {
        let app = create_router(Arc::new(OrphanedClaimsPort), ApiConfig::default());

        let response = get(app, "/claims/pending").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"], "internal_error");
        assert!(!body["message"].as_str().unwrap().contains("patient"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(app(vec![]), "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_follows_port_health() {
        let ready = get(app(vec![]), "/health/ready").await;
        assert_eq!(ready.status(), StatusCode::OK);

        let down = create_router(Arc::new(MockClaimsPort::unavailable("db down")), ApiConfig::default());
        let response = get(down, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["adapter"], "mock-claims-port");
        assert_eq!(body["message"], "db down");
    }

    #[tokio::test]
    async fn test_degraded_store_is_still_ready() {
        let app = create_router(Arc::new(OrphanedClaimsPort), ApiConfig::default());

        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let response = get(app(vec![]), "/health").await;

        let id = header_value(&response, header::HeaderName::from_static("x-request-id"));
        assert_eq!(id.len(), 36);
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();
        let response = app(vec![]).oneshot(request).await.unwrap();

        assert_eq!(
            header_value(&response, header::HeaderName::from_static("x-request-id")),
            "req-42"
        );
    }
}

// ============================================================================
// Generated Claims
// ============================================================================

mod property_tests {
    use super::*;
    use domain_claims::{serialize_table, ClaimRow, ClaimsTable, RowContext};
    use interface_api::routes::ClaimRoutes;
    use interface_api::views::pending_claims::render_table;
    use proptest::prelude::*;
    use test_utils::pending_claim_strategy;

    const PDF_TEMPLATE: &str = "/claims/download-pdf-full-document/{visit}";

    proptest! {
        #[test]
        fn table_has_one_row_and_one_pdf_link_per_claim(
            claims in proptest::collection::vec(pending_claim_strategy(), 0..12)
        ) {
            let routes = ClaimRoutes::new(PDF_TEMPLATE, 15);
            let table = ClaimsTable::from_claims(&claims, &RowContext::default());
            let html = render_table(&routes, &table);

            assert_body_rows(&html, claims.len());
            for claim in &claims {
                assert_links_to(
                    &html,
                    &format!("/claims/download-pdf-full-document/{}", claim.visit_id()),
                );
            }
        }

        #[test]
        fn csv_export_reads_back_as_displayed_cells(
            claims in proptest::collection::vec(pending_claim_strategy(), 0..12)
        ) {
            let table = ClaimsTable::from_claims(&claims, &RowContext::default());
            let exported = serialize_table(&table, ExportFormat::Csv).unwrap();

            let mut reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(exported.as_bytes());
            let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
            prop_assert_eq!(headers, HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>());

            let records: Vec<Vec<String>> = reader
                .records()
                .map(|record| record.unwrap().iter().map(str::to_string).collect())
                .collect();
            let expected: Vec<Vec<String>> = table.rows().iter().map(ClaimRow::cells).collect();
            prop_assert_eq!(records, expected);
        }
    }
}
