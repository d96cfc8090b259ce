//! Claims handlers

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use core_kernel::{OperationMetadata, Page};
use domain_claims::{serialize_table, ClaimsTable, ExportFormat, PendingClaim, RowContext};

use crate::dto::claims::{ExportQuery, PendingClaimsQuery};
use crate::error::ApiError;
use crate::extract::ValidatedQuery;
use crate::middleware::REQUEST_ID_HEADER;
use crate::views::pending_claims::{self, PageContext};
use crate::AppState;

/// Renders one page of pending claims
pub async fn list_pending(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<PendingClaimsQuery>,
) -> Result<Html<String>, ApiError> {
    let request = query.page_request(state.config.per_page);

    let page = state
        .claims
        .pending_claims(request, Some(operation_metadata(&headers)))
        .await?;
    let table = build_table(&state, &page);

    info!(
        page = page.current_page(),
        per_page = page.per_page(),
        rows = table.rows().len(),
        total = page.total(),
        "Rendered pending claims"
    );

    let context = PageContext {
        routes: &state.routes,
        export_format: state.config.export_format,
        asset_base_url: &state.config.asset_base_url,
    };
    Ok(Html(pending_claims::render(&context, &table, &page)))
}

/// Downloads one page of pending claims in the requested format
///
/// Falls back to the configured export format when `format` is absent.
pub async fn export_pending(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<ExportQuery>,
) -> Result<Response, ApiError> {
    let format = match query.format.as_deref() {
        Some(name) => name.parse::<ExportFormat>()?,
        None => state.config.export_format,
    };
    let request = query.page_request(state.config.per_page);

    let page = state
        .claims
        .pending_claims(request, Some(operation_metadata(&headers)))
        .await?;
    let table = build_table(&state, &page);
    let content = serialize_table(&table, format)?;

    info!(
        format = %format,
        page = page.current_page(),
        rows = table.rows().len(),
        "Exported pending claims"
    );

    Ok((
        [
            (header::CONTENT_TYPE, format!("{}; charset=utf-8", format.mime_type())),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.filename()),
            ),
        ],
        content,
    )
        .into_response())
}

fn build_table(state: &AppState, page: &Page<PendingClaim>) -> ClaimsTable {
    let context = RowContext {
        timezone: state.config.timezone,
    };
    ClaimsTable::from_claims(page.items(), &context)
}

fn operation_metadata(headers: &HeaderMap) -> OperationMetadata {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(OperationMetadata::with_correlation_id)
        .unwrap_or_default()
}
