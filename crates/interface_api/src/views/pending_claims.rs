//! Pending claims page

use core_kernel::Page;
use domain_claims::{ClaimRow, ClaimsTable, ExportFormat, PendingClaim};

use super::layout::stylesheets;
use super::{asset, escape_html, export_script, pagination, sidebar, Layout};
use crate::routes::{ClaimRoutes, PENDING_CLAIMS_PATH};

pub const TITLE: &str = "Pending Claims";
pub const TABLE_ID: &str = "my_table";

const VENDOR_STYLES: [&str; 2] = [
    "vendors/css/tables/datatable/responsive.bootstrap4.min.css",
    "vendors/css/tables/datatable/buttons.bootstrap4.min.css",
];
const PAGE_STYLES: [&str; 2] = [
    "css/base/plugins/forms/form-validation.css",
    "css/base/pages/app-user.css",
];
const PDF_ICON_STYLE: &str = "color:#F16060; font-size: 25px";
const BOXICONS: &str = "https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css";

/// Settings the page needs besides the claims themselves
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub routes: &'a ClaimRoutes,
    pub export_format: ExportFormat,
    pub asset_base_url: &'a str,
}

/// Renders the full HTML document for one page of pending claims
pub fn render(context: &PageContext<'_>, table: &ClaimsTable, page: &Page<PendingClaim>) -> String {
    let assets = |paths: &[&str]| -> Vec<String> {
        paths.iter().map(|path| asset(context.asset_base_url, path)).collect()
    };

    let layout = Layout {
        title: TITLE.to_string(),
        side_menu: sidebar::render(PENDING_CLAIMS_PATH),
        vendor_style: format!("{}\n{}", stylesheets(assets(&VENDOR_STYLES[..])), stylesheets([BOXICONS])),
        page_style: stylesheets(assets(&PAGE_STYLES[..])),
        content: content(context, table, page),
        page_script: export_script::render(context.export_format, TABLE_ID),
        ..Layout::default()
    };

    layout.render()
}

/// The card holding the export button, the table and the page links
pub fn content(context: &PageContext<'_>, table: &ClaimsTable, page: &Page<PendingClaim>) -> String {
    let per_page = page.per_page();
    let links = pagination::render(page, |number| context.routes.pending_page(number, per_page));

    format!(
        r#"<section class="invoice-preview-wrapper">
<div class="row invoice-preview">
<div class="col-12">
<div class="card invoice-preview-card">
<div class="card-header">
<h4 class="card-title">{title}</h4>
<button type="button" id="{button_id}" class="btn btn-outline-primary">{button_label}</button>
</div>
<div class="pb-0 card-body invoice-padding row">
<div class="table-responsive">
{table}
</div>
</div>
<div class="card-body">
{links}
</div>
</div>
</div>
</div>
</section>"#,
        title = escape_html(TITLE),
        button_id = export_script::EXPORT_BUTTON_ID,
        button_label = export_script::button_label(context.export_format),
        table = render_table(context.routes, table),
    )
}

/// The `<table>` element; an empty table keeps its header and an empty body
pub fn render_table(routes: &ClaimRoutes, table: &ClaimsTable) -> String {
    let headers = table
        .headers()
        .iter()
        .map(|header| format!(r#"<th class="py-1">{}</th>"#, escape_html(header)))
        .collect::<Vec<_>>()
        .join("\n");

    let body: String = table
        .rows()
        .iter()
        .map(|row| render_row(routes, row))
        .collect();

    format!(
        "<table class=\"table\" id=\"{TABLE_ID}\">\n<thead>\n<tr>\n{headers}\n</tr>\n</thead>\n<tbody>\n{body}</tbody>\n</table>"
    )
}

fn render_row(routes: &ClaimRoutes, row: &ClaimRow) -> String {
    let text_cells: String = [
        &row.medical_aid_name,
        &row.treatment_date,
        &row.visit_id.to_string(),
        &row.patient_name,
        &row.medical_aid_number,
        &row.medical_aid_suffix,
        &row.claim_date,
        &row.bill_total,
    ]
    .iter()
    .map(|text| {
        format!(
            "<td class=\"py-1\"><span class=\"font-weight-bold\">{}</span></td>\n",
            escape_html(text)
        )
    })
    .collect();

    format!(
        r#"<tr class="border-bottom">
{text_cells}<td class="py-1"><span class="badge rounded-pill bg-warning">{status}</span></td>
<td class="py-1"><a href="{pdf}" target="_blank" rel="noopener"><i class="bx bxs-file-pdf" style="{icon_style}"></i></a></td>
</tr>
"#,
        status = escape_html(row.status.as_str()),
        pdf = escape_html(&routes.pdf_full_document(row.visit_id)),
        icon_style = PDF_ICON_STYLE,
    )
}
