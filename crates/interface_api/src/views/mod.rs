//! Server-rendered HTML
//!
//! Pages are assembled from plain `format!` templates. Every value that did
//! not originate in this module goes through [`escape_html`] before it is
//! interpolated.

pub mod export_script;
pub mod layout;
pub mod pagination;
pub mod pending_claims;
pub mod sidebar;

pub use layout::Layout;

/// Escapes text for HTML element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Joins an asset path onto the configured base URL
pub fn asset(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
