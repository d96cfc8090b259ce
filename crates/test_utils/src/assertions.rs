//! Custom Test Assertions
//!
//! Provides assertion helpers for rendered claims pages that give
//! more meaningful error messages than standard assertions.

/// Marker of one rendered claim row in the pending claims table
pub const BODY_ROW_MARKER: &str = r#"<tr class="border-bottom">"#;

/// The `<tbody>` section of a rendered claims page
///
/// # Panics
///
/// Panics if the page has no table body
pub fn table_body(html: &str) -> &str {
    let start = html.find("<tbody>").expect("page has a <tbody>");
    let end = html[start..].find("</tbody>").expect("<tbody> is closed") + start;
    &html[start + "<tbody>".len()..end]
}

/// Asserts the number of claim rows in a rendered claims page
pub fn assert_body_rows(html: &str, expected: usize) {
    let actual = table_body(html).matches(BODY_ROW_MARKER).count();
    assert_eq!(
        actual, expected,
        "Expected {expected} claim rows in the table body, found {actual}"
    );
}

/// Asserts the table body holds no rows at all
pub fn assert_empty_body(html: &str) {
    let body = table_body(html);
    assert!(
        body.trim().is_empty(),
        "Expected an empty table body, got: {body}"
    );
}

/// Asserts that a page links to `href` from some anchor
pub fn assert_links_to(html: &str, href: &str) {
    let attribute = format!(r#"href="{href}""#);
    assert!(
        html.contains(&attribute),
        "Expected a link to {href}"
    );
}
