//! Bootstrap 4 pagination links

use core_kernel::{Page, PageElement, DEFAULT_ON_EACH_SIDE};

use super::escape_html;

/// Renders previous, numbered and next links for a page
///
/// `url_for` maps a page number to its href. Returns an empty string when the
/// result fits on a single page.
pub fn render<T>(page: &Page<T>, url_for: impl Fn(u32) -> String) -> String {
    if !page.has_pages() {
        return String::new();
    }

    let mut items = Vec::new();

    items.push(match page.previous_page() {
        Some(previous) => link_item(&url_for(previous), "&lsaquo;", Some(("prev", "« Previous"))),
        None => disabled_item("&lsaquo;", "« Previous"),
    });

    for element in page.elements(DEFAULT_ON_EACH_SIDE) {
        items.push(match element {
            PageElement::Gap => {
                r#"<li class="page-item disabled" aria-disabled="true"><span class="page-link">...</span></li>"#
                    .to_string()
            }
            PageElement::Page(number) if number == page.current_page() => format!(
                r#"<li class="page-item active" aria-current="page"><span class="page-link">{number}</span></li>"#
            ),
            PageElement::Page(number) => link_item(&url_for(number), &number.to_string(), None),
        });
    }

    items.push(match page.next_page() {
        Some(next) => link_item(&url_for(next), "&rsaquo;", Some(("next", "Next »"))),
        None => disabled_item("&rsaquo;", "Next »"),
    });

    format!(
        "<nav>\n<ul class=\"pagination\">\n{}\n</ul>\n</nav>",
        items.join("\n")
    )
}

fn link_item(href: &str, text: &str, rel: Option<(&str, &str)>) -> String {
    match rel {
        Some((rel, label)) => format!(
            r#"<li class="page-item"><a class="page-link" href="{}" rel="{rel}" aria-label="{label}">{text}</a></li>"#,
            escape_html(href)
        ),
        None => format!(
            r#"<li class="page-item"><a class="page-link" href="{}">{text}</a></li>"#,
            escape_html(href)
        ),
    }
}

fn disabled_item(text: &str, label: &str) -> String {
    format!(
        r#"<li class="page-item disabled" aria-disabled="true" aria-label="{label}"><span class="page-link" aria-hidden="true">{text}</span></li>"#
    )
}
