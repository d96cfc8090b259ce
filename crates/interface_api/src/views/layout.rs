//! Page layout
//!
//! The vertical-menu application shell every page is rendered into. A page
//! fills the named sections; empty sections render nothing.

use super::escape_html;

pub const APP_NAME: &str = "Hospital Billing";

/// Sections a page contributes to the shell
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Plain text, escaped on render
    pub title: String,
    pub side_menu: String,
    pub vendor_style: String,
    pub page_style: String,
    pub content: String,
    pub vendor_script: String,
    pub page_script: String,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en" class="loading">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} | {app}</title>
{vendor_style}
{page_style}
</head>
<body class="vertical-layout vertical-menu-modern navbar-floating footer-static">
<div class="main-menu menu-fixed menu-light menu-accordion menu-shadow">
{side_menu}
</div>
<div class="app-content content">
<div class="content-wrapper">
<div class="content-body">
{content}
</div>
</div>
</div>
{vendor_script}
{page_script}
</body>
</html>
"#,
            title = escape_html(&self.title),
            app = APP_NAME,
            vendor_style = self.vendor_style,
            page_style = self.page_style,
            side_menu = self.side_menu,
            content = self.content,
            vendor_script = self.vendor_script,
            page_script = self.page_script,
        )
    }
}

/// `<link rel="stylesheet">` tags, one per href
pub fn stylesheets<S: AsRef<str>>(hrefs: impl IntoIterator<Item = S>) -> String {
    hrefs
        .into_iter()
        .map(|href| {
            format!(
                r#"<link rel="stylesheet" type="text/css" href="{}">"#,
                escape_html(href.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
