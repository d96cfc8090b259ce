//! Vertical side menu

use super::escape_html;
use crate::routes::PENDING_CLAIMS_PATH;

struct MenuItem {
    label: &'static str,
    icon: &'static str,
    href: &'static str,
}

const MENU: &[MenuItem] = &[MenuItem {
    label: "Pending Claims",
    icon: "bx bx-time-five",
    href: PENDING_CLAIMS_PATH,
}];

/// Renders the menu, marking the item whose href equals `active_path`
pub fn render(active_path: &str) -> String {
    let items: String = MENU
        .iter()
        .map(|item| {
            let class = if item.href == active_path { "nav-item active" } else { "nav-item" };
            format!(
                r#"<li class="{class}"><a class="d-flex align-items-center" href="{href}"><i class="{icon}"></i><span class="menu-title text-truncate">{label}</span></a></li>"#,
                href = escape_html(item.href),
                icon = item.icon,
                label = escape_html(item.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="main-menu-content">
<ul class="navigation navigation-main" id="main-menu-navigation" data-menu="menu-navigation">
{items}
</ul>
</div>"#
    )
}
