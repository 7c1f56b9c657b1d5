//! Navigation Shell
//!
//! Persistent chrome around every page: the brand line and the four
//! navigation links, followed by whatever content the router selected.

use std::fmt::Write;

use crate::router::Page;

/// Brand shown at the top of the shell
pub const BRAND: &str = "AI Code Review";

/// A navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Navigation links in display order, one per routable page
pub fn nav_links() -> [NavLink; 4] {
    Page::ALL.map(|page| NavLink {
        href: page.path(),
        label: page.title(),
    })
}

/// Render the shell around page content
///
/// The link for `active` is marked with `*`.
pub fn render(active: Option<Page>, content: &str) -> String {
    let mut out = String::new();
    let rule = "=".repeat(48);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, " {}", BRAND);
    let _ = writeln!(out, "{}", rule);

    for link in nav_links() {
        let marker = if active.map(Page::path) == Some(link.href) {
            '*'
        } else {
            ' '
        };
        let _ = writeln!(out, " {} {:<14} {}", marker, link.label, link.href);
    }

    let _ = writeln!(out, "{}", "-".repeat(48));
    out.push_str(content);
    if !content.ends_with('\n') {
        out.push('\n');
    }

    out
}
