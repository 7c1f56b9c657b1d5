//! Page Router
//!
//! Maps the four literal dashboard paths to their pages. There is no
//! wildcard, parameterized, or fallback route: anything else is `None`.

use std::fmt;

/// A top-level dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Repositories,
    Security,
    Settings,
}

impl Page {
    /// Every page in navigation order
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::Repositories,
        Page::Security,
        Page::Settings,
    ];

    /// Path this page is served at
    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Repositories => "/repositories",
            Page::Security => "/security",
            Page::Settings => "/settings",
        }
    }

    /// Label used in navigation
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Repositories => "Repositories",
            Page::Security => "Security",
            Page::Settings => "Settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Resolve a location to a page
///
/// Only the path component is matched: `?query` and `#fragment` are
/// dropped and a trailing slash on a non-root path is tolerated.
pub fn route(location: &str) -> Option<Page> {
    let path = location
        .split(&['?', '#'][..])
        .next()
        .unwrap_or_default();

    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() && trimmed != "/" => trimmed,
        _ => path,
    };

    Page::ALL.into_iter().find(|page| page.path() == path)
}
