//! Link model for the navigation bar.
//!
//! A page name maps to a label shown in the bar and a path the router
//! navigates to. Only the path is lowercased; nothing else is normalized, so
//! `"About Us"` becomes `/about us`.

/// Label shown at the start of the bar, always linking to `/`.
pub const BRAND_LABEL: &str = "Frontend Demonstration";

/// Target of the brand link.
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn for_page(page: &str) -> Self {
        NavLink {
            label: page.to_string(),
            href: page_path(page),
        }
    }
}

/// Path a page name resolves to.
pub fn page_path(page: &str) -> String {
    format!("/{}", page.to_lowercase())
}

/// One link per page, in the order given.
pub fn page_links<S: AsRef<str>>(pages: &[S]) -> Vec<NavLink> {
    pages
        .iter()
        .map(|page| NavLink::for_page(page.as_ref()))
        .collect()
}
