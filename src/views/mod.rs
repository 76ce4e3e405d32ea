//! Web interface components for the site
//!
//! This module contains the Dioxus components that make up the web interface:
//! the root layout with its navigation bar, and the routed pages.

/// Navigation bar component
mod navbar;
pub use navbar::NavigationBar;

/// Root layout and the layout route around every page
mod layout;
pub use layout::{RootLayout, Shell};

/// Home page component
mod home;
pub use home::Home;

/// Product listing page
mod products;
pub use products::Products;

/// Fallback for unknown paths
mod not_found;
pub use not_found::PageNotFound;

#[cfg(test)]
mod testing;
