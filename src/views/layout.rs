use crate::Route;
use crate::config::SiteConfig;
use crate::views::NavigationBar;
use dioxus::prelude::*;

/// Page shell: document metadata, font, navigation bar, then the page content.
#[component]
pub fn RootLayout(config: SiteConfig, children: Element) -> Element {
    rsx! {
        document::Title { "{config.title}" }
        document::Meta { name: "description", content: config.description.clone() }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;700&display=swap",
        }
        div { class: "app-root font-inter",
            NavigationBar { pages: config.pages.clone() }
            {children}
        }
    }
}

/// Layout route wrapping every page.
///
/// The configuration comes from the launch context on the server and is
/// cached into the page so the client hydrates with the same page list. Pages
/// below read it back with `use_context::<SiteConfig>()`.
#[component]
pub fn Shell() -> Element {
    let config = use_server_cached(|| try_consume_context::<SiteConfig>().unwrap_or_default());
    use_context_provider(|| config.clone());

    rsx! {
        RootLayout { config, Outlet::<Route> {} }
    }
}
