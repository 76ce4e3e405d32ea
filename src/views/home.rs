use crate::config::SiteConfig;
use crate::nav::{self, BRAND_LABEL};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section { id: "home-page", class: "page",
            h1 { "{BRAND_LABEL}" }
            p { "{config.description}" }
            match config.pages.first() {
                Some(page) => rsx! {
                    p { class: "hint",
                        "Start with "
                        Link { to: nav::page_path(page), "{page}" }
                        "."
                    }
                },
                None => rsx! {
                    p { class: "hint", "No pages are configured." }
                },
            }
        }
    }
}
