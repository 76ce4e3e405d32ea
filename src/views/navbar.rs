use crate::nav::{self, BRAND_LABEL, HOME_PATH};
use dioxus::prelude::*;

/// Fixed app bar with the brand link and one link per page.
///
/// Both the brand and the link row carry `md-up`, which hides them below the
/// `md` breakpoint. The spacer after the bar takes the bar's height so routed
/// content starts below it.
#[component]
pub fn NavigationBar(pages: Vec<String>) -> Element {
    let links = nav::page_links(pages.as_slice());

    rsx! {
        header { class: "app-bar",
            div { class: "app-bar-container",
                nav { class: "app-bar-toolbar",
                    a { class: "nav-brand md-up", href: HOME_PATH, "{BRAND_LABEL}" }
                    div { class: "nav-pages md-up",
                        for (index, link) in links.into_iter().enumerate() {
                            Link {
                                key: "{index}-{link.href}",
                                class: "nav-link",
                                to: link.href.clone(),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
        div { class: "nav-spacer" }
    }
}
