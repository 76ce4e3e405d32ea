use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { id: "not-found-page", class: "page",
            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Home {}, "Back to the home page" }
        }
    }
}
