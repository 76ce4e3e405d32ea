//! Renders components to HTML inside a router, recording head output.

use crate::Route;
use crate::config::SiteConfig;
use crate::views::{NavigationBar, RootLayout};
use dioxus::document::{Document, Eval, NoOpDocument};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub enum Fixture {
    Bar(Vec<String>),
    Layout(SiteConfig),
}

// mirrors the shape of `Route` so page links resolve as internal
#[derive(Routable, Clone, PartialEq, Debug)]
enum Harness {
    #[route("/")]
    Frame {},
    #[route("/products")]
    Listing {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Frame() -> Element {
    match use_context::<Fixture>() {
        Fixture::Bar(pages) => rsx! {
            NavigationBar { pages }
        },
        Fixture::Layout(config) => rsx! {
            RootLayout { config,
                p { id: "routed", "routed content" }
            }
        },
    }
}

#[component]
fn Listing() -> Element {
    rsx! { "listing" }
}

#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    rsx! { "elsewhere {segments.len()}" }
}

#[component]
fn Root(fixture: Fixture) -> Element {
    use_context_provider(move || fixture);
    rsx! {
        Router::<Harness> {}
    }
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Head element written through the document API.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl HeadElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Document that keeps what components write into the head.
#[derive(Clone, Default)]
pub struct HeadRecorder {
    title: Rc<RefCell<Option<String>>>,
    elements: Rc<RefCell<Vec<HeadElement>>>,
}

impl HeadRecorder {
    pub fn title(&self) -> Option<String> {
        self.title.borrow().clone()
    }

    pub fn elements(&self, name: &str) -> Vec<HeadElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|element| element.name == name)
            .cloned()
            .collect()
    }
}

impl Document for HeadRecorder {
    fn eval(&self, js: String) -> Eval {
        NoOpDocument.eval(js)
    }

    fn set_title(&self, title: String) {
        *self.title.borrow_mut() = Some(title);
    }

    fn create_head_element(
        &self,
        name: &str,
        attributes: &[(&str, String)],
        _contents: Option<String>,
    ) {
        self.elements.borrow_mut().push(HeadElement {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        });
    }
}

fn render_dom(mut dom: VirtualDom, head: &HeadRecorder) -> String {
    dom.provide_root_context(Rc::new(head.clone()) as Rc<dyn Document>);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render(fixture: Fixture) -> String {
    render_with_head(fixture).0
}

pub fn render_with_head(fixture: Fixture) -> (String, HeadRecorder) {
    let head = HeadRecorder::default();
    let dom = VirtualDom::new_with_props(Root, RootProps { fixture });
    (render_dom(dom, &head), head)
}

/// Renders the application routes at `/` with `config` in the launch context.
pub fn render_app(config: SiteConfig) -> String {
    let head = HeadRecorder::default();
    let dom = VirtualDom::new(App);
    dom.provide_root_context(config);
    render_dom(dom, &head)
}
