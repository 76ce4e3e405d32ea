mod config;
mod nav;
mod views;

use config::SiteConfig;
use dioxus::prelude::*;
use views::{Home, PageNotFound, Products, Shell};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/products")]
        Products {},

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file overriding the site title, description and page list
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[cfg(feature = "server")]
fn load_config() -> Result<SiteConfig, Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();
    let config = match args.config {
        Some(path) => SiteConfig::load(&path)?,
        None => SiteConfig::default(),
    };
    log::info!(
        "Serving \"{}\" with pages {:?}",
        config.title,
        config.pages
    );
    Ok(config)
}

#[cfg(not(feature = "server"))]
fn load_config() -> Result<SiteConfig, Box<dyn std::error::Error>> {
    Ok(SiteConfig::default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    dioxus::LaunchBuilder::new().with_context(config).launch(App);

    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
