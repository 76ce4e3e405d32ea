use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

/// Items served to the products page.
#[cfg(feature = "server")]
pub fn catalog() -> Vec<Product> {
    [("Keyboard", 49.0), ("Monitor", 189.0), ("Headset", 79.5)]
        .into_iter()
        .map(|(name, price)| Product {
            name: name.to_string(),
            price,
        })
        .collect()
}

// fetched from the backend on mount, so the page shows the round trip
#[component]
pub fn Products() -> Element {
    let products = use_resource(get_products);

    rsx! {
        section { id: "products-page", class: "page",
            h1 { "Products" }
            match &*products.read() {
                None => rsx! {
                    p { "Loading products..." }
                },
                Some(Ok(items)) => {
                    if items.is_empty() {
                        rsx! {
                            p { "No products available." }
                        }
                    } else {
                        rsx! {
                            ul { class: "product-list",
                                for item in items.iter() {
                                    li { key: "{item.name}", class: "product-card",
                                        strong { "{item.name}" }
                                        " {item.price:.2}"
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    p { class: "error-message", "Error loading products: {e}" }
                },
            }
        }
    }
}

#[server]
async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    let products = catalog();
    log::debug!("Serving {} products", products.len());
    Ok(products)
}
