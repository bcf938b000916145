// `products._index`: index route rendered at `/products`

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsData {
    pub products: Vec<ProductSummary>,
}

pub fn load() -> ProductsData {
    let product = |id: &str, title: &str, price: &str| ProductSummary {
        id: id.to_string(),
        title: title.to_string(),
        price: price.to_string(),
    };

    ProductsData {
        products: vec![
            product("product-123", "T-Shirt", "$29.99"),
            product("product-456", "Jeans", "$79.99"),
            product("product-789", "Sneakers", "$129.99"),
        ],
    }
}

pub struct ProductsIndex;

#[async_trait]
impl RouteModule for ProductsIndex {
    fn file(&self) -> &'static str {
        "products._index.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load()))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: ProductsData = view.data()?;

        Ok(html! {
            div class="products-index" {
                h1 { "All Products" }
                p { "Route file: " code { "app/routes/products._index.tsx" } }
                p { "URL: " code { "/products" } }
                p { "Type: " strong { "Nested Index Route" } }

                div class="product-grid" {
                    @for product in &data.products {
                        div class="card" {
                            h3 { (product.title) }
                            p { (product.price) }
                            a href=(format!("/products/{}", product.id)) { "View Details →" }
                        }
                    }
                }

                a href="/" { "← Back to Home" }
            }
        })
    }
}
