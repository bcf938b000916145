// `products.$productId`: single dynamic segment

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub product_id: String,
    pub product: Product,
}

pub fn load(product_id: &str) -> ProductData {
    ProductData {
        product_id: product_id.to_string(),
        product: Product {
            id: product_id.to_string(),
            title: format!("Product {}", product_id),
            description: "This is a dynamic product page.".to_string(),
            price: "$99.99".to_string(),
            images: vec!["https://via.placeholder.com/400".to_string()],
        },
    }
}

pub struct ProductDetail;

#[async_trait]
impl RouteModule for ProductDetail {
    fn file(&self) -> &'static str {
        "products.$productId.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(
            ctx.params
                .require("productId")
                .and_then(|id| RouteOutput::data(&load(id))),
        )
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let ProductData {
            product_id,
            product,
        } = view.data()?;

        Ok(html! {
            div class="product-detail" {
                h1 { (product.title) }
                p { "Route file: " code { "app/routes/products.$productId.tsx" } }
                p { "URL: " code { "/products/" (product_id) } }
                p { "Type: " strong { "Dynamic Route (Single Parameter)" } }
                p { "Dynamic segment: " code { "$productId = " (product_id) } }

                div class="card" {
                    @if let Some(image) = product.images.first() {
                        img src=(image) alt=(product.title) width="300";
                    }
                    p { (product.description) }
                    p { strong { "Price:" } " " (product.price) }
                    button type="button" { "Add to Cart" }
                }

                a href="/products" { "← Back to Products" }
            }
        })
    }
}
