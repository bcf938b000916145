// `categories.$category.$`: dynamic segment followed by a splat

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::docs::splat_segments;
use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProduct {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    pub category: String,
    pub subcategory: String,
    pub breadcrumbs: Vec<String>,
    pub products: Vec<CategoryProduct>,
}

pub fn load(category: &str, subcategory: &str) -> CategoryData {
    let breadcrumbs = std::iter::once(category.to_string())
        .chain(splat_segments(subcategory))
        .collect();

    let products = (1..=2)
        .map(|n| CategoryProduct {
            id: n.to_string(),
            name: format!("{} Product {}", category, n),
        })
        .collect();

    CategoryData {
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        breadcrumbs,
        products,
    }
}

/// Link for each breadcrumb: the category itself, then deeper subcategories
fn crumb_paths(breadcrumbs: &[String]) -> Vec<String> {
    (0..breadcrumbs.len())
        .map(|i| match i {
            0 => format!("/categories/{}", breadcrumbs[0]),
            _ => format!(
                "/categories/{}/{}",
                breadcrumbs[0],
                breadcrumbs[1..=i].join("/")
            ),
        })
        .collect()
}

pub struct CategoryProducts;

#[async_trait]
impl RouteModule for CategoryProducts {
    fn file(&self) -> &'static str {
        "categories.$category.$.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(
            ctx.params
                .require("category")
                .and_then(|category| RouteOutput::data(&load(category, ctx.params.splat()))),
        )
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: CategoryData = view.data()?;
        let paths = crumb_paths(&data.breadcrumbs);

        Ok(html! {
            div class="category-products" {
                h1 { "Category: " (data.category) }
                p { "Route file: " code { "app/routes/categories.$category.$.tsx" } }
                p {
                    "URL: "
                    code {
                        "/categories/" (data.category) "/"
                        @if data.subcategory.is_empty() { "..." } @else { (data.subcategory) }
                    }
                }
                p { "Type: " strong { "Dynamic + Splat Route" } }

                nav class="breadcrumbs" {
                    strong { "Breadcrumbs:" }
                    a href="/categories" { "Categories" }
                    @for (path, crumb) in paths.iter().zip(&data.breadcrumbs) {
                        span { " > " a href=(path) { (crumb) } }
                    }
                }

                div {
                    h2 { "Products" }
                    @for product in &data.products {
                        div class="card" { (product.name) }
                    }
                }

                div {
                    h3 { "Try these paths:" }
                    ul {
                        li { a href="/categories/electronics" { "Electronics" } }
                        li { a href="/categories/electronics/phones" { "Electronics → Phones" } }
                        li { a href="/categories/electronics/phones/apple" { "Electronics → Phones → Apple" } }
                    }
                }

                a href="/" { "← Back to Home" }
            }
        })
    }
}
