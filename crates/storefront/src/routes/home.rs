// `_index`: the home page at `/`

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{now_iso, string_field, RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub title: String,
    pub description: String,
    pub timestamp: String,
}

pub fn load(timestamp: String) -> HomeData {
    HomeData {
        title: "Home Page".to_string(),
        description: "Welcome to the Hydrogen storefront".to_string(),
        timestamp,
    }
}

pub struct Home;

#[async_trait]
impl RouteModule for Home {
    fn file(&self) -> &'static str {
        "_index.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load(now_iso())))
    }

    fn title(&self, data: Option<&JsonValue>) -> Option<String> {
        string_field(data, "title")
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: HomeData = view.data()?;

        Ok(html! {
            div class="home" {
                h1 { "Home Page (Index Route)" }
                p { "Route file: " code { "app/routes/_index.tsx" } }
                p { "URL: " code { "/" } }
                p { "Loaded at: " (data.timestamp) }

                nav {
                    h2 { "Explore Route Examples:" }
                    ul {
                        li { a href="/about" { "About (Static Route)" } }
                        li { a href="/products" { "Products (Index Route)" } }
                        li { a href="/products/product-123" { "Product Detail (Dynamic Route)" } }
                        li { a href="/blog/2024/11/my-post" { "Blog Post (Multi-segment)" } }
                        li { a href="/docs/getting-started" { "Docs (Splat Route)" } }
                        li { a href="/dashboard/settings" { "Dashboard (Nested Layout)" } }
                    }
                }
            }
        })
    }
}
