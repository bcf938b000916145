// `search`: optional inputs through the query string

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub query: String,
    pub category: String,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
}

/// Empty `q` means no search; empty `category` means "all"
pub fn load(query: Option<&str>, category: Option<&str>) -> SearchData {
    let query = query.unwrap_or_default();
    let category = category.filter(|c| !c.is_empty()).unwrap_or("all");

    let results: Vec<SearchResult> = if query.is_empty() {
        Vec::new()
    } else {
        [("1", "product"), ("2", "page")]
            .into_iter()
            .map(|(id, kind)| SearchResult {
                id: id.to_string(),
                title: format!("Result {} for \"{}\"", id, query),
                kind: kind.to_string(),
            })
            .collect()
    };

    SearchData {
        query: query.to_string(),
        category: category.to_string(),
        total_results: results.len(),
        results,
    }
}

pub struct Search;

#[async_trait]
impl RouteModule for Search {
    fn file(&self) -> &'static str {
        "search.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let query = ctx.query.get("q").map(String::as_str);
        let category = ctx.query.get("category").map(String::as_str);
        Some(RouteOutput::data(&load(query, category)))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: SearchData = view.data()?;
        let query_label = if data.query.is_empty() { "..." } else { data.query.as_str() };

        Ok(html! {
            div class="search" {
                h1 { "Search" }
                p { "Route file: " code { "app/routes/search.tsx" } }
                p { "URL: " code { "/search?q=" (query_label) "&category=" (data.category) } }
                p { "Type: " strong { "Route with Optional Query Parameters" } }

                form method="get" {
                    div {
                        input type="text" name="q" placeholder="Search..." value=(data.query);
                        select name="category" {
                            @for (value, label) in [("all", "All"), ("products", "Products"), ("pages", "Pages")] {
                                option value=(value) selected[data.category == value] { (label) }
                            }
                        }
                        button type="submit" { "Search" }
                    }
                }

                @if !data.query.is_empty() {
                    div class="results" {
                        h2 { "Results for \"" (data.query) "\" in " (data.category) }
                        p { "Found " (data.total_results) " results" }
                        @for result in &data.results {
                            div class="card" {
                                h3 { (result.title) }
                                p { "Type: " (result.kind) }
                            }
                        }
                    }
                }

                a href="/" { "← Back to Home" }
            }
        })
    }
}
