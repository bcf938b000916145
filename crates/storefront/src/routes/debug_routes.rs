// `debug-routes`: shows the matched route chain for the current URL

use async_trait::async_trait;
use maud::{html, Markup};
use std::collections::BTreeMap;

use super::{MatchSummary, RouteModule, RouteView};
use crate::error::RouteResult;

/// Params as shown in the table, `—` when there are none
pub fn params_label(summary: &MatchSummary) -> String {
    if summary.params.is_empty() {
        return "—".to_string();
    }
    let sorted: BTreeMap<_, _> = summary.params.iter().collect();
    serde_json::to_string(&sorted).unwrap_or_else(|_| "—".to_string())
}

pub struct DebugRoutes;

#[async_trait]
impl RouteModule for DebugRoutes {
    fn file(&self) -> &'static str {
        "debug-routes.tsx"
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        Ok(html! {
            div class="debug-routes" {
                h1 { "Route Debug Information" }

                div class="location" {
                    h2 { "Current URL" }
                    p { strong { "Pathname:" } " " (view.location.pathname) }
                    p { strong { "Search:" } " " (view.location.search) }
                }

                h2 { "Matched Routes (in order)" }
                table {
                    thead {
                        tr {
                            th { "Route ID" }
                            th { "Pathname" }
                            th { "Params" }
                            th { "Has Loader Data?" }
                        }
                    }
                    tbody {
                        @for summary in view.matches {
                            tr {
                                td class="route-id" { (summary.id) }
                                td { (summary.pathname) }
                                td { (params_label(summary)) }
                                td { @if summary.has_data { "Yes" } @else { "No" } }
                            }
                        }
                    }
                }

                div {
                    h3 { "Test Other Routes" }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/about" { "About" } }
                        li { a href="/products" { "Products" } }
                        li { a href="/dashboard" { "Dashboard" } }
                        li { a href="/dashboard/settings" { "Dashboard Settings" } }
                        li { a href="/test" { "Test" } }
                        li { a href="/test/hello" { "Test with Handle" } }
                    }
                }
            }
        })
    }
}
