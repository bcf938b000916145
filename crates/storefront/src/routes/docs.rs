// `docs.$`: splat route capturing everything after `/docs`

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocContent {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsData {
    pub splat: String,
    pub path_segments: Vec<String>,
    pub breadcrumbs: Vec<String>,
    pub content: DocContent,
}

/// Non-empty `/`-separated parts of a splat
pub fn splat_segments(splat: &str) -> Vec<String> {
    splat
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load(splat: &str) -> DocsData {
    let path_segments = splat_segments(splat);
    let title = path_segments
        .last()
        .cloned()
        .unwrap_or_else(|| "Documentation Home".to_string());
    let subject = if splat.is_empty() { "home" } else { splat };

    DocsData {
        splat: splat.to_string(),
        breadcrumbs: path_segments.clone(),
        path_segments,
        content: DocContent {
            title,
            body: format!("This is documentation for: {}", subject),
        },
    }
}

pub struct Docs;

#[async_trait]
impl RouteModule for Docs {
    fn file(&self) -> &'static str {
        "docs.$.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load(ctx.params.splat())))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: DocsData = view.data()?;
        let splat_label = if data.splat.is_empty() { "(empty)" } else { data.splat.as_str() };
        let crumbs: Vec<(String, &str)> = data
            .breadcrumbs
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                (format!("/docs/{}", data.breadcrumbs[..=i].join("/")), segment.as_str())
            })
            .collect();

        Ok(html! {
            div class="docs" {
                h1 { "Documentation" }
                p { "Route file: " code { "app/routes/docs.$.tsx" } }
                p {
                    "URL: "
                    code { "/docs/" @if data.splat.is_empty() { "..." } @else { (data.splat) } }
                }
                p { "Type: " strong { "Splat Route (Catch-all)" } }

                div class="params" {
                    p { strong { "Splat parameter ($):" } " " (splat_label) }
                    p {
                        strong { "Path segments:" } " "
                        @if data.path_segments.is_empty() {
                            "none"
                        } @else {
                            (data.path_segments.join(" > "))
                        }
                    }
                }

                nav class="breadcrumbs" {
                    strong { "Breadcrumbs:" }
                    a href="/docs" { "Docs" }
                    @for (path, segment) in &crumbs {
                        span { " > " a href=(path) { (segment) } }
                    }
                }

                article {
                    h2 { (data.content.title) }
                    p { (data.content.body) }
                }

                div {
                    h3 { "Try these paths:" }
                    ul {
                        li { a href="/docs/getting-started" { "Getting Started" } }
                        li { a href="/docs/api/authentication" { "API Authentication" } }
                        li { a href="/docs/guides/deployment/vercel" { "Deployment Guide" } }
                    }
                }

                a href="/" { "← Back to Home" }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_docs_nested_splat() {
        let data = load("api/authentication");
        assert_eq!(data.path_segments, vec!["api", "authentication"]);
        assert_eq!(data.breadcrumbs, data.path_segments);
        assert_eq!(data.content.title, "authentication");
        assert_eq!(data.content.body, "This is documentation for: api/authentication");
    }

    #[test]
    fn test_docs_home() {
        let data = load("");
        assert!(data.path_segments.is_empty());
        assert_eq!(data.content.title, "Documentation Home");
        assert_eq!(data.content.body, "This is documentation for: home");
    }

    #[test]
    fn test_splat_segments_skips_empty_parts() {
        assert_eq!(splat_segments("guides//deployment/"), vec!["guides", "deployment"]);
    }
}
