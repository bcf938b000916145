// `blog.$year.$month.$slug`: several dynamic segments in one route

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostData {
    pub year: String,
    pub month: String,
    pub slug: String,
    pub post: Post,
}

/// `my-first-post` → `My First Post`
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn load(year: &str, month: &str, slug: &str) -> BlogPostData {
    BlogPostData {
        year: year.to_string(),
        month: month.to_string(),
        slug: slug.to_string(),
        post: Post {
            title: title_from_slug(slug),
            content: "This is a blog post with multiple dynamic segments in the URL.".to_string(),
            author: "John Doe".to_string(),
            published_date: format!("{}-{}-01", year, month),
        },
    }
}

pub struct BlogPost;

#[async_trait]
impl RouteModule for BlogPost {
    fn file(&self) -> &'static str {
        "blog.$year.$month.$slug.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let load_post = || -> RouteResult<RouteOutput> {
            let params = &ctx.params;
            RouteOutput::data(&load(
                params.require("year")?,
                params.require("month")?,
                params.require("slug")?,
            ))
        };
        Some(load_post())
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: BlogPostData = view.data()?;
        let post = &data.post;

        Ok(html! {
            div class="blog-post" {
                h1 { (post.title) }
                p { "Route file: " code { "app/routes/blog.$year.$month.$slug.tsx" } }
                p { "URL: " code { "/blog/" (data.year) "/" (data.month) "/" (data.slug) } }
                p { "Type: " strong { "Dynamic Route (Multiple Parameters)" } }

                div class="params" {
                    p { strong { "Parameters:" } }
                    ul {
                        li { "$year = " (data.year) }
                        li { "$month = " (data.month) }
                        li { "$slug = " (data.slug) }
                    }
                }

                article {
                    p { strong { "By:" } " " (post.author) }
                    p { strong { "Published:" } " " (post.published_date) }
                    p { (post.content) }
                }

                a href="/" { "← Back to Home" }
            }
        })
    }
}
