// `about`: a static route at `/about`

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
pub struct AboutData {
    pub title: String,
    pub content: String,
    pub loaded_at: String,
}

pub fn load(loaded_at: String) -> AboutData {
    AboutData {
        title: "About Us".to_string(),
        content: "This is a static route example.".to_string(),
        loaded_at,
    }
}

pub struct About;

#[async_trait]
impl RouteModule for About {
    fn file(&self) -> &'static str {
        "about.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load(now_iso())))
    }

    fn title(&self, data: Option<&JsonValue>) -> Option<String> {
        string_field(data, "title")
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: AboutData = view.data()?;

        Ok(html! {
            div class="about" {
                h1 { (data.title) }
                p { "Route file: " code { "app/routes/about.tsx" } }
                p { "URL: " code { "/about" } }
                p { "Type: " strong { "Static Route" } }
                p { (data.content) }
                p { "Loaded at: " (data.loaded_at) }
                a href="/" { "← Back to Home" }
            }
        })
    }
}
