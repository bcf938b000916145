// `contact`: static route with a form action

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ActionResult, RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub page_title: String,
    pub email: String,
}

pub fn load() -> ContactData {
    ContactData {
        page_title: "Contact Us".to_string(),
        email: "support@example.com".to_string(),
    }
}

/// Confirmation message for a contact submission
///
/// An absent `name` field renders as an empty string, giving
/// `Thanks ! We received your message.` rather than a `null` placeholder.
pub fn submit(name: Option<&str>) -> ActionResult {
    ActionResult::ok(format!(
        "Thanks {}! We received your message.",
        name.unwrap_or_default()
    ))
}

pub struct Contact;

#[async_trait]
impl RouteModule for Contact {
    fn file(&self) -> &'static str {
        "contact.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load()))
    }

    async fn action(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let form = &ctx.form;
        info!(
            name = ?form.get("name"),
            email = ?form.get("email"),
            "contact form submission"
        );

        Some(RouteOutput::data(&submit(form.get("name").map(String::as_str))))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: ContactData = view.data()?;
        let flash = view.action::<ActionResult>()?.and_then(ActionResult::flash);

        Ok(html! {
            div class="contact" {
                h1 { (data.page_title) }
                p { "Route file: " code { "app/routes/contact.tsx" } }
                p { "URL: " code { "/contact" } }
                p { "Type: " strong { "Static Route with Action" } }
                p { "Email: " (data.email) }

                @if let Some(message) = &flash {
                    div class="flash success" { (message) }
                }

                form method="post" {
                    div { label { "Name: " input type="text" name="name" required; } }
                    div { label { "Email: " input type="email" name="email" required; } }
                    div { label { "Message: " textarea name="message" required {} } }
                    button type="submit" { "Submit" }
                }

                a href="/" { "← Back to Home" }
            }
        })
    }
}
