// `_auth.account`: `/account`, rendered inside the `_auth` layout

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
pub struct AccountDetails {
    pub name: String,
    pub email: String,
    pub orders: u32,
    pub join_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub account: AccountDetails,
}

pub fn load() -> AccountData {
    AccountData {
        account: AccountDetails {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            orders: 12,
            join_date: "2024-01-15".to_string(),
        },
    }
}

/// Only `intent=logout` is understood.
pub fn submit(intent: Option<&str>) -> ActionResult {
    match intent {
        Some("logout") => ActionResult::ok("Logged out successfully"),
        _ => ActionResult::failed(),
    }
}

pub struct Account;

#[async_trait]
impl RouteModule for Account {
    fn file(&self) -> &'static str {
        "_auth.account.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load()))
    }

    async fn action(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let intent = ctx.form.get("intent").map(String::as_str);
        info!(intent = ?intent, "account action");
        Some(RouteOutput::data(&submit(intent)))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let AccountData { account } = view.data()?;
        let flash = view.action::<ActionResult>()?.and_then(ActionResult::flash);

        Ok(html! {
            div class="account" {
                h1 { "My Account" }
                p { "Route file: " code { "app/routes/_auth.account.tsx" } }
                p { "URL: " code { "/account" } }
                p { "Type: " strong { "Route under Pathless Layout (_auth)" } }
                p { "Note: Uses _auth layout but URL doesn't include \"_auth\"" }

                @if let Some(message) = &flash {
                    div class="flash success" { (message) }
                }

                div class="card" {
                    h2 { "Account Details" }
                    p { strong { "Name:" } " " (account.name) }
                    p { strong { "Email:" } " " (account.email) }
                    p { strong { "Total Orders:" } " " (account.orders) }
                    p { strong { "Member Since:" } " " (account.join_date) }
                }

                form method="post" {
                    input type="hidden" name="intent" value="logout";
                    button type="submit" { "Logout" }
                }

                a href="/" { "← Back to Home" }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_intent() {
        assert_eq!(submit(Some("logout")), ActionResult::ok("Logged out successfully"));
    }

    #[test]
    fn test_unknown_intent() {
        let result = submit(Some("delete"));
        assert!(!result.success);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"success": false})
        );
        assert_eq!(submit(None), ActionResult::failed());
    }

    #[test]
    fn test_account_literals() {
        let AccountData { account } = load();
        assert_eq!(account.orders, 12);
        assert_eq!(account.join_date, "2024-01-15");
    }
}
