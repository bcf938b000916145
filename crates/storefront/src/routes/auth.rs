// `_auth`: pathless layout that checks the customer session without adding a URL segment

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub is_logged_in: bool,
    pub user: Option<SessionUser>,
}

pub fn load(is_logged_in: bool) -> AuthData {
    AuthData {
        is_logged_in,
        user: is_logged_in.then(|| SessionUser {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }),
    }
}

pub struct AuthLayout;

#[async_trait]
impl RouteModule for AuthLayout {
    fn file(&self) -> &'static str {
        "_auth.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let is_logged_in = ctx.services.customer_account.is_logged_in().await;
        Some(RouteOutput::data(&load(is_logged_in)))
    }

    fn render(&self, view: &RouteView<'_>, outlet: Markup) -> RouteResult<Markup> {
        let data: AuthData = view.data()?;

        Ok(html! {
            div class="auth-layout" {
                div class="session" {
                    @if let (true, Some(user)) = (data.is_logged_in, &data.user) {
                        p { "Logged in as: " (user.name) " (" (user.email) ")" }
                    } @else {
                        p { "Not authenticated" }
                    }
                }
                (outlet)
            }
        })
    }
}
