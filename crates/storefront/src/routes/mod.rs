//! Route modules
//!
//! One module per file in the routes directory. Each declares the file it
//! stands for; the route id and URL pattern are derived from that file name.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use maud::Markup;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{RouteError, RouteResult};
use crate::request_context::{RequestContext, RouteParams};
use crate::response::RouteOutput;

pub mod about;
pub mod account;
pub mod api_products;
pub mod api_webhook;
pub mod auth;
pub mod blog_post;
pub mod categories;
pub mod contact;
pub mod dashboard;
pub mod debug_routes;
pub mod docs;
pub mod home;
pub mod product_detail;
pub mod products;
pub mod root;
pub mod rss;
pub mod search;
pub mod test_handle;

/// A route's loader, action and UI
#[async_trait]
pub trait RouteModule: Send + Sync {
    /// Path of the module file, relative to the routes directory
    fn file(&self) -> &'static str;

    /// Read handler for GET/HEAD; `None` when the route loads nothing
    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        None
    }

    /// Write handler for every other method; `None` when the route has no action
    async fn action(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        None
    }

    /// UI for this route wrapped around the child's markup
    fn render(&self, _view: &RouteView<'_>, outlet: Markup) -> RouteResult<Markup> {
        Ok(outlet)
    }

    /// Document title contributed by this route's loader data
    fn title(&self, _data: Option<&JsonValue>) -> Option<String> {
        None
    }

    /// Data-only route: its loader or action response is returned verbatim
    fn is_resource(&self) -> bool {
        false
    }
}

/// Current URL as seen by renderers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub pathname: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
}

/// One row of the matched chain, as shown by the debug route
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub id: String,
    pub pathname: String,
    pub params: HashMap<String, String>,
    pub has_data: bool,
}

/// Everything a renderer may read
#[derive(Debug, Clone, Copy)]
pub struct RouteView<'a> {
    pub id: &'a str,
    /// Part of the URL this route accounts for
    pub pathname: &'a str,
    pub location: &'a Location,
    pub params: &'a RouteParams,
    pub loader_data: Option<&'a JsonValue>,
    /// Only set on the leaf, after an action ran
    pub action_data: Option<&'a JsonValue>,
    pub matches: &'a [MatchSummary],
    pub title: &'a str,
}

impl<'a> RouteView<'a> {
    /// This route's loader data as a typed value
    pub fn data<T: DeserializeOwned>(&self) -> RouteResult<T> {
        let value = self
            .loader_data
            .ok_or_else(|| RouteError::MissingData(self.id.to_string()))?;
        decode(self.id, value)
    }

    /// The action result, if an action ran
    pub fn action<T: DeserializeOwned>(&self) -> RouteResult<Option<T>> {
        self.action_data
            .map(|value| decode(self.id, value))
            .transpose()
    }
}

/// Outcome of a UI route's action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: None,
        }
    }

    /// Message to show after a successful submission
    pub fn flash(self) -> Option<String> {
        self.success.then_some(self.message).flatten()
    }
}

/// Current time as ISO-8601 with millisecond precision
pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reads a string field of loader data, for document titles
pub(crate) fn string_field(data: Option<&JsonValue>, key: &str) -> Option<String> {
    data?.get(key)?.as_str().map(str::to_string)
}

fn decode<T: DeserializeOwned>(route: &str, value: &JsonValue) -> RouteResult<T> {
    T::deserialize(value).map_err(|source| RouteError::InvalidData {
        route: route.to_string(),
        source,
    })
}

/// The document-level layout
pub fn root() -> Arc<dyn RouteModule> {
    Arc::new(root::Root)
}

/// Every route module under the routes directory
pub fn manifest() -> Vec<Arc<dyn RouteModule>> {
    vec![
        Arc::new(home::Home),
        Arc::new(about::About),
        Arc::new(contact::Contact),
        Arc::new(products::ProductsIndex),
        Arc::new(product_detail::ProductDetail),
        Arc::new(blog_post::BlogPost),
        Arc::new(docs::Docs),
        Arc::new(categories::CategoryProducts),
        Arc::new(search::Search),
        Arc::new(auth::AuthLayout),
        Arc::new(account::Account),
        Arc::new(dashboard::DashboardLayout),
        Arc::new(dashboard::DashboardIndex),
        Arc::new(dashboard::DashboardSettings),
        Arc::new(dashboard::DashboardAnalytics),
        Arc::new(api_products::ApiProducts),
        Arc::new(api_webhook::ApiWebhook),
        Arc::new(rss::RssFeed),
        Arc::new(debug_routes::DebugRoutes),
        Arc::new(test_handle::TestHandle),
        Arc::new(test_handle::Qweqwe),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_manifest_files_are_unique() {
        let files: HashSet<&str> = manifest().iter().map(|m| m.file()).collect();
        assert_eq!(files.len(), manifest().len());
    }

    #[test]
    fn test_view_data_missing() {
        let location = Location::default();
        let params = RouteParams::default();
        let view = RouteView {
            id: "about",
            pathname: "/about",
            location: &location,
            params: &params,
            loader_data: None,
            action_data: None,
            matches: &[],
            title: "",
        };
        assert!(matches!(
            view.data::<JsonValue>(),
            Err(RouteError::MissingData(id)) if id == "about"
        ));
        assert!(view.action::<JsonValue>().unwrap().is_none());
    }
}
