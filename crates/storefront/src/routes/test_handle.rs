// `test.$handle/index` (folder route) and `qweqwe`: both expose the handle and the storefront client

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;
use crate::services::StorefrontInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleData {
    /// Missing when the route has no `handle` segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    pub storefront: StorefrontInfo,
}

pub fn load(ctx: &RequestContext) -> HandleData {
    HandleData {
        handle: ctx.params.get("handle").map(str::to_string),
        storefront: ctx.services.storefront.info(),
    }
}

pub struct TestHandle;

#[async_trait]
impl RouteModule for TestHandle {
    fn file(&self) -> &'static str {
        "test.$handle/index.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load(ctx)))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: HandleData = view.data()?;

        Ok(html! {
            div {
                h1 { "Test Handle Route (from folder)" }
                p { "Handle parameter: " strong { (data.handle.unwrap_or_default()) } }
            }
        })
    }
}

pub struct Qweqwe;

#[async_trait]
impl RouteModule for Qweqwe {
    fn file(&self) -> &'static str {
        "qweqwe.tsx"
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load(ctx)))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let data: HandleData = view.data()?;

        Ok(html! {
            h1 { "This is a test route with handle: " (data.handle.unwrap_or_default()) }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Services;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, Method, Uri};
    use std::collections::HashMap;

    fn context(params: &[(&str, &str)]) -> RequestContext {
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RequestContext::from_parts(
            Method::GET,
            &Uri::from_static("/test/hello"),
            HeaderMap::new(),
            Bytes::new(),
            Services::mock(),
        )
        .with_params(params.into())
    }

    #[test]
    fn test_handle_present() {
        let data = load(&context(&[("handle", "hello")]));
        assert_eq!(data.handle.as_deref(), Some("hello"));
        assert_eq!(data.storefront.shop_name, "My Shopify Store");
    }

    #[test]
    fn test_handle_absent_is_omitted() {
        let json = serde_json::to_value(load(&context(&[]))).unwrap();
        assert!(json.get("handle").is_none());
        assert_eq!(json["storefront"]["storeDomain"], "https://example.com");
    }
}
