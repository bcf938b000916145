use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use maud::{html, DOCTYPE};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::RouteResult;

// -- Shared helpers --

fn insert_header(headers: &mut HeaderMap, key: &str, value: &str) {
    if let (Ok(name), Ok(val)) = (
        HeaderName::from_bytes(key.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        headers.insert(name, val);
    }
}

// ============================================================================
// RouteOutput
// ============================================================================

/// What a loader or action hands back to the dispatcher
#[derive(Debug)]
pub enum RouteOutput {
    /// Route data, serialized with camelCase keys
    Data(JsonValue),
    /// Send the client elsewhere
    Redirect(RedirectResponse),
    /// A complete response, returned as-is
    Response(ResourceResponse),
}

impl RouteOutput {
    /// Serializes typed loader or action data
    pub fn data<T: Serialize>(value: &T) -> RouteResult<Self> {
        Ok(Self::Data(serde_json::to_value(value)?))
    }

    /// 302 redirect
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect(RedirectResponse::new().to(location))
    }
}

impl From<ResourceResponse> for RouteOutput {
    fn from(response: ResourceResponse) -> Self {
        Self::Response(response)
    }
}

impl From<RedirectResponse> for RouteOutput {
    fn from(redirect: RedirectResponse) -> Self {
        Self::Redirect(redirect)
    }
}

// ============================================================================
// ResourceResponse
// ============================================================================

/// Raw response from a resource route (JSON, XML, ...)
///
/// ```
/// use storefront::ResourceResponse;
/// use axum::http::StatusCode;
///
/// let response = ResourceResponse::json(&serde_json::json!({"ok": true}))
///     .unwrap()
///     .status(StatusCode::ACCEPTED)
///     .header("Cache-Control", "public, max-age=300");
///
/// assert_eq!(response.status_code(), StatusCode::ACCEPTED);
/// assert_eq!(response.get_header("content-type"), Some("application/json"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse {
    body: String,
    headers: HeaderMap,
    status: StatusCode,
}

impl ResourceResponse {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            headers: HeaderMap::new(),
            status: StatusCode::OK,
        }
    }

    /// JSON body with `Content-Type: application/json`
    pub fn json<T: Serialize>(value: &T) -> RouteResult<Self> {
        Ok(Self::new()
            .body(serde_json::to_string(value)?)
            .header("Content-Type", "application/json"))
    }

    /// XML body with `Content-Type: application/xml`
    pub fn xml(body: impl Into<String>) -> Self {
        Self::new()
            .body(body)
            .header("Content-Type", "application/xml")
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a custom response header.
    pub fn header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        insert_header(&mut self.headers, key.as_ref(), value.as_ref());
        self
    }

    /// Set the HTTP status code.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)?.to_str().ok()
    }

    pub fn body_str(&self) -> &str {
        &self.body
    }
}

impl Default for ResourceResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for ResourceResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

// ============================================================================
// RedirectResponse
// ============================================================================

/// Redirect returned from a loader or action
///
/// ```
/// use storefront::RedirectResponse;
/// use axum::http::StatusCode;
///
/// let redirect = RedirectResponse::new().to("/login");
/// assert_eq!(redirect.location(), Some("/login"));
/// assert_eq!(redirect.status_code(), StatusCode::FOUND);
/// ```
#[derive(Debug, Clone)]
pub struct RedirectResponse {
    location: Option<String>,
    status: StatusCode,
}

impl RedirectResponse {
    pub fn new() -> Self {
        Self {
            location: None,
            status: StatusCode::FOUND,
        }
    }

    /// Set the redirect location.
    pub fn to(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the HTTP status code (301, 302, 303, 307, 308).
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl Default for RedirectResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for RedirectResponse {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        if let Some(ref location) = self.location {
            if let Ok(value) = HeaderValue::from_str(location) {
                headers.insert(header::LOCATION, value);
            }
        }
        (self.status, headers).into_response()
    }
}

// ============================================================================
// ErrorPage
// ============================================================================

/// Full HTML error document
#[derive(Debug, Clone)]
pub struct ErrorPage {
    status: StatusCode,
    title: String,
    message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn not_found(path: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND)
            .title("Page Not Found")
            .message(format!("Route '{}' not found", path))
    }

    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED)
            .message(format!("Route '{}' does not handle {} requests", path, method))
    }

    /// Error boundary for failures inside a route module
    pub fn application_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
            .title("Application Error")
            .message(message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                }
                body {
                    h1 { (self.status.as_u16()) " " (self.title) }
                    @if !self.message.is_empty() {
                        p { (self.message) }
                    }
                    a href="/" { "Go Home" }
                }
            }
        };
        (self.status, Html(markup.into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_response_headers() {
        let response = ResourceResponse::xml("<rss/>").header("Cache-Control", "public, max-age=3600");
        assert_eq!(response.get_header("content-type"), Some("application/xml"));
        assert_eq!(response.get_header("cache-control"), Some("public, max-age=3600"));
        assert_eq!(response.body_str(), "<rss/>");
    }

    #[test]
    fn test_invalid_header_is_skipped() {
        let response = ResourceResponse::new().header("bad header", "x");
        assert!(response.get_header("bad header").is_none());
    }

    #[test]
    fn test_redirect_response() {
        let response = RedirectResponse::new()
            .to("/account")
            .status(StatusCode::SEE_OTHER)
            .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/account");
    }

    #[test]
    fn test_error_page_status() {
        let response = ErrorPage::not_found("/nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ErrorPage::application_error("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
