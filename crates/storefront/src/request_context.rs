// File: src/request_context.rs
// Purpose: Request context with query params, route params, headers, cookies, and form data

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, Uri};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::services::Services;

/// Request context passed to loaders and actions
#[derive(Clone)]
pub struct RequestContext {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: Method,

    /// Request path
    pub path: String,

    /// Raw query string including the leading `?`, or empty
    pub search: String,

    /// Query parameters from URL (?key=value)
    pub query: QueryParams,

    /// Form data from POST/PUT requests
    pub form: FormData,

    /// Raw request body
    pub body: Bytes,

    /// Request headers
    pub headers: HeaderMap,

    /// Parsed cookies
    pub cookies: HashMap<String, String>,

    /// Dynamic segments of the matched route
    pub params: RouteParams,

    /// Customer account and storefront client
    pub services: Services,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("params", &self.params)
            .finish()
    }
}

impl RequestContext {
    /// Create a new request context
    pub fn new(
        method: Method,
        path: String,
        query: QueryParams,
        form: FormData,
        headers: HeaderMap,
        body: Bytes,
        services: Services,
    ) -> Self {
        let cookies = Self::parse_cookies(&headers);

        Self {
            method,
            path,
            search: String::new(),
            query,
            form,
            body,
            headers,
            cookies,
            params: RouteParams::default(),
            services,
        }
    }

    /// Builds a context from the raw parts of an HTTP request
    ///
    /// Query parameters come from the URI; form fields are parsed from
    /// urlencoded or JSON bodies on non-GET requests.
    pub fn from_parts(
        method: Method,
        uri: &Uri,
        headers: HeaderMap,
        body: Bytes,
        services: Services,
    ) -> Self {
        let query = uri
            .query()
            .map(|q| QueryParams::new(parse_urlencoded(q)))
            .unwrap_or_default();

        let form = if method == Method::GET || method == Method::HEAD {
            FormData::new()
        } else {
            Self::parse_form(&headers, &body)
        };

        let mut ctx = Self::new(
            method,
            uri.path().to_string(),
            query,
            form,
            headers,
            body,
            services,
        );
        ctx.search = uri.query().map(|q| format!("?{q}")).unwrap_or_default();
        ctx
    }

    fn parse_form(headers: &HeaderMap, body: &Bytes) -> FormData {
        let content_type = headers
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or_default();

        if content_type.contains("application/json") {
            serde_json::from_slice::<JsonValue>(body)
                .map(FormData::from_json)
                .unwrap_or_default()
        } else if content_type.contains("application/x-www-form-urlencoded") {
            FormData::from_fields(parse_urlencoded(&String::from_utf8_lossy(body)))
        } else {
            FormData::new()
        }
    }

    /// Attach the matched route's params
    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }

    /// Parse cookies from Cookie header
    fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
        let mut cookies = HashMap::new();

        if let Some(cookie_header) = headers.get("cookie") {
            if let Ok(cookie_str) = cookie_header.to_str() {
                for cookie in cookie_str.split(';') {
                    let cookie = cookie.trim();
                    if let Some((key, value)) = cookie.split_once('=') {
                        cookies.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        cookies
    }

    /// Get a cookie value
    pub fn get_cookie(&self, name: &str) -> Option<&String> {
        self.cookies.get(name)
    }

    /// Get a header value
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Check if request accepts JSON
    pub fn accepts_json(&self) -> bool {
        self.get_header("accept")
            .map(|accept| accept.contains("application/json"))
            .unwrap_or(false)
    }

    /// GET and HEAD run loaders; everything else runs an action
    pub fn is_read(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }
}

/// Decodes an `application/x-www-form-urlencoded` string
///
/// `+` is a space; a pair without `=` maps to an empty value. When a key
/// repeats, the first value is kept.
pub fn parse_urlencoded(input: &str) -> HashMap<String, String> {
    fn decode(part: &str) -> String {
        let spaced = part.replace('+', " ");
        urlencoding::decode(&spaced)
            .map(|decoded| decoded.into_owned())
            .unwrap_or(spaced)
    }

    let mut fields = HashMap::new();
    for pair in input.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        };
        fields.entry(key).or_insert(value);
    }
    fields
}

/// Dynamic segment values of the matched route
///
/// Absent params are simply missing. The splat is stored under `*`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Value of a param the route pattern guarantees
    pub fn require(&self, name: &str) -> crate::RouteResult<&str> {
        self.get(name)
            .ok_or_else(|| crate::RouteError::MissingParam(name.to_string()))
    }

    /// Splat remainder, empty when the route has none
    pub fn splat(&self) -> &str {
        self.get(storefront_router::SPLAT_PARAM).unwrap_or_default()
    }
}

impl From<HashMap<String, String>> for RouteParams {
    fn from(params: HashMap<String, String>) -> Self {
        Self::new(params)
    }
}

/// Query parameters from URL
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }
}

/// Form data from POST/PUT requests
///
/// Values are kept exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Top-level members of a JSON object; non-string values keep their JSON text
    pub fn from_json(json: JsonValue) -> Self {
        let fields = match json {
            JsonValue::Object(map) => map
                .into_iter()
                .map(|(key, value)| match value {
                    JsonValue::String(s) => (key, s),
                    other => (key, other.to_string()),
                })
                .collect(),
            _ => HashMap::new(),
        };

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.fields.get(key)
    }
}
