// `api.webhook`: POST-only resource route

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value as JsonValue};
use tracing::{info, warn};

use super::{now_iso, RouteModule};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::{ResourceResponse, RouteOutput};

/// Own enumerable keys of a payload, in document order
///
/// Arrays give their indices and strings their UTF-16 unit indices; numbers and
/// booleans have none. `None` for `null`, which has no keys to enumerate.
pub fn payload_keys(payload: &JsonValue) -> Option<Vec<String>> {
    let indices = |len: usize| -> Vec<String> { (0..len).map(|i| i.to_string()).collect() };

    match payload {
        JsonValue::Null => None,
        JsonValue::Object(map) => Some(map.keys().cloned().collect()),
        JsonValue::Array(items) => Some(indices(items.len())),
        JsonValue::String(text) => Some(indices(text.encode_utf16().count())),
        JsonValue::Bool(_) | JsonValue::Number(_) => Some(Vec::new()),
    }
}

fn invalid_payload() -> RouteResult<ResourceResponse> {
    Ok(ResourceResponse::json(&json!({
        "success": false,
        "error": "Invalid JSON payload",
    }))?
    .status(StatusCode::BAD_REQUEST))
}

/// Response for a webhook delivery
pub fn receive(method: &Method, body: &[u8], received_at: String) -> RouteResult<ResourceResponse> {
    if *method != Method::POST {
        return Ok(ResourceResponse::json(&json!({"error": "Method not allowed"}))?
            .status(StatusCode::METHOD_NOT_ALLOWED));
    }

    let payload = match serde_json::from_slice::<JsonValue>(body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "rejecting webhook payload");
            return invalid_payload();
        }
    };

    let Some(keys) = payload_keys(&payload) else {
        warn!("rejecting null webhook payload");
        return invalid_payload();
    };

    ResourceResponse::json(&json!({
        "success": true,
        "message": "Webhook received",
        "receivedAt": received_at,
        "payloadKeys": keys,
    }))
}

pub struct ApiWebhook;

#[async_trait]
impl RouteModule for ApiWebhook {
    fn file(&self) -> &'static str {
        "api.webhook.tsx"
    }

    fn is_resource(&self) -> bool {
        true
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let body = json!({
            "message": "This endpoint accepts POST requests for webhooks",
            "methods": ["POST"],
        });
        Some(
            ResourceResponse::json(&body)
                .map(|response| response.status(StatusCode::METHOD_NOT_ALLOWED).into()),
        )
    }

    async fn action(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        info!(method = %ctx.method, bytes = ctx.body.len(), "webhook delivery");
        Some(receive(&ctx.method, &ctx.body, now_iso()).map(RouteOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn body(response: &ResourceResponse) -> JsonValue {
        serde_json::from_str(response.body_str()).unwrap()
    }

    #[test]
    fn test_valid_payload() {
        let response = receive(&Method::POST, br#"{"a":1}"#, "now".to_string()).unwrap();
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            body(&response),
            json!({
                "success": true,
                "message": "Webhook received",
                "receivedAt": "now",
                "payloadKeys": ["a"],
            })
        );
    }

    #[test]
    fn test_invalid_payload() {
        let response = receive(&Method::POST, b"not json", "now".to_string()).unwrap();
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body(&response)["error"], "Invalid JSON payload");
    }

    #[test]
    fn test_other_methods_rejected() {
        let response = receive(&Method::PUT, b"{}", "now".to_string()).unwrap();
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body(&response), json!({"error": "Method not allowed"}));
    }

    #[test]
    fn test_null_payload_rejected() {
        let response = receive(&Method::POST, b"null", "now".to_string()).unwrap();
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body(&response),
            json!({"success": false, "error": "Invalid JSON payload"})
        );
    }

    #[test]
    fn test_keys_keep_document_order() {
        let response = receive(&Method::POST, br#"{"zeta":1,"alpha":2}"#, "now".to_string()).unwrap();
        assert_eq!(body(&response)["payloadKeys"], json!(["zeta", "alpha"]));
    }

    #[rstest]
    #[case(json!({"b": 1, "a": 2}), Some(vec!["b", "a"]))]
    #[case(json!([10, 20]), Some(vec!["0", "1"]))]
    #[case(json!("ab"), Some(vec!["0", "1"]))]
    #[case(json!(42), Some(vec![]))]
    #[case(json!(true), Some(vec![]))]
    #[case(JsonValue::Null, None)]
    fn test_payload_keys(#[case] payload: JsonValue, #[case] expected: Option<Vec<&str>>) {
        let expected = expected.map(|keys| keys.into_iter().map(str::to_string).collect::<Vec<_>>());
        assert_eq!(payload_keys(&payload), expected);
    }
}
