// File: src/server.rs
// Purpose: axum router that forwards every request to the storefront app

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use storefront::App;
use tower_http::trace::TraceLayer;

/// Catch-all router; route resolution happens inside [`App`]
pub fn build_router(app: Arc<App>) -> Router {
    Router::new()
        .route("/", any(route_handler))
        .route("/*path", any(route_handler))
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}

async fn route_handler(
    State(app): State<Arc<App>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let ctx = app.context(method, &uri, headers, body);
    app.handle(ctx).await
}
