// File: src/error.rs
// Purpose: Errors raised by loaders, actions and renderers

use thiserror::Error;

/// Failure inside a route module
///
/// Any of these surfaces as a 500 "Application Error" page.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("failed to encode route data: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("loader data for `{route}` has an unexpected shape: {source}")]
    InvalidData {
        route: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("route `{0}` rendered without loader data")]
    MissingData(String),

    #[error("missing route parameter `{0}`")]
    MissingParam(String),

    #[error("no module registered for route `{0}`")]
    UnknownModule(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
