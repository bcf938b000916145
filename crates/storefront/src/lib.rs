// Storefront - file-based route examples for a web storefront
// Loaders, actions and Maud renderers per route, dispatched over a flat route table

pub mod app;
pub mod config;
pub mod error;
pub mod request_context;
pub mod response;
pub mod routes;
pub mod services;

// Re-export framework types
pub use app::App;
pub use config::Config;
pub use error::{RouteError, RouteResult};
pub use request_context::{parse_urlencoded, FormData, QueryParams, RequestContext, RouteParams};
pub use response::{ErrorPage, RedirectResponse, ResourceResponse, RouteOutput};
pub use routes::{ActionResult, Location, MatchSummary, RouteModule, RouteView};
pub use services::{
    CustomerAccount, MockCustomerAccount, MockStorefront, Services, StorefrontClient,
    StorefrontInfo,
};

// Re-export commonly used types from dependencies
pub use axum;
pub use axum::http::StatusCode;
pub use maud::Markup;
pub use storefront_router;
