// File: src/app.rs
// Purpose: Resolve a request to its route chain and run loaders, actions and renderers

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{Html, IntoResponse, Json, Response};
use futures::future::try_join_all;
use maud::{html, Markup};
use serde_json::{json, Map, Value as JsonValue};
use std::collections::HashMap;
use std::sync::Arc;
use storefront_router::{MatchedRoute, Route, RouteMatch, Router};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{RouteError, RouteResult};
use crate::request_context::{RequestContext, RouteParams};
use crate::response::{ErrorPage, RouteOutput};
use crate::routes::{self, Location, MatchSummary, RouteModule, RouteView};
use crate::services::Services;

/// Route table plus the module behind every route id
pub struct App {
    router: Router,
    modules: HashMap<String, Arc<dyn RouteModule>>,
    services: Services,
    default_title: String,
}

/// What the chain's loaders produced
enum Loaded {
    Data(Map<String, JsonValue>),
    /// A loader short-circuited with a redirect or raw response
    Respond(Response),
}

impl App {
    /// App with mock services configured from `[storefront]`
    pub fn new(config: &Config) -> Self {
        Self::with_services(config, Services::from_config(&config.storefront))
    }

    pub fn with_services(config: &Config, services: Services) -> Self {
        let routing = &config.routing;
        let root = routes::root();
        let root_route = Route::root(format!("{}/{}", routing.app_dir, root.file()));

        let mut modules: HashMap<String, Arc<dyn RouteModule>> = HashMap::new();
        let mut table = Vec::new();

        for module in routes::manifest() {
            let file_path = format!("{}/{}", routing.routes_dir, module.file());
            let route = Route::from_path(&file_path, &routing.routes_dir);
            debug!(id = %route.id, pattern = %route.pattern, "registered route");
            modules.insert(route.id.clone(), module);
            table.push(route);
        }
        modules.insert(root_route.id.clone(), root);

        let router = Router::with_case_insensitive(routing.case_insensitive)
            .with_route(root_route)
            .with_routes(table);

        Self {
            router,
            modules,
            services,
            default_title: config.project.name.clone(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Request context carrying this app's services
    pub fn context(&self, method: Method, uri: &Uri, headers: HeaderMap, body: Bytes) -> RequestContext {
        RequestContext::from_parts(method, uri, headers, body, self.services.clone())
    }

    fn module(&self, id: &str) -> RouteResult<&Arc<dyn RouteModule>> {
        self.modules
            .get(id)
            .ok_or_else(|| RouteError::UnknownModule(id.to_string()))
    }

    /// Dispatch a request to its route chain
    pub async fn handle(&self, ctx: RequestContext) -> Response {
        let Some(route_match) = self.router.match_route(&ctx.path) else {
            debug!(path = %ctx.path, "no route matched");
            return ErrorPage::not_found(&ctx.path).into_response();
        };

        debug!(
            path = %ctx.path,
            route = %route_match.route.id,
            chain = ?route_match.route_ids(),
            "matched route"
        );

        let ctx = ctx.with_params(RouteParams::from(route_match.params.clone()));

        match self.dispatch(&route_match, &ctx).await {
            Ok(response) => response,
            Err(e) => {
                error!(route = %route_match.route.id, error = %e, "route failed");
                ErrorPage::application_error(e.to_string()).into_response()
            }
        }
    }

    async fn dispatch(&self, route_match: &RouteMatch, ctx: &RequestContext) -> RouteResult<Response> {
        let leaf_id = route_match.route.id.as_str();
        let leaf = self.module(leaf_id)?;

        let action_data = if ctx.is_read() {
            None
        } else {
            info!(route = %leaf_id, method = %ctx.method, "running action");
            match leaf.action(ctx).await {
                None => {
                    warn!(route = %leaf_id, method = %ctx.method, "route has no action");
                    return Ok(ErrorPage::method_not_allowed(ctx.method.as_str(), &ctx.path)
                        .into_response());
                }
                Some(result) => match result? {
                    RouteOutput::Data(data) if leaf.is_resource() => {
                        return Ok(Json(data).into_response())
                    }
                    RouteOutput::Data(data) => Some(data),
                    RouteOutput::Redirect(redirect) => return Ok(redirect.into_response()),
                    RouteOutput::Response(response) => return Ok(response.into_response()),
                },
            }
        };

        if leaf.is_resource() {
            return self.resource_loader(leaf_id, leaf, ctx).await;
        }

        let loader_data = match self.run_loaders(&route_match.matches, ctx).await? {
            Loaded::Data(data) => data,
            Loaded::Respond(response) => return Ok(response),
        };

        if ctx.accepts_json() {
            return Ok(Json(json!({
                "loaderData": loader_data,
                "actionData": action_data,
            }))
            .into_response());
        }

        let location = Location {
            pathname: route_match.pathname.clone(),
            search: ctx.search.clone(),
        };
        let markup = self.render_chain(
            &route_match.matches,
            &loader_data,
            action_data.as_ref(),
            &ctx.params,
            &location,
        )?;

        Ok(Html(markup.into_string()).into_response())
    }

    /// GET on a resource route runs only its own loader
    async fn resource_loader(
        &self,
        id: &str,
        module: &Arc<dyn RouteModule>,
        ctx: &RequestContext,
    ) -> RouteResult<Response> {
        match module.loader(ctx).await {
            None => {
                warn!(route = %id, "resource route has no loader");
                Ok(ErrorPage::method_not_allowed(ctx.method.as_str(), &ctx.path).into_response())
            }
            Some(result) => Ok(match result? {
                RouteOutput::Data(data) => Json(data).into_response(),
                RouteOutput::Redirect(redirect) => redirect.into_response(),
                RouteOutput::Response(response) => response.into_response(),
            }),
        }
    }

    /// Runs every loader in the chain concurrently
    ///
    /// The first redirect or raw response in root-to-leaf order wins.
    async fn run_loaders(&self, chain: &[MatchedRoute], ctx: &RequestContext) -> RouteResult<Loaded> {
        let loads = chain.iter().map(|entry| async move {
            let module = self.module(&entry.route.id)?;
            let output = match module.loader(ctx).await {
                Some(result) => Some(result?),
                None => None,
            };
            Ok::<_, RouteError>((entry.route.id.as_str(), output))
        });

        let mut data = Map::new();
        for (id, output) in try_join_all(loads).await? {
            match output {
                None => {}
                Some(RouteOutput::Data(value)) => {
                    data.insert(id.to_string(), value);
                }
                Some(RouteOutput::Redirect(redirect)) => {
                    debug!(route = %id, location = ?redirect.location(), "loader redirected");
                    return Ok(Loaded::Respond(redirect.into_response()));
                }
                Some(RouteOutput::Response(response)) => {
                    return Ok(Loaded::Respond(response.into_response()));
                }
            }
        }

        Ok(Loaded::Data(data))
    }

    /// Renders leaf first, handing each result to its parent as the outlet
    fn render_chain(
        &self,
        chain: &[MatchedRoute],
        loader_data: &Map<String, JsonValue>,
        action_data: Option<&JsonValue>,
        params: &RouteParams,
        location: &Location,
    ) -> RouteResult<Markup> {
        let summaries: Vec<MatchSummary> = chain
            .iter()
            .map(|entry| MatchSummary {
                id: entry.route.id.clone(),
                pathname: entry.pathname.clone(),
                params: entry.params.clone(),
                has_data: loader_data.contains_key(&entry.route.id),
            })
            .collect();

        let modules = chain
            .iter()
            .map(|entry| self.module(&entry.route.id))
            .collect::<RouteResult<Vec<_>>>()?;

        let title = chain
            .iter()
            .zip(&modules)
            .rev()
            .find_map(|(entry, module)| module.title(loader_data.get(&entry.route.id)))
            .unwrap_or_else(|| self.default_title.clone());

        let leaf_index = chain.len().saturating_sub(1);
        let mut outlet = html! {};

        for (index, (entry, module)) in chain.iter().zip(&modules).enumerate().rev() {
            let view = RouteView {
                id: &entry.route.id,
                pathname: &entry.pathname,
                location,
                params,
                loader_data: loader_data.get(&entry.route.id),
                action_data: if index == leaf_index { action_data } else { None },
                matches: &summaries,
                title: &title,
            };
            outlet = module.render(&view, outlet)?;
        }

        Ok(outlet)
    }
}
