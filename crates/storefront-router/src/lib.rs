//! # Storefront Router
//!
//! Flat file-based routing: route module file names become URL patterns and
//! requests resolve to a chain of matched routes, root layout first.
//!
//! - Static routes (`about.tsx` → `/about`)
//! - Index routes (`products._index.tsx` → `/products`)
//! - Dynamic segments (`products.$productId.tsx` → `/products/:productId`)
//! - Optional segments (`($lang).about.tsx` → `/:lang?/about`)
//! - Splat routes (`docs.$.tsx` → `/docs/*`)
//! - Pathless layouts (`_auth.tsx` wraps `_auth.account.tsx` → `/account`)
//! - Nested layouts (`dashboard.tsx` wraps `dashboard.settings.tsx`)
//! - Escaped dots (`rss[.]xml.tsx` → `/rss.xml`)
//!
//! ## Ranking
//!
//! Routes are ordered by [`Specificity`]: walking the pattern left to right,
//! literal segments beat dynamic segments, which beat optional segments,
//! which beat splats. The first route in that order that matches the path is
//! the leaf. Index routes win ties against the layout they render inside.
//!
//! ## Example
//!
//! ```
//! use storefront_router::{Route, Router};
//!
//! let mut router = Router::new();
//! router.add_route(Route::root("app/root.tsx"));
//! router.add_route(Route::from_path("app/routes/dashboard.tsx", "app/routes"));
//! router.add_route(Route::from_path("app/routes/dashboard.settings.tsx", "app/routes"));
//!
//! let route_match = router.match_route("/dashboard/settings").unwrap();
//! let ids: Vec<&str> = route_match.matches.iter().map(|m| m.route.id.as_str()).collect();
//! assert_eq!(ids, vec!["root", "dashboard", "dashboard.settings"]);
//! ```

use std::cmp::Reverse;
use std::collections::HashMap;

pub mod path;
pub mod route;

pub use path::{is_valid_path, normalize_path, path_segments};
pub use route::{
    classify_segment, parse_route_id, route_id_from_path, split_route_id, PatternSegmentType,
    RouteIdHierarchy, SegmentRank, Specificity,
};

/// Id of the document-level layout every other route nests under
pub const ROOT_ROUTE_ID: &str = "root";

/// Parameter name under which a splat's remainder is stored
pub const SPLAT_PARAM: &str = "*";

// ============================================================================
// Core Types
// ============================================================================

/// A compiled route definition
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Route id, the module file name without extension (`blog.$year.$slug`)
    pub id: String,
    /// Source file of the route module
    pub file_path: String,
    /// URL pattern like `/blog/:year/:slug`
    pub pattern: String,
    /// Parameter names, `*` for the splat
    pub params: Vec<String>,
    pub optional_params: Vec<String>,
    /// Renders at its parent's URL
    pub is_index: bool,
    /// Contributes no URL segment and never matches as the leaf
    pub is_pathless: bool,
    pub has_splat: bool,
    /// Matching rank, lower is more specific
    pub specificity: Specificity,
}

/// One entry in a resolved route chain
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRoute {
    pub route: Route,
    /// Portion of the request path this route accounts for
    pub pathname: String,
    /// Params of the whole match; every entry sees the same map
    pub params: HashMap<String, String>,
}

/// Result of resolving a request path
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The leaf route
    pub route: Route,
    /// Extracted parameters from the path
    pub params: HashMap<String, String>,
    /// Normalized request path
    pub pathname: String,
    /// Root-to-leaf chain; the last entry is the leaf
    pub matches: Vec<MatchedRoute>,
}

impl RouteMatch {
    /// Route ids of the chain, root first
    pub fn route_ids(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.route.id.as_str()).collect()
    }

    /// Value of the splat parameter, if the leaf has one
    pub fn splat(&self) -> Option<&str> {
        self.params.get(SPLAT_PARAM).map(String::as_str)
    }
}

// ============================================================================
// Route Implementation
// ============================================================================

impl Route {
    /// Creates a route from a route module's file path
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_router::Route;
    ///
    /// let route = Route::from_path("app/routes/products.$productId.tsx", "app/routes");
    /// assert_eq!(route.id, "products.$productId");
    /// assert_eq!(route.pattern, "/products/:productId");
    /// assert_eq!(route.params, vec!["productId"]);
    /// ```
    pub fn from_path(file_path: &str, routes_dir: &str) -> Self {
        let id = route_id_from_path(file_path, routes_dir);
        Self::from_id(id, file_path)
    }

    /// Creates a route directly from its id
    pub fn from_id(id: impl Into<String>, file_path: impl Into<String>) -> Self {
        let id = id.into();
        let parsed = parse_route_id(&id);

        Route {
            id,
            file_path: file_path.into(),
            pattern: parsed.pattern,
            params: parsed.params,
            optional_params: parsed.optional_params,
            is_index: parsed.is_index,
            is_pathless: parsed.is_pathless,
            has_splat: parsed.has_splat,
            specificity: parsed.specificity,
        }
    }

    /// The root layout route
    ///
    /// ```
    /// use storefront_router::{Route, ROOT_ROUTE_ID};
    ///
    /// let root = Route::root("app/root.tsx");
    /// assert_eq!(root.id, ROOT_ROUTE_ID);
    /// assert!(root.is_pathless);
    /// ```
    pub fn root(file_path: impl Into<String>) -> Self {
        Route {
            id: ROOT_ROUTE_ID.to_string(),
            file_path: file_path.into(),
            pattern: "/".to_string(),
            params: Vec::new(),
            optional_params: Vec::new(),
            is_index: false,
            is_pathless: true,
            has_splat: false,
            specificity: Specificity::default(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ROUTE_ID
    }

    /// Number of URL segments this route consumes, not counting a splat
    pub fn url_segment_count(&self) -> usize {
        self.specificity
            .0
            .iter()
            .filter(|rank| **rank != SegmentRank::Splat)
            .count()
    }

    /// Number of dot-separated segments in the id
    pub fn depth(&self) -> usize {
        split_route_id(&self.id).len()
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path with options
    ///
    /// Walks pattern and path segments together. Optional parameters try the
    /// consuming branch first and fall back to skipping. A splat takes the
    /// remaining segments, zero or more. Dynamic values are percent-decoded.
    pub fn matches_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Option<HashMap<String, String>> {
        let pattern_segments = path_segments(&self.pattern);
        let path = normalize_path(path);
        let segments = path_segments(&path);

        fn match_segments(
            pattern: &[&str],
            path: &[&str],
            mut params: HashMap<String, String>,
            case_insensitive: bool,
        ) -> Option<HashMap<String, String>> {
            let Some((pattern_seg, pattern_rest)) = pattern.split_first() else {
                return path.is_empty().then_some(params);
            };

            if *pattern_seg == "*" {
                params.insert(SPLAT_PARAM.to_string(), decode(&path.join("/")));
                return Some(params);
            }

            if let Some(name) = pattern_seg
                .strip_prefix(':')
                .and_then(|s| s.strip_suffix('?'))
            {
                if let Some((value, path_rest)) = path.split_first() {
                    let mut consumed = params.clone();
                    consumed.insert(name.to_string(), decode(value));
                    if let Some(found) =
                        match_segments(pattern_rest, path_rest, consumed, case_insensitive)
                    {
                        return Some(found);
                    }
                }
                return match_segments(pattern_rest, path, params, case_insensitive);
            }

            let (value, path_rest) = path.split_first()?;

            if let Some(name) = pattern_seg.strip_prefix(':') {
                params.insert(name.to_string(), decode(value));
                return match_segments(pattern_rest, path_rest, params, case_insensitive);
            }

            let matches = if case_insensitive {
                pattern_seg.eq_ignore_ascii_case(value)
            } else {
                pattern_seg == value
            };

            if matches {
                match_segments(pattern_rest, path_rest, params, case_insensitive)
            } else {
                None
            }
        }

        match_segments(&pattern_segments, &segments, HashMap::new(), case_insensitive)
    }
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

fn pathname_prefix(segments: &[&str], count: usize) -> String {
    if count == 0 {
        return "/".to_string();
    }
    let take = count.min(segments.len());
    format!("/{}", segments[..take].join("/"))
}

// ============================================================================
// Router
// ============================================================================

/// Route table: holds compiled routes in match order and resolves paths
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    case_insensitive: bool,
}

impl Router {
    /// Creates an empty, case-insensitive router
    pub fn new() -> Self {
        Self::with_case_insensitive(true)
    }

    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        Self {
            routes: Vec::new(),
            case_insensitive,
        }
    }

    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.case_insensitive = case_insensitive;
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Adds a route (builder style)
    pub fn with_route(mut self, route: Route) -> Self {
        self.add_route(route);
        self
    }

    /// Adds multiple routes (builder style)
    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        routes.into_iter().for_each(|route| self.insert(route));
        self.sort_routes();
        self
    }

    /// Adds a route, replacing any route with the same id
    pub fn add_route(&mut self, route: Route) {
        self.insert(route);
        self.sort_routes();
    }

    fn insert(&mut self, route: Route) {
        self.routes.retain(|existing| existing.id != route.id);
        self.routes.push(route);
    }

    /// Orders routes for matching: specificity, then index routes, then
    /// deeper ids, then id for a stable order
    pub fn sort_routes(&mut self) {
        self.routes.sort_by(|a, b| {
            a.specificity
                .cmp(&b.specificity)
                .then_with(|| b.is_index.cmp(&a.is_index))
                .then_with(|| Reverse(a.depth()).cmp(&Reverse(b.depth())))
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    /// All routes in match order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get_route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.id == id)
    }

    /// The layout a route renders inside
    ///
    /// The longest registered id that is a dotted prefix of the route's id,
    /// falling back to the root route.
    pub fn parent(&self, route: &Route) -> Option<&Route> {
        if route.is_root() {
            return None;
        }

        RouteIdHierarchy::new(&route.id)
            .find_map(|id| self.get_route(id))
            .or_else(|| self.get_route(ROOT_ROUTE_ID))
    }

    /// Ancestor layouts of a route, root first
    pub fn ancestors(&self, route: &Route) -> Vec<&Route> {
        let mut chain = Vec::new();
        let mut current = self.parent(route);

        while let Some(parent) = current {
            chain.push(parent);
            current = self.parent(parent);
        }

        chain.reverse();
        chain
    }

    /// Resolves a request path to its route chain
    ///
    /// Returns `None` when no non-pathless route matches.
    pub fn match_route(&self, path: &str) -> Option<RouteMatch> {
        let pathname = normalize_path(path).into_owned();

        let (leaf, params) = self
            .routes
            .iter()
            .filter(|route| !route.is_pathless)
            .find_map(|route| {
                route
                    .matches_with_options(&pathname, self.case_insensitive)
                    .map(|params| (route, params))
            })?;

        let segments = path_segments(&pathname);
        let mut matches: Vec<MatchedRoute> = self
            .ancestors(leaf)
            .into_iter()
            .map(|route| MatchedRoute {
                route: route.clone(),
                pathname: pathname_prefix(&segments, route.url_segment_count()),
                params: params.clone(),
            })
            .collect();

        matches.push(MatchedRoute {
            route: leaf.clone(),
            pathname: pathname.clone(),
            params: params.clone(),
        });

        Some(RouteMatch {
            route: leaf.clone(),
            params,
            pathname,
            matches,
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
