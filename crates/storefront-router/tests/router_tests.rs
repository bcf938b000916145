//! Integration tests for storefront-router
//!
//! Organized by convention:
//! - Static and index routes
//! - Dynamic segments
//! - Splat routes
//! - Pathless and nested layouts
//! - Ranking
//! - Resource route file names

use pretty_assertions::assert_eq;
use rstest::rstest;
use storefront_router::*;

const ROUTES_DIR: &str = "app/routes";

fn storefront_router() -> Router {
    let files = [
        "_index.tsx",
        "about.tsx",
        "contact.tsx",
        "products._index.tsx",
        "products.$productId.tsx",
        "blog.$year.$month.$slug.tsx",
        "docs.$.tsx",
        "categories.$category.$.tsx",
        "search.tsx",
        "_auth.tsx",
        "_auth.account.tsx",
        "dashboard.tsx",
        "dashboard._index.tsx",
        "dashboard.settings.tsx",
        "dashboard.analytics.tsx",
        "api.products.tsx",
        "api.webhook.tsx",
        "rss[.]xml.tsx",
        "debug-routes.tsx",
        "test.$handle/index.tsx",
    ];

    Router::new()
        .with_route(Route::root("app/root.tsx"))
        .with_routes(
            files
                .iter()
                .map(|file| Route::from_path(&format!("{ROUTES_DIR}/{file}"), ROUTES_DIR)),
        )
}

// ============================================================================
// Static and index routes
// ============================================================================

#[rstest]
#[case("/", "_index")]
#[case("/about", "about")]
#[case("/contact", "contact")]
#[case("/products", "products._index")]
#[case("/search", "search")]
#[case("/dashboard", "dashboard._index")]
#[case("/dashboard/settings", "dashboard.settings")]
#[case("/dashboard/analytics", "dashboard.analytics")]
#[case("/api/products", "api.products")]
#[case("/api/webhook", "api.webhook")]
#[case("/rss.xml", "rss[.]xml")]
#[case("/debug-routes", "debug-routes")]
#[case("/account", "_auth.account")]
#[case("/test/hello", "test.$handle")]
fn test_leaf_route(#[case] path: &str, #[case] expected: &str) {
    let router = storefront_router();
    let route_match = router.match_route(path).unwrap();
    assert_eq!(route_match.route.id, expected);
}

#[test]
fn test_root_index_chain() {
    let router = storefront_router();
    let route_match = router.match_route("/").unwrap();
    assert_eq!(route_match.route_ids(), vec!["root", "_index"]);
}

#[test]
fn test_trailing_slash_and_case() {
    let router = storefront_router();
    assert_eq!(router.match_route("/About/").unwrap().route.id, "about");
}

#[test]
fn test_case_sensitive_router() {
    let mut router = storefront_router();
    router.set_case_insensitive(false);
    assert!(router.match_route("/About").is_none());
    assert!(router.match_route("/about").is_some());
}

#[test]
fn test_unknown_path() {
    let router = storefront_router();
    assert!(router.match_route("/nope").is_none());
    assert!(router.match_route("/test").is_none());
}

// ============================================================================
// Dynamic segments
// ============================================================================

#[test]
fn test_single_dynamic_segment() {
    let router = storefront_router();
    let route_match = router.match_route("/products/product-123").unwrap();

    assert_eq!(route_match.route.pattern, "/products/:productId");
    assert_eq!(
        route_match.params.get("productId"),
        Some(&"product-123".to_string())
    );
}

#[test]
fn test_multi_segment_dynamic() {
    let router = storefront_router();
    let route_match = router.match_route("/blog/2024/11/my-first-post").unwrap();

    assert_eq!(route_match.route.id, "blog.$year.$month.$slug");
    assert_eq!(route_match.params.get("year"), Some(&"2024".to_string()));
    assert_eq!(route_match.params.get("month"), Some(&"11".to_string()));
    assert_eq!(
        route_match.params.get("slug"),
        Some(&"my-first-post".to_string())
    );
}

#[test]
fn test_multi_segment_dynamic_requires_all_segments() {
    let router = storefront_router();
    assert!(router.match_route("/blog/2024/11").is_none());
}

// ============================================================================
// Splat routes
// ============================================================================

#[test]
fn test_pure_splat() {
    let router = storefront_router();
    let route_match = router.match_route("/docs/api/authentication").unwrap();

    assert_eq!(route_match.route.id, "docs.$");
    assert_eq!(route_match.splat(), Some("api/authentication"));
}

#[test]
fn test_splat_without_remainder() {
    let router = storefront_router();
    let route_match = router.match_route("/docs").unwrap();

    assert_eq!(route_match.route.id, "docs.$");
    assert_eq!(route_match.splat(), Some(""));
}

#[test]
fn test_dynamic_plus_splat() {
    let router = storefront_router();
    let route_match = router.match_route("/categories/electronics/phones/apple").unwrap();

    assert_eq!(route_match.route.id, "categories.$category.$");
    assert_eq!(
        route_match.params.get("category"),
        Some(&"electronics".to_string())
    );
    assert_eq!(route_match.splat(), Some("phones/apple"));
}

// ============================================================================
// Pathless and nested layouts
// ============================================================================

#[test]
fn test_pathless_layout_in_chain() {
    let router = storefront_router();
    let route_match = router.match_route("/account").unwrap();

    assert_eq!(route_match.route_ids(), vec!["root", "_auth", "_auth.account"]);
    assert_eq!(route_match.matches[1].pathname, "/");
    assert_eq!(route_match.matches[2].pathname, "/account");
}

#[test]
fn test_pathless_layout_never_leaf() {
    let router = Router::new()
        .with_route(Route::root("app/root.tsx"))
        .with_route(Route::from_path("app/routes/_auth.tsx", ROUTES_DIR));

    assert!(router.match_route("/").is_none());
}

#[test]
fn test_nested_layout_chain() {
    let router = storefront_router();
    let route_match = router.match_route("/dashboard/settings").unwrap();

    assert_eq!(
        route_match.route_ids(),
        vec!["root", "dashboard", "dashboard.settings"]
    );
    assert_eq!(route_match.matches[1].pathname, "/dashboard");
}

#[test]
fn test_index_beats_its_layout() {
    let router = storefront_router();
    let route_match = router.match_route("/dashboard").unwrap();

    assert_eq!(
        route_match.route_ids(),
        vec!["root", "dashboard", "dashboard._index"]
    );
}

#[test]
fn test_layout_without_index_is_leaf() {
    let router = Router::new()
        .with_route(Route::from_path("app/routes/dashboard.tsx", ROUTES_DIR))
        .with_route(Route::from_path("app/routes/dashboard.settings.tsx", ROUTES_DIR));

    assert_eq!(router.match_route("/dashboard").unwrap().route.id, "dashboard");
}

#[test]
fn test_nesting_opt_out() {
    let router = Router::new()
        .with_route(Route::from_path("app/routes/products.tsx", ROUTES_DIR))
        .with_route(Route::from_path("app/routes/products_.$id.edit.tsx", ROUTES_DIR));

    let route_match = router.match_route("/products/42/edit").unwrap();
    assert_eq!(route_match.route_ids(), vec!["products_.$id.edit"]);
}

#[test]
fn test_routes_without_root_have_no_implicit_parent() {
    let router = Router::new().with_route(Route::from_path("app/routes/about.tsx", ROUTES_DIR));
    assert_eq!(router.match_route("/about").unwrap().route_ids(), vec!["about"]);
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_static_beats_dynamic() {
    let router = Router::new()
        .with_route(Route::from_path("app/routes/products.$productId.tsx", ROUTES_DIR))
        .with_route(Route::from_path("app/routes/products.new.tsx", ROUTES_DIR));

    assert_eq!(router.match_route("/products/new").unwrap().route.id, "products.new");
    assert_eq!(
        router.match_route("/products/123").unwrap().route.id,
        "products.$productId"
    );
}

#[test]
fn test_dynamic_beats_splat() {
    let router = Router::new()
        .with_route(Route::from_path("app/routes/docs.$.tsx", ROUTES_DIR))
        .with_route(Route::from_path("app/routes/docs.$page.tsx", ROUTES_DIR));

    assert_eq!(router.match_route("/docs/intro").unwrap().route.id, "docs.$page");
    assert_eq!(router.match_route("/docs/intro/more").unwrap().route.id, "docs.$");
}

#[test]
fn test_longest_static_prefix_wins() {
    let router = Router::new()
        .with_route(Route::from_path("app/routes/$section.settings.tsx", ROUTES_DIR))
        .with_route(Route::from_path("app/routes/dashboard.$tab.tsx", ROUTES_DIR));

    assert_eq!(
        router.match_route("/dashboard/settings").unwrap().route.id,
        "dashboard.$tab"
    );
}

#[test]
fn test_routes_sorted_by_specificity() {
    let router = storefront_router();
    let positions = |id: &str| {
        router
            .routes()
            .iter()
            .position(|route| route.id == id)
            .unwrap()
    };

    assert!(positions("about") < positions("docs.$"));
    assert!(positions("products._index") < positions("products.$productId"));
}

// ============================================================================
// Resource route file names
// ============================================================================

#[test]
fn test_escaped_extension_route() {
    let route = Route::from_path("app/routes/rss[.]xml.tsx", ROUTES_DIR);
    assert_eq!(route.id, "rss[.]xml");
    assert_eq!(route.pattern, "/rss.xml");
    assert!(route.matches("/rss.xml").is_some());
    assert!(route.matches("/rss/xml").is_none());
}

#[test]
fn test_folder_route() {
    let route = Route::from_path("app/routes/test.$handle/index.tsx", ROUTES_DIR);
    assert_eq!(route.id, "test.$handle");
    assert_eq!(route.pattern, "/test/:handle");
}
