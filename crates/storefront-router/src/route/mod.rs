/// Route id parsing for flat file-based routes
///
/// - `pattern`: classify single id segments (`$id`, `_index`, `$`, ...)
/// - `parser`: fold a whole id into a URL pattern and rank
/// - `hierarchy`: walk a route id's ancestors

pub mod hierarchy;
pub mod parser;
pub mod pattern;

pub use hierarchy::RouteIdHierarchy;
pub use parser::{parse_route_id, ParsedPattern, SegmentRank, Specificity};
pub use pattern::{classify_segment, split_route_id, PatternSegmentType};

/// Extensions a route module file may carry
const MODULE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "rs"];

/// File names that stand for their folder in folder routes
const FOLDER_MODULE_NAMES: &[&str] = &["route", "index"];

/// Derives a route id from a route module's file path
///
/// Strips the routes directory and module extension. For folder routes
/// (`test.$handle/index.tsx`) the folder name is the id.
///
/// # Examples
///
/// ```
/// use storefront_router::route::route_id_from_path;
///
/// assert_eq!(route_id_from_path("app/routes/docs.$.tsx", "app/routes"), "docs.$");
/// assert_eq!(route_id_from_path("app/routes/rss[.]xml.tsx", "app/routes"), "rss[.]xml");
/// assert_eq!(
///     route_id_from_path("app/routes/test.$handle/index.tsx", "app/routes"),
///     "test.$handle"
/// );
/// ```
pub fn route_id_from_path(file_path: &str, routes_dir: &str) -> String {
    let file_path = file_path.replace('\\', "/");
    let routes_dir = routes_dir.replace('\\', "/");

    let relative = file_path
        .strip_prefix(routes_dir.trim_end_matches('/'))
        .unwrap_or(&file_path)
        .trim_start_matches('/');

    let without_ext = match relative.rsplit_once('.') {
        Some((stem, ext)) if MODULE_EXTENSIONS.contains(&ext) => stem,
        _ => relative,
    };

    match without_ext.rsplit_once('/') {
        Some((folder, file)) if FOLDER_MODULE_NAMES.contains(&file) => {
            folder.rsplit('/').next().unwrap_or(folder).to_string()
        }
        Some((_, file)) => file.to_string(),
        None => without_ext.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_id_flat_file() {
        assert_eq!(
            route_id_from_path("app/routes/blog.$year.$month.$slug.tsx", "app/routes"),
            "blog.$year.$month.$slug"
        );
    }

    #[test]
    fn test_route_id_trailing_slash_in_dir() {
        assert_eq!(route_id_from_path("app/routes/about.tsx", "app/routes/"), "about");
    }

    #[test]
    fn test_route_id_windows_separators() {
        assert_eq!(
            route_id_from_path("app\\routes\\_auth.account.tsx", "app\\routes"),
            "_auth.account"
        );
    }

    #[test]
    fn test_route_id_folder_route() {
        assert_eq!(
            route_id_from_path("app/routes/dashboard.settings/route.tsx", "app/routes"),
            "dashboard.settings"
        );
    }

    #[test]
    fn test_route_id_keeps_unknown_extension() {
        assert_eq!(route_id_from_path("routes/rss[.]xml", "routes"), "rss[.]xml");
    }
}
