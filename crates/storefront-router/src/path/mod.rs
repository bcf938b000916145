/// Request path validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use storefront_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/products/product-123"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("about"));
/// assert!(!is_valid_path("/about/"));
/// assert!(!is_valid_path("/docs//api"));
/// assert!(!is_valid_path("/docs\\api"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical and
/// `Cow::Owned` otherwise.
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
///
/// # Examples
///
/// ```
/// use storefront_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("/docs/api/"), "/docs/api");
/// assert_eq!(normalize_path("\\docs\\api"), "/docs/api");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a normalized path into its non-empty segments
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_valid() {
        let path = normalize_path("/blog/2024/11/my-first-post");
        assert!(matches!(path, Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_path_trailing_slash() {
        assert_eq!(normalize_path("/dashboard/"), "/dashboard");
    }

    #[test]
    fn test_normalize_path_double_slash() {
        assert_eq!(normalize_path("/docs///guides//deployment"), "/docs/guides/deployment");
    }

    #[test]
    fn test_normalize_path_root_variants() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(path_segments("/docs/api/authentication"), vec!["docs", "api", "authentication"]);
        assert!(path_segments("/").is_empty());
    }
}
