/// Segment classification for flat route ids
///
/// A route id such as `blog.$year.$month.$slug` is a dot-separated list of
/// segments. Each segment is classified on its own; all functions here are
/// pure.

/// Represents the different kinds of route id segments
///
/// # Examples
///
/// ```
/// use storefront_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert_eq!(classify_segment("about"), PatternSegmentType::Static("about".to_string()));
/// assert_eq!(classify_segment("$id"), PatternSegmentType::Required("id".to_string()));
/// assert_eq!(classify_segment("($lang)"), PatternSegmentType::Optional("lang".to_string()));
/// assert_eq!(classify_segment("$"), PatternSegmentType::Splat);
/// assert_eq!(classify_segment("_index"), PatternSegmentType::Index);
/// assert_eq!(classify_segment("_auth"), PatternSegmentType::Pathless("_auth".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// `_index`: renders at the parent's URL
    Index,
    /// `_auth`: layout that contributes no URL segment
    Pathless(String),
    /// Literal text, with `[]` escapes removed and a trailing `_` dropped
    Static(String),
    /// `$name`
    Required(String),
    /// `($name)`
    Optional(String),
    /// `$` on its own
    Splat,
}

/// Classifies one segment of a route id
///
/// # Rules (evaluated in order)
///
/// 1. `_index` → index route
/// 2. `$` → splat
/// 3. `($name)` → optional parameter
/// 4. `$name` → required parameter
/// 5. `_name` → pathless layout
/// 6. anything else → static (`[.]` escapes unwrapped, trailing `_` dropped)
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    if segment == "_index" {
        return PatternSegmentType::Index;
    }

    if segment == "$" {
        return PatternSegmentType::Splat;
    }

    if let Some(name) = segment
        .strip_prefix("($")
        .and_then(|s| s.strip_suffix(')'))
    {
        return PatternSegmentType::Optional(name.to_string());
    }

    if let Some(name) = segment.strip_prefix('$') {
        return PatternSegmentType::Required(name.to_string());
    }

    if segment.starts_with('_') {
        return PatternSegmentType::Pathless(segment.to_string());
    }

    PatternSegmentType::Static(unescape_static(segment))
}

/// Unwraps `[...]` escapes and strips a trailing nesting opt-out `_`
///
/// `rss[.]xml` → `rss.xml`, `products_` → `products`, `[_]private` → `_private`
pub fn unescape_static(segment: &str) -> String {
    let trimmed = match segment.strip_suffix('_') {
        Some(rest) if !rest.ends_with(']') && !rest.is_empty() => rest,
        _ => segment,
    };

    trimmed.chars().filter(|c| *c != '[' && *c != ']').collect()
}

/// Splits a route id on `.` separators that are not inside `[...]` escapes
///
/// # Examples
///
/// ```
/// use storefront_router::route::pattern::split_route_id;
///
/// assert_eq!(split_route_id("blog.$year.$slug"), vec!["blog", "$year", "$slug"]);
/// assert_eq!(split_route_id("rss[.]xml"), vec!["rss[.]xml"]);
/// assert!(split_route_id("").is_empty());
/// ```
pub fn split_route_id(id: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, ch) in id.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&id[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&id[start..]);

    segments.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Byte offset of the last separator `.` outside `[...]` escapes
pub(crate) fn last_separator(id: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut last = None;

    for (idx, ch) in id.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => last = Some(idx),
            _ => {}
        }
    }

    last
}
