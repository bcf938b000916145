use super::pattern::last_separator;

/// Lazy iterator over the ancestor ids of a route id
///
/// For `dashboard.settings.profile`, yields `dashboard.settings` → `dashboard`.
/// The id itself is not yielded. Dots inside `[...]` escapes are not
/// separators, so `rss[.]xml` has no ancestors.
///
/// Borrows from the input; no allocations.
///
/// # Examples
///
/// ```
/// use storefront_router::route::RouteIdHierarchy;
///
/// let ids: Vec<&str> = RouteIdHierarchy::new("_auth.account.orders").collect();
/// assert_eq!(ids, vec!["_auth.account", "_auth"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteIdHierarchy<'a> {
    current: &'a str,
}

impl<'a> RouteIdHierarchy<'a> {
    pub fn new(id: &'a str) -> Self {
        Self { current: id }
    }
}

impl<'a> Iterator for RouteIdHierarchy<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = last_separator(self.current)?;
        self.current = &self.current[..pos];
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_nested() {
        let ids: Vec<&str> = RouteIdHierarchy::new("blog.$year.$month.$slug").collect();
        assert_eq!(ids, vec!["blog.$year.$month", "blog.$year", "blog"]);
    }

    #[test]
    fn test_hierarchy_top_level() {
        assert_eq!(RouteIdHierarchy::new("about").next(), None);
    }

    #[test]
    fn test_hierarchy_escaped_dot() {
        let ids: Vec<&str> = RouteIdHierarchy::new("feeds.rss[.]xml").collect();
        assert_eq!(ids, vec!["feeds"]);
    }

    #[test]
    fn test_hierarchy_short_circuit() {
        let mut iter = RouteIdHierarchy::new("a.b.c.d");
        assert_eq!(iter.find(|&id| id == "a.b"), Some("a.b"));
        assert_eq!(iter.next(), Some("a"));
    }
}
