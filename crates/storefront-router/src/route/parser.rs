/// Route id parsing and ranking
///
/// Turns a flat route id into its URL pattern and a `Specificity` rank used to
/// order routes for matching. All functions are pure.

use super::pattern::{classify_segment, split_route_id, PatternSegmentType};

/// Rank of a single URL segment; lower ranks are more specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentRank {
    Static,
    Dynamic,
    Optional,
    Splat,
}

/// Lexicographic list of segment ranks for a pattern
///
/// Comparing two `Specificity` values walks both patterns left to right, so
/// the route with the longer static prefix sorts first, and at the first
/// differing segment literal < dynamic < optional < splat.
///
/// # Examples
///
/// ```
/// use storefront_router::route::parser::parse_route_id;
///
/// let literal = parse_route_id("products.new").specificity;
/// let dynamic = parse_route_id("products.$id").specificity;
/// let splat = parse_route_id("products.$").specificity;
///
/// assert!(literal < dynamic);
/// assert!(dynamic < splat);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub Vec<SegmentRank>);

impl Specificity {
    /// Number of URL segments in the pattern
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parsed form of a route id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPattern {
    /// URL pattern like `/blog/:year/:month/:slug`
    pub pattern: String,
    /// Parameter names in order of appearance (`*` for the splat)
    pub params: Vec<String>,
    /// Names of optional parameters
    pub optional_params: Vec<String>,
    /// Last segment is `_index`
    pub is_index: bool,
    /// Last segment is a pathless `_name`
    pub is_pathless: bool,
    pub has_splat: bool,
    pub specificity: Specificity,
}

impl ParsedPattern {
    fn with_static_segment(mut self, segment: String) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(&segment);
        self.specificity.0.push(SegmentRank::Static);
        self.is_pathless = false;
        self
    }

    fn with_required_param(mut self, name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&name);
        self.params.push(name);
        self.specificity.0.push(SegmentRank::Dynamic);
        self.is_pathless = false;
        self
    }

    fn with_optional_param(mut self, name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&name);
        self.pattern.push('?');
        self.params.push(name.clone());
        self.optional_params.push(name);
        self.specificity.0.push(SegmentRank::Optional);
        self.is_pathless = false;
        self
    }

    fn with_splat(mut self) -> Self {
        self.pattern.push_str("/*");
        self.params.push("*".to_string());
        self.specificity.0.push(SegmentRank::Splat);
        self.has_splat = true;
        self.is_pathless = false;
        self
    }

    fn with_pathless(mut self) -> Self {
        self.is_pathless = true;
        self
    }

    fn with_index(mut self) -> Self {
        self.is_index = true;
        self.is_pathless = false;
        self
    }

    fn finalize(mut self) -> Self {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }
        self
    }
}

fn process_segment(state: ParsedPattern, segment: &str) -> ParsedPattern {
    match classify_segment(segment) {
        PatternSegmentType::Index => state.with_index(),
        PatternSegmentType::Pathless(_) => state.with_pathless(),
        PatternSegmentType::Static(literal) => state.with_static_segment(literal),
        PatternSegmentType::Required(name) => state.with_required_param(name),
        PatternSegmentType::Optional(name) => state.with_optional_param(name),
        PatternSegmentType::Splat => state.with_splat(),
    }
}

/// Parses a route id into its URL pattern
///
/// # Examples
///
/// ```
/// use storefront_router::route::parser::parse_route_id;
///
/// let parsed = parse_route_id("blog.$year.$month.$slug");
/// assert_eq!(parsed.pattern, "/blog/:year/:month/:slug");
/// assert_eq!(parsed.params, vec!["year", "month", "slug"]);
///
/// let parsed = parse_route_id("_auth.account");
/// assert_eq!(parsed.pattern, "/account");
///
/// let parsed = parse_route_id("dashboard._index");
/// assert_eq!(parsed.pattern, "/dashboard");
/// assert!(parsed.is_index);
/// ```
pub fn parse_route_id(id: &str) -> ParsedPattern {
    split_route_id(id)
        .into_iter()
        .fold(ParsedPattern::default(), process_segment)
        .finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_static() {
        let parsed = parse_route_id("about");
        assert_eq!(parsed.pattern, "/about");
        assert!(parsed.params.is_empty());
        assert_eq!(parsed.specificity, Specificity(vec![SegmentRank::Static]));
    }

    #[test]
    fn test_parse_root_index() {
        let parsed = parse_route_id("_index");
        assert_eq!(parsed.pattern, "/");
        assert!(parsed.is_index);
        assert!(!parsed.is_pathless);
        assert!(parsed.specificity.is_empty());
    }

    #[test]
    fn test_parse_pathless_layout() {
        let parsed = parse_route_id("_auth");
        assert_eq!(parsed.pattern, "/");
        assert!(parsed.is_pathless);
    }

    #[test]
    fn test_parse_route_under_pathless_layout() {
        let parsed = parse_route_id("_auth.account");
        assert_eq!(parsed.pattern, "/account");
        assert!(!parsed.is_pathless);
    }

    #[test]
    fn test_parse_dynamic_and_splat() {
        let parsed = parse_route_id("categories.$category.$");
        assert_eq!(parsed.pattern, "/categories/:category/*");
        assert_eq!(parsed.params, vec!["category".to_string(), "*".to_string()]);
        assert!(parsed.has_splat);
        assert_eq!(
            parsed.specificity,
            Specificity(vec![
                SegmentRank::Static,
                SegmentRank::Dynamic,
                SegmentRank::Splat
            ])
        );
    }

    #[test]
    fn test_parse_optional() {
        let parsed = parse_route_id("($lang).about");
        assert_eq!(parsed.pattern, "/:lang?/about");
        assert_eq!(parsed.optional_params, vec!["lang".to_string()]);
    }

    #[test]
    fn test_parse_escaped_extension() {
        let parsed = parse_route_id("rss[.]xml");
        assert_eq!(parsed.pattern, "/rss.xml");
    }

    #[test]
    fn test_parse_nesting_opt_out() {
        let parsed = parse_route_id("products_.$id.edit");
        assert_eq!(parsed.pattern, "/products/:id/edit");
    }

    #[test]
    fn test_specificity_ordering() {
        let mut ranks = vec![
            parse_route_id("docs.$").specificity,
            parse_route_id("docs.$page").specificity,
            parse_route_id("docs.intro").specificity,
            parse_route_id("docs").specificity,
        ];
        ranks.sort();

        assert_eq!(ranks[0], parse_route_id("docs").specificity);
        assert_eq!(ranks[1], parse_route_id("docs.intro").specificity);
        assert_eq!(ranks[2], parse_route_id("docs.$page").specificity);
        assert_eq!(ranks[3], parse_route_id("docs.$").specificity);
    }
}
