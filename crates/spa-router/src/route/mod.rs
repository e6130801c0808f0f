//! Route definitions
//!
//! A [`Route`] binds one path pattern to a view name and the component that
//! renders it. Patterns are parsed once, when the route is created.

pub mod matcher;
pub mod pattern;

use std::collections::BTreeMap;

use crate::error::{Result, RouteError};
use crate::path::{decode_component, normalize_path, segments};
pub use pattern::{classify_segment, parse_pattern, PatternSegment};

/// A single route: pattern, view name, component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Declared pattern like "/:initial?"
    pub pattern: String,
    /// View identifier, unique within a table
    pub name: String,
    /// Component rendered for this view
    pub component: String,
    /// Parsed pattern
    pub segments: Vec<PatternSegment>,
    /// Per-segment priority key (lower = tried first)
    pub priority: Vec<u8>,
    /// Arbitrary metadata (titles, permissions, etc.)
    pub meta: BTreeMap<String, String>,
}

impl Route {
    /// Creates a route, parsing its pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::Route;
    ///
    /// let route = Route::new("/:initial?", "demo", "Demo").unwrap();
    /// assert_eq!(route.param_names().collect::<Vec<_>>(), vec!["initial"]);
    /// ```
    pub fn new(
        pattern: impl Into<String>,
        name: impl Into<String>,
        component: impl Into<String>,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let segments = parse_pattern(&pattern)?;
        let priority = pattern::calculate_priority(&segments);

        Ok(Route {
            pattern,
            name: name.into(),
            component: component.into(),
            segments,
            priority,
            meta: BTreeMap::new(),
        })
    }

    /// Creates a route from segments that are already known to be valid
    pub(crate) fn from_parts(
        pattern: &str,
        name: &str,
        component: &str,
        segments: Vec<PatternSegment>,
    ) -> Self {
        Route {
            pattern: pattern.to_string(),
            name: name.to_string(),
            component: component.to_string(),
            priority: pattern::calculate_priority(&segments),
            segments,
            meta: BTreeMap::new(),
        }
    }

    /// Adds a metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Names of all parameters, in pattern order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(PatternSegment::param_name)
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path, returning decoded parameter values
    ///
    /// The path is normalized first, so `/hello/` and `//hello` match like
    /// `/hello`. Query strings and fragments must already be removed.
    pub fn matches_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Option<BTreeMap<String, String>> {
        let normalized = normalize_path(path);
        let path_segments = segments(&normalized);

        let raw = matcher::match_segments(&self.segments, &path_segments, case_insensitive)?;

        Some(
            raw.into_iter()
                .map(|(name, value)| (name, decode_component(&value)))
                .collect(),
        )
    }

    /// Renders this route's pattern with the given parameters
    ///
    /// Values are percent-encoded. Missing optional parameters drop their
    /// segment; a missing required parameter is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::Route;
    /// use std::collections::BTreeMap;
    ///
    /// let route = Route::new("/:initial?", "demo", "Demo").unwrap();
    ///
    /// let mut params = BTreeMap::new();
    /// assert_eq!(route.generate_url(&params).unwrap(), "/");
    ///
    /// params.insert("initial".to_string(), "hello world".to_string());
    /// assert_eq!(route.generate_url(&params).unwrap(), "/hello%20world");
    /// ```
    pub fn generate_url(&self, params: &BTreeMap<String, String>) -> Result<String> {
        let mut url = String::new();

        for segment in &self.segments {
            match segment {
                PatternSegment::Static(text) => {
                    url.push('/');
                    url.push_str(text);
                }
                PatternSegment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            route: self.name.clone(),
                            param: name.clone(),
                        })?;
                    url.push('/');
                    url.push_str(&urlencoding::encode(value));
                }
                PatternSegment::OptionalParam(name) => {
                    if let Some(value) = params.get(name).filter(|v| !v.is_empty()) {
                        url.push('/');
                        url.push_str(&urlencoding::encode(value));
                    }
                }
            }
        }

        if url.is_empty() {
            url.push('/');
        }
        Ok(url)
    }
}
