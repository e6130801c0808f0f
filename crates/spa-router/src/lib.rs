//! # spa-router
//!
//! Route table for a single-page application with support for:
//! - Static segments (`/about`)
//! - Required parameters (`/users/:id`)
//! - Optional parameters (`/:initial?`)
//! - History-API and hash-fragment navigation, under a configurable base
//! - URL generation for named routes
//!
//! The application's own table is [`RouteTable::demo`]: one route,
//! `/:initial?`, named `demo`, rendered by the `Demo` component.
//!
//! ## Path Normalization
//!
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//!
//! ## Example
//!
//! ```
//! use spa_router::RouteTable;
//!
//! let table = RouteTable::demo();
//!
//! let resolution = table.resolve("/hello").unwrap();
//! assert_eq!(resolution.view, "demo");
//! assert_eq!(resolution.initial(), Some("hello"));
//!
//! let resolution = table.resolve("/").unwrap();
//! assert!(resolution.params.is_empty());
//!
//! assert!(table.resolve("/a/b").unwrap_err().is_not_found());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

pub mod config;
pub mod error;
pub mod mode;
pub mod path;
pub mod route;

pub use config::{Config, RouteConfig, RouterConfig};
pub use error::{Result, RouteError};
pub use mode::{NavigationMode, RouteLocation};
pub use path::{is_valid_path, normalize_path};
pub use route::{PatternSegment, Route};

/// Pattern of the application's single route
pub const DEMO_PATTERN: &str = "/:initial?";
/// View name of the application's single route
pub const DEMO_VIEW: &str = "demo";
/// Component rendering the application's single route
pub const DEMO_COMPONENT: &str = "Demo";
/// Parameter bound by [`DEMO_PATTERN`]
pub const DEMO_PARAM: &str = "initial";

// ============================================================================
// Resolution
// ============================================================================

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Name of the matched route
    pub view: String,
    /// Component to render
    pub component: String,
    /// Pattern that matched
    pub pattern: String,
    /// Normalized route path
    pub path: String,
    /// Decoded path parameters; absent optional parameters are not present
    pub params: BTreeMap<String, String>,
    /// Decoded query parameters
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
    /// Fragment, without the `#`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Metadata of the matched route
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl Resolution {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The `initial` parameter of the demo view
    pub fn initial(&self) -> Option<&str> {
        self.param(DEMO_PARAM)
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Immutable mapping from path patterns to views
///
/// Routes are kept sorted by priority, compared segment by segment (static
/// before required before optional); ties keep registration order. The first matching route wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    mode: NavigationMode,
    base: String,
    case_insensitive: bool,
}

impl RouteTable {
    /// Creates an empty table: history mode, base `/`, case-insensitive
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            mode: NavigationMode::History,
            base: "/".to_string(),
            case_insensitive: true,
        }
    }

    /// The application's table: history mode, base `/`, `/:initial?` → `demo`
    pub fn demo() -> Self {
        let route = Route::from_parts(
            DEMO_PATTERN,
            DEMO_VIEW,
            DEMO_COMPONENT,
            vec![PatternSegment::OptionalParam(DEMO_PARAM.to_string())],
        );

        let mut table = Self::new();
        table.insert(route);
        table
    }

    /// Builds a table from configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::{Config, RouteTable};
    ///
    /// let table = RouteTable::from_config(&Config::default()).unwrap();
    /// assert_eq!(table.resolve("/hello").unwrap().view, "demo");
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        let routes = config
            .routes
            .iter()
            .map(|entry| {
                Route::new(&entry.path, &entry.name, &entry.component)
                    .map(|route| Route {
                        meta: entry.meta.clone(),
                        ..route
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let table = Self::new()
            .with_mode(config.router.mode)
            .with_base(&config.router.base)
            .with_case_sensitivity(config.router.case_insensitive)
            .with_routes(routes)?;

        info!(
            routes = table.routes.len(),
            mode = %table.mode,
            base = %table.base,
            "route table built"
        );
        Ok(table)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    pub fn with_mode(mut self, mode: NavigationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the base; stored in canonical form (`/app/` → `/app`)
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = mode::normalize_base(base);
        self
    }

    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Adds a route, rejecting a name that is already registered
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::{Route, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_route(Route::new("/:initial?", "demo", "Demo").unwrap())
    ///     .unwrap();
    /// assert_eq!(table.routes().len(), 1);
    ///
    /// let again = table.with_route(Route::new("/other", "demo", "Other").unwrap());
    /// assert!(again.is_err());
    /// ```
    pub fn with_route(mut self, route: Route) -> Result<Self> {
        if self.route(&route.name).is_some() {
            return Err(RouteError::DuplicateRouteName(route.name));
        }
        self.insert(route);
        Ok(self)
    }

    /// Adds multiple routes at once
    pub fn with_routes<I>(self, routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        routes
            .into_iter()
            .try_fold(self, |table, route| table.with_route(route))
    }

    fn insert(&mut self, route: Route) {
        self.routes.push(route);
        // Stable sort keeps registration order among equal priorities
        self.routes.sort_by(|a, b| a.priority.cmp(&b.priority));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Routes in matching order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks up a route by name
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolves a route path to a view and its parameters
    ///
    /// The input is a route path (base already removed) and may carry a
    /// query string and fragment. Returns [`RouteError::NotFound`] when no
    /// pattern matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::RouteTable;
    ///
    /// let table = RouteTable::demo();
    /// let resolution = table.resolve("/hello?tab=2#top").unwrap();
    /// assert_eq!(resolution.initial(), Some("hello"));
    /// assert_eq!(resolution.query.get("tab").map(String::as_str), Some("2"));
    /// assert_eq!(resolution.hash.as_deref(), Some("top"));
    /// ```
    pub fn resolve(&self, path: &str) -> Result<Resolution> {
        let parts = path::split_location(path);
        self.resolve_parts(parts.path, parts.query, parts.fragment)
    }

    /// Resolves an address-bar location according to the navigation mode
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::{NavigationMode, RouteTable};
    ///
    /// let table = RouteTable::demo().with_mode(NavigationMode::Hash);
    /// let resolution = table.resolve_location("/#/hello").unwrap();
    /// assert_eq!(resolution.initial(), Some("hello"));
    /// ```
    pub fn resolve_location(&self, location: &str) -> Result<Resolution> {
        let loc = mode::extract_route_location(self.mode, &self.base, location, self.case_insensitive)?;
        self.resolve_parts(&loc.path, loc.query, loc.hash)
    }

    fn resolve_parts(
        &self,
        path: &str,
        query: Option<&str>,
        hash: Option<&str>,
    ) -> Result<Resolution> {
        let normalized = normalize_path(path);

        let found = self.routes.iter().find_map(|route| {
            route
                .matches_with_options(&normalized, self.case_insensitive)
                .map(|params| (route, params))
        });

        let Some((route, params)) = found else {
            trace!(path = %normalized, "no route matched");
            return Err(RouteError::NotFound {
                path: normalized.into_owned(),
            });
        };

        debug!(path = %normalized, view = %route.name, ?params, "resolved route");

        Ok(Resolution {
            view: route.name.clone(),
            component: route.component.clone(),
            pattern: route.pattern.clone(),
            path: normalized.into_owned(),
            params,
            query: query.map(path::parse_query).unwrap_or_default(),
            hash: hash.filter(|h| !h.is_empty()).map(str::to_string),
            meta: route.meta.clone(),
        })
    }

    // ========================================================================
    // URL Generation
    // ========================================================================

    /// Generates the route path of a named route
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::RouteTable;
    /// use std::collections::BTreeMap;
    ///
    /// let table = RouteTable::demo();
    /// let params = BTreeMap::from([("initial".to_string(), "hello".to_string())]);
    /// assert_eq!(table.url_for("demo", &params).unwrap(), "/hello");
    /// assert_eq!(table.url_for("demo", &BTreeMap::new()).unwrap(), "/");
    /// ```
    pub fn url_for(&self, name: &str, params: &BTreeMap<String, String>) -> Result<String> {
        self.route(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?
            .generate_url(params)
    }

    /// Generates a URL with params from a slice of tuples (convenience method)
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::RouteTable;
    ///
    /// let table = RouteTable::demo();
    /// assert_eq!(table.url_for_params("demo", &[("initial", "hello")]).unwrap(), "/hello");
    /// ```
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let params: BTreeMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.url_for(name, &params)
    }

    /// Renders a route path as an address-bar href (base and mode applied)
    pub fn href(&self, route_path: &str) -> String {
        mode::render_href(self.mode, &self.base, route_path)
    }

    /// Generates an address-bar href for a named route
    ///
    /// # Examples
    ///
    /// ```
    /// use spa_router::{NavigationMode, RouteTable};
    ///
    /// let table = RouteTable::demo().with_mode(NavigationMode::Hash);
    /// let params = [("initial".to_string(), "hello".to_string())].into();
    /// assert_eq!(table.href_for("demo", &params).unwrap(), "/#/hello");
    /// ```
    pub fn href_for(&self, name: &str, params: &BTreeMap<String, String>) -> Result<String> {
        let route_path = self.url_for(name, params)?;
        Ok(self.href(&route_path))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
