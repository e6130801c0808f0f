// File: src/mode.rs
// Purpose: History vs hash navigation, base handling and href rendering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::path::{normalize_path, split_location};

/// How the address bar carries the route path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Full paths through the history API: `/app/hello`
    #[default]
    History,
    /// Route path in the fragment: `/app/#/hello`
    Hash,
}

impl NavigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMode::History => "history",
            NavigationMode::Hash => "hash",
        }
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "history" => Ok(NavigationMode::History),
            "hash" => Ok(NavigationMode::Hash),
            other => Err(format!("unknown navigation mode `{}` (expected history or hash)", other)),
        }
    }
}

/// Route path, query and fragment taken out of an address-bar location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation<'a> {
    pub path: String,
    pub query: Option<&'a str>,
    pub hash: Option<&'a str>,
}

/// Canonical form of a base: leading `/`, no trailing `/`, root is `/`
pub fn normalize_base(base: &str) -> String {
    normalize_path(base).into_owned()
}

/// Extracts the route location from an address-bar location
///
/// History mode strips `base` from the path on a segment boundary; the prefix
/// compares case-insensitively when `case_insensitive` is set. Hash mode ignores the document
/// path and reads the route from the fragment, which may carry its own query
/// and a second fragment.
///
/// # Examples
///
/// ```
/// use spa_router::mode::{extract_route_location, NavigationMode};
///
/// let loc = extract_route_location(NavigationMode::History, "/app", "/app/hello?x=1", true).unwrap();
/// assert_eq!(loc.path, "/hello");
/// assert_eq!(loc.query, Some("x=1"));
///
/// let loc = extract_route_location(NavigationMode::Hash, "/", "/#/hello", true).unwrap();
/// assert_eq!(loc.path, "/hello");
/// ```
pub fn extract_route_location<'a>(
    mode: NavigationMode,
    base: &str,
    location: &'a str,
    case_insensitive: bool,
) -> Result<RouteLocation<'a>> {
    let parts = split_location(location);

    match mode {
        NavigationMode::History => {
            let path = normalize_path(parts.path);
            let path = strip_base(&path, base, case_insensitive).ok_or_else(|| RouteError::OutsideBase {
                path: path.to_string(),
                base: base.to_string(),
            })?;

            Ok(RouteLocation {
                path,
                query: parts.query,
                hash: parts.fragment,
            })
        }
        NavigationMode::Hash => {
            let inner = split_location(parts.fragment.unwrap_or(""));

            Ok(RouteLocation {
                path: normalize_path(inner.path).into_owned(),
                query: inner.query,
                hash: inner.fragment,
            })
        }
    }
}

fn strip_base(path: &str, base: &str, case_insensitive: bool) -> Option<String> {
    let base = normalize_path(base);
    if base == "/" {
        return Some(path.to_string());
    }

    let prefix = path.get(..base.len())?;
    let equal = if case_insensitive {
        prefix.eq_ignore_ascii_case(&base)
    } else {
        prefix == &*base
    };
    if !equal {
        return None;
    }

    match &path[base.len()..] {
        "" => Some("/".to_string()),
        rest if rest.starts_with('/') => Some(rest.to_string()),
        _ => None,
    }
}

/// Renders a route path as an address-bar href for the given mode
///
/// # Examples
///
/// ```
/// use spa_router::mode::{render_href, NavigationMode};
///
/// assert_eq!(render_href(NavigationMode::History, "/", "/hello"), "/hello");
/// assert_eq!(render_href(NavigationMode::History, "/app", "/hello"), "/app/hello");
/// assert_eq!(render_href(NavigationMode::Hash, "/app", "/hello"), "/app/#/hello");
/// ```
pub fn render_href(mode: NavigationMode, base: &str, route_path: &str) -> String {
    let base = normalize_path(base);
    let route_path = if route_path.starts_with('/') {
        route_path.to_string()
    } else {
        format!("/{}", route_path)
    };

    match mode {
        NavigationMode::History => {
            format!("{}{}", base.trim_end_matches('/'), route_path)
        }
        NavigationMode::Hash => {
            format!("{}/#{}", base.trim_end_matches('/'), route_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("history".parse::<NavigationMode>().unwrap(), NavigationMode::History);
        assert_eq!("HASH".parse::<NavigationMode>().unwrap(), NavigationMode::Hash);
        assert!("abstract".parse::<NavigationMode>().is_err());
        assert_eq!(NavigationMode::Hash.to_string(), "hash");
        assert_eq!(NavigationMode::default(), NavigationMode::History);
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("app/"), "/app");
        assert_eq!(normalize_base("/app/"), "/app");
    }

    #[test]
    fn test_history_root_base() {
        let loc = extract_route_location(NavigationMode::History, "/", "/hello#top", true).unwrap();
        assert_eq!(loc.path, "/hello");
        assert_eq!(loc.query, None);
        assert_eq!(loc.hash, Some("top"));

        let loc = extract_route_location(NavigationMode::History, "/", "", true).unwrap();
        assert_eq!(loc.path, "/");
    }

    #[test]
    fn test_history_strips_base() {
        let loc = extract_route_location(NavigationMode::History, "/app/", "/app", true).unwrap();
        assert_eq!(loc.path, "/");

        let loc = extract_route_location(NavigationMode::History, "/app", "/APP/hello", true).unwrap();
        assert_eq!(loc.path, "/hello");
    }

    #[test]
    fn test_history_case_sensitive_base() {
        let err = extract_route_location(NavigationMode::History, "/app", "/APP/hello", false).unwrap_err();
        assert!(matches!(err, RouteError::OutsideBase { .. }));

        let loc = extract_route_location(NavigationMode::History, "/app", "/app/hello", false).unwrap();
        assert_eq!(loc.path, "/hello");
    }

    #[test]
    fn test_history_outside_base() {
        let err = extract_route_location(NavigationMode::History, "/app", "/application", true).unwrap_err();
        assert_eq!(
            err,
            RouteError::OutsideBase {
                path: "/application".to_string(),
                base: "/app".to_string(),
            }
        );

        assert!(extract_route_location(NavigationMode::History, "/app", "/", true).is_err());
    }

    #[test]
    fn test_hash_mode() {
        let loc = extract_route_location(NavigationMode::Hash, "/", "/", true).unwrap();
        assert_eq!(loc.path, "/");

        let loc = extract_route_location(NavigationMode::Hash, "/", "/#", true).unwrap();
        assert_eq!(loc.path, "/");

        let loc = extract_route_location(NavigationMode::Hash, "/", "/index.html#/hello?x=1#top", true).unwrap();
        assert_eq!(loc.path, "/hello");
        assert_eq!(loc.query, Some("x=1"));
        assert_eq!(loc.hash, Some("top"));
    }

    #[test]
    fn test_render_href() {
        assert_eq!(render_href(NavigationMode::History, "/", "/"), "/");
        assert_eq!(render_href(NavigationMode::History, "/app", "/"), "/app/");
        assert_eq!(render_href(NavigationMode::Hash, "/", "/"), "/#/");
        assert_eq!(render_href(NavigationMode::Hash, "/", "hello"), "/#/hello");
    }
}
