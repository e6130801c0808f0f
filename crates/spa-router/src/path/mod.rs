//! Path utilities for validation, normalization and location splitting
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;
use std::collections::BTreeMap;

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
/// use spa_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/hello"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("hello")); // Missing leading /
/// assert!(!is_valid_path("/hello/")); // Trailing /
/// assert!(!is_valid_path("/hello//there")); // Double //
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
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Missing leading slash: `hello` → `/hello`
///
/// # Examples
///
/// ```
/// use spa_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/hello");
/// assert!(matches!(path, Cow::Borrowed("/hello")));
///
/// assert_eq!(normalize_path("/hello/"), "/hello");
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

/// Non-empty segments of a path, in order
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// A location split into its path, query and fragment parts
///
/// Parts are borrowed from the input; nothing is decoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationParts<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Splits `path?query#fragment`
///
/// An absolute `http://` or `https://` URL has its scheme and authority
/// dropped first, so `https://example.com/hello?x=1` splits like `/hello?x=1`.
///
/// # Examples
///
/// ```
/// use spa_router::path::split_location;
///
/// let parts = split_location("/hello?x=1#top");
/// assert_eq!(parts.path, "/hello");
/// assert_eq!(parts.query, Some("x=1"));
/// assert_eq!(parts.fragment, Some("top"));
/// ```
pub fn split_location(location: &str) -> LocationParts<'_> {
    let location = strip_origin(location);

    let (rest, fragment) = match location.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (location, None),
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    LocationParts {
        path,
        query,
        fragment,
    }
}

fn strip_origin(location: &str) -> &str {
    let Some(after_scheme) = location
        .strip_prefix("http://")
        .or_else(|| location.strip_prefix("https://"))
    else {
        return location;
    };

    match after_scheme.find(['/', '?', '#']) {
        Some(idx) => &after_scheme[idx..],
        None => "",
    }
}

/// Percent-decodes a path segment or query component
///
/// Input that does not decode to valid UTF-8 is returned verbatim.
pub fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// Parses a query string (without the leading `?`) into decoded pairs
///
/// A key without `=` maps to an empty value. When a key repeats, the last
/// value wins.
///
/// # Examples
///
/// ```
/// use spa_router::path::parse_query;
///
/// let query = parse_query("x=1&flag&name=a%20b");
/// assert_eq!(query.get("x").map(String::as_str), Some("1"));
/// assert_eq!(query.get("flag").map(String::as_str), Some(""));
/// assert_eq!(query.get("name").map(String::as_str), Some("a b"));
/// ```
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/hello"));
        assert!(is_valid_path("/users/123"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("hello"));
        assert!(!is_valid_path("/hello/"));
        assert!(!is_valid_path("/hello//page"));
        assert!(!is_valid_path("/hello\\page"));
    }

    #[test]
    fn test_normalize_path_valid_is_borrowed() {
        assert!(matches!(normalize_path("/hello"), Cow::Borrowed("/hello")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_path_fixes_mistakes() {
        assert_eq!(normalize_path("/hello/"), "/hello");
        assert_eq!(normalize_path("//hello"), "/hello");
        assert_eq!(normalize_path("\\hello"), "/hello");
        assert_eq!(normalize_path("hello"), "/hello");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_segments() {
        assert!(segments("/").is_empty());
        assert_eq!(segments("/a/b"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_query_last_value_wins() {
        let query = parse_query("a=1&a=2&&b");
        assert_eq!(query.len(), 2);
        assert_eq!(query["a"], "2");
        assert_eq!(query["b"], "");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("hello%20world"), "hello world");
        assert_eq!(decode_component("%E2%9C%93"), "\u{2713}");
        assert_eq!(decode_component("%FF"), "%FF");
    }

    #[test]
    fn test_split_location_plain_path() {
        let parts = split_location("/hello");
        assert_eq!(parts.path, "/hello");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, None);
    }

    #[test]
    fn test_split_location_question_mark_inside_fragment() {
        let parts = split_location("/#/hello?x=1");
        assert_eq!(parts.path, "/");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, Some("/hello?x=1"));
    }

    #[test]
    fn test_split_location_absolute_url() {
        let parts = split_location("https://example.com/hello?x=1");
        assert_eq!(parts.path, "/hello");
        assert_eq!(parts.query, Some("x=1"));

        let parts = split_location("http://example.com");
        assert_eq!(parts.path, "");

        let parts = split_location("http://example.com#/hello");
        assert_eq!(parts.path, "");
        assert_eq!(parts.fragment, Some("/hello"));
    }
}
