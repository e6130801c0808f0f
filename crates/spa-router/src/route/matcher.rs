//! Segment matching for parsed route patterns
//!
//! Walks pattern and path segments together. Optional parameters consume a
//! path segment only when the rest of the pattern can still match, so
//! `/:lang?/about` accepts both `/about` and `/en/about`.

use std::collections::BTreeMap;

use super::pattern::PatternSegment;

/// Matches path segments against a pattern, returning the bound parameters
///
/// Parameter values are returned raw; decoding happens in the caller.
pub fn match_segments(
    pattern: &[PatternSegment],
    path: &[&str],
    case_insensitive: bool,
) -> Option<BTreeMap<String, String>> {
    match_from(pattern, path, case_insensitive, BTreeMap::new())
}

fn match_from(
    pattern: &[PatternSegment],
    path: &[&str],
    case_insensitive: bool,
    params: BTreeMap<String, String>,
) -> Option<BTreeMap<String, String>> {
    // Base case: consumed all pattern segments
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty().then_some(params);
    };

    match head {
        PatternSegment::Static(text) => {
            let (first, remaining) = path.split_first()?;
            let equal = if case_insensitive {
                text.eq_ignore_ascii_case(first)
            } else {
                text.as_str() == *first
            };
            if !equal {
                return None;
            }
            match_from(rest, remaining, case_insensitive, params)
        }
        PatternSegment::Param(name) => {
            let (first, remaining) = path.split_first()?;
            let mut params = params;
            params.insert(name.clone(), (*first).to_string());
            match_from(rest, remaining, case_insensitive, params)
        }
        PatternSegment::OptionalParam(name) => {
            // Prefer binding the segment, fall back to skipping it
            if let Some((first, remaining)) = path.split_first() {
                let mut with_value = params.clone();
                with_value.insert(name.clone(), (*first).to_string());
                if let Some(found) = match_from(rest, remaining, case_insensitive, with_value) {
                    return Some(found);
                }
            }
            match_from(rest, path, case_insensitive, params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::pattern::parse_pattern;

    fn run(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
        let segments = parse_pattern(pattern).unwrap();
        match_segments(&segments, &crate::path::segments(path), false)
    }

    #[test]
    fn test_optional_present_and_absent() {
        let params = run("/:initial?", "/hello").unwrap();
        assert_eq!(params.get("initial").map(String::as_str), Some("hello"));

        let params = run("/:initial?", "/").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_optional_rejects_extra_segments() {
        assert!(run("/:initial?", "/a/b").is_none());
    }

    #[test]
    fn test_optional_before_static() {
        let params = run("/:lang?/about", "/about").unwrap();
        assert!(params.is_empty());

        let params = run("/:lang?/about", "/en/about").unwrap();
        assert_eq!(params.get("lang").map(String::as_str), Some("en"));
    }

    #[test]
    fn test_required_param_needs_segment() {
        assert!(run("/users/:id", "/users").is_none());
        let params = run("/users/:id", "/users/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_static_case_sensitivity() {
        let segments = parse_pattern("/About").unwrap();
        assert!(match_segments(&segments, &["about"], false).is_none());
        assert!(match_segments(&segments, &["about"], true).is_some());
    }
}
