//! Pattern parsing for route paths
//!
//! Turns a declared path such as `/users/:id` or `/:initial?` into typed
//! segments once, at table construction. All functions are pure.

use crate::error::{Result, RouteError};

/// One segment of a route pattern
///
/// # Examples
///
/// ```
/// use spa_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("about"), PatternSegment::Static("about".into()));
/// assert_eq!(classify_segment(":id"), PatternSegment::Param("id".into()));
/// assert_eq!(classify_segment(":initial?"), PatternSegment::OptionalParam("initial".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Literal text that must equal the path segment
    Static(String),
    /// `:name` - binds exactly one path segment
    Param(String),
    /// `:name?` - binds one path segment when present
    OptionalParam(String),
}

impl PatternSegment {
    /// Parameter name, `None` for static segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Static(_) => None,
            PatternSegment::Param(name) | PatternSegment::OptionalParam(name) => Some(name),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, PatternSegment::OptionalParam(_))
    }
}

/// Classifies a single segment without validating the parameter name
pub fn classify_segment(segment: &str) -> PatternSegment {
    match segment.strip_prefix(':') {
        Some(param) => match param.strip_suffix('?') {
            Some(name) => PatternSegment::OptionalParam(name.to_string()),
            None => PatternSegment::Param(param.to_string()),
        },
        None => PatternSegment::Static(segment.to_string()),
    }
}

/// Parses a full pattern into segments
///
/// # Rules
///
/// - Pattern must start with `/`
/// - Parameter names are non-empty ASCII alphanumerics or `_`
/// - A parameter name may appear only once
/// - Static segments may not contain `?`, `*` or `:`
///
/// # Examples
///
/// ```
/// use spa_router::route::pattern::{parse_pattern, PatternSegment};
///
/// let segments = parse_pattern("/:initial?").unwrap();
/// assert_eq!(segments, vec![PatternSegment::OptionalParam("initial".into())]);
///
/// assert!(parse_pattern("/").unwrap().is_empty());
/// assert!(parse_pattern("no-slash").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<PatternSegment>> {
    if !pattern.starts_with('/') {
        return Err(RouteError::invalid_pattern(pattern, "must start with `/`"));
    }

    let segments: Vec<PatternSegment> = crate::path::segments(pattern)
        .into_iter()
        .map(classify_segment)
        .collect();

    let mut seen: Vec<&str> = Vec::new();
    for segment in &segments {
        match segment {
            PatternSegment::Static(text) => {
                if text.contains(['?', '*', ':']) {
                    return Err(RouteError::invalid_pattern(
                        pattern,
                        format!("unsupported characters in segment `{}`", text),
                    ));
                }
            }
            PatternSegment::Param(name) | PatternSegment::OptionalParam(name) => {
                if !is_valid_param_name(name) {
                    return Err(RouteError::invalid_pattern(
                        pattern,
                        format!("invalid parameter name `{}`", name),
                    ));
                }
                if seen.contains(&name.as_str()) {
                    return Err(RouteError::invalid_pattern(
                        pattern,
                        format!("parameter `{}` appears more than once", name),
                    ));
                }
                seen.push(name);
            }
        }
    }

    Ok(segments)
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Priority for matching (lower = tried first)
///
/// One rank per segment: static 0, required 1, optional 2. Keys compare
/// segment by segment, so `/about/:tab?` is tried before `/:a/:b` even
/// though both carry two dynamic ranks in total.
pub fn calculate_priority(segments: &[PatternSegment]) -> Vec<u8> {
    segments
        .iter()
        .map(|segment| match segment {
            PatternSegment::Static(_) => 0,
            PatternSegment::Param(_) => 1,
            PatternSegment::OptionalParam(_) => 2,
        })
        .collect()
}
