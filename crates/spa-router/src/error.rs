// File: src/error.rs
// Purpose: Error type shared by pattern parsing, resolution and URL generation

use thiserror::Error;

/// Errors produced by the route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No registered pattern matches the path
    #[error("no route matches path `{path}`")]
    NotFound { path: String },

    /// A route pattern could not be parsed
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two routes were registered under the same name
    #[error("route name `{0}` is already registered")]
    DuplicateRouteName(String),

    /// URL generation was asked for a route that does not exist
    #[error("no route named `{0}`")]
    UnknownRoute(String),

    /// URL generation is missing a required parameter
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    /// History-mode location that is not under the configured base
    #[error("path `{path}` is outside of base `{base}`")]
    OutsideBase { path: String, base: String },
}

impl RouteError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the resolution miss, as opposed to configuration mistakes
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
