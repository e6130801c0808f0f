// File: src/config.rs
// Purpose: Configuration parsing from spa-router.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::mode::NavigationMode;

/// Name of the configuration file looked up by [`Config::load_default`]
pub const DEFAULT_CONFIG_FILE: &str = "spa-router.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

/// Router-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// `history` (default) or `hash`
    #[serde(default)]
    pub mode: NavigationMode,

    /// Path the app is served under (default: "/")
    #[serde(default = "default_base")]
    pub base: String,

    /// Whether static segments compare case-insensitively (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

/// One `[[routes]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub path: String,
    pub name: String,
    pub component: String,

    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

// Default values
fn default_base() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_routes() -> Vec<RouteConfig> {
    vec![RouteConfig {
        path: crate::DEMO_PATTERN.to_string(),
        name: crate::DEMO_VIEW.to_string(),
        component: crate::DEMO_COMPONENT.to_string(),
        meta: BTreeMap::new(),
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            router: RouterConfig::default(),
            routes: default_routes(),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: NavigationMode::default(),
            base: default_base(),
            case_insensitive: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./spa-router.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.router.mode, NavigationMode::History);
        assert_eq!(config.router.base, "/");
        assert!(config.router.case_insensitive);
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].path, "/:initial?");
        assert_eq!(config.routes[0].name, "demo");
        assert_eq!(config.routes[0].component, "Demo");
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("   \n").unwrap();
        assert_eq!(config.routes, Config::default().routes);
    }

    #[test]
    fn test_router_section_only_keeps_demo_route() {
        let toml = r#"
            [router]
            mode = "hash"
            base = "/app/"
        "#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.router.mode, NavigationMode::Hash);
        assert_eq!(config.router.base, "/app/");
        assert_eq!(config.routes[0].name, "demo");
    }

    #[test]
    fn test_custom_routes() {
        let toml = r#"
            [router]
            case_insensitive = false

            [[routes]]
            path = "/about"
            name = "about"
            component = "About"
            meta = { title = "About us" }

            [[routes]]
            path = "/:initial?"
            name = "demo"
            component = "Demo"
        "#;
        let config = Config::from_toml(toml).unwrap();
        assert!(!config.router.case_insensitive);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].meta.get("title").map(String::as_str), Some("About us"));
    }

    #[test]
    fn test_unknown_mode_is_error() {
        let toml = r#"
            [router]
            mode = "abstract"
        "#;
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("definitely/not/here/spa-router.toml").unwrap();
        assert_eq!(config.router.base, "/");
    }
}
