// File: src/config.rs
// Purpose: Configuration parsing from storefront.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub storefront: StorefrontConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Used as the document title when a route sets none
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory holding the root module (default: "app")
    #[serde(default = "default_app_dir")]
    pub app_dir: String,

    /// Directory holding route modules (default: "app/routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Whether routes are case-insensitive (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

/// Mock storefront and customer account settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_shop_name")]
    pub shop_name: String,

    #[serde(default = "default_store_domain")]
    pub store_domain: String,

    /// What the mock customer account reports from `is_logged_in`
    #[serde(default = "default_false")]
    pub customer_logged_in: bool,
}

// Default values
fn default_name() -> String {
    "Hydrogen Storefront".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_app_dir() -> String {
    "app".to_string()
}

fn default_routes_dir() -> String {
    "app/routes".to_string()
}

fn default_shop_name() -> String {
    "My Shopify Store".to_string()
}

fn default_store_domain() -> String {
    "https://example.com".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

// Default implementations
impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            routes_dir: default_routes_dir(),
            case_insensitive: true,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shop_name: default_shop_name(),
            store_domain: default_store_domain(),
            customer_logged_in: false,
        }
    }
}

impl Config {
    /// Load configuration from storefront.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./storefront.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("storefront.toml")
    }

    /// Applies `HOST` and `PORT` from the environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// Applies host and port overrides; an unparseable port is ignored
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Self {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }

        if let Some(port) = port {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(port = %port, "ignoring invalid PORT override"),
            }
        }

        self
    }

    /// `host:port` the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.routing.case_insensitive);
        assert_eq!(config.routing.routes_dir, "app/routes");
        assert_eq!(config.storefront.shop_name, "My Shopify Store");
        assert!(!config.storefront.customer_logged_in);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.routing.app_dir, "app");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [routing]
            case_insensitive = false

            [storefront]
            customer_logged_in = true
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.routing.case_insensitive);
        assert_eq!(config.routing.routes_dir, "app/routes");
        assert!(config.storefront.customer_logged_in);
        assert_eq!(config.storefront.store_domain, "https://example.com");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/storefront.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_overrides(Some("0.0.0.0".to_string()), Some("8080".to_string()));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let config = Config::default().with_overrides(None, Some("eighty".to_string()));
        assert_eq!(config.server.port, 3000);
    }
}
