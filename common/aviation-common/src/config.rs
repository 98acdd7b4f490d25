//! Configuration loading
//!
//! Configuration is loaded from, in order:
//! 1. An explicit path (`--config` / `AVIATION_MCP_CONFIG`)
//! 2. `~/.aviation-mcp/config.toml`
//! 3. Default values
//!
//! The file only carries upstream endpoints and HTTP settings. Credentials
//! always come from the environment (see [`Credentials`]).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::credentials::Credentials;

/// Variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "AVIATION_MCP_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream base URLs
    #[serde(default)]
    pub endpoints: Endpoints,
    /// Outbound HTTP settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Secrets, read from the environment at load time
    #[serde(skip)]
    pub credentials: Credentials,
}

/// Base URL of each upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    /// aviationweather.gov data API
    #[serde(default = "default_weather_url")]
    pub weather: String,
    /// FAA APRA chart products
    #[serde(default = "default_charts_url")]
    pub charts: String,
    /// FAA NOTAM API (full collection URL)
    #[serde(default = "default_notam_url")]
    pub notam: String,
    /// API Ninjas aircraft lookup (full collection URL)
    #[serde(default = "default_aircraft_url")]
    pub aircraft: String,
    /// FAA ADIP airport data
    #[serde(default = "default_airports_url")]
    pub airports: String,
    /// FAA EIM weather proximity service (full endpoint URL)
    #[serde(default = "default_precipitation_url")]
    pub precipitation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions
fn default_weather_url() -> String {
    "https://aviationweather.gov/api/data".to_string()
}

fn default_charts_url() -> String {
    "https://external-api.faa.gov/apra".to_string()
}

fn default_notam_url() -> String {
    "https://external-api.faa.gov/notamapi/v1/notams".to_string()
}

fn default_aircraft_url() -> String {
    "https://api.api-ninjas.com/v1/aircraft".to_string()
}

fn default_airports_url() -> String {
    "https://external-api.faa.gov/adip".to_string()
}

fn default_precipitation_url() -> String {
    "https://external-api.faa.gov/eim/services/proximityList".to_string()
}

fn default_user_agent() -> String {
    concat!("aviation-mcp/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather: default_weather_url(),
            charts: default_charts_url(),
            notam: default_notam_url(),
            aircraft: default_aircraft_url(),
            airports: default_airports_url(),
            precipitation: default_precipitation_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

impl Endpoints {
    /// Every endpoint pointed at one base URL, as a mock server would serve them
    ///
    /// Paths mirror the production layout so handlers build identical URLs.
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            weather: format!("{base}/api/data"),
            charts: format!("{base}/apra"),
            notam: format!("{base}/notamapi/v1/notams"),
            aircraft: format!("{base}/v1/aircraft"),
            airports: format!("{base}/adip"),
            precipitation: format!("{base}/eim/services/proximityList"),
        }
    }
}

impl Config {
    /// Load configuration from file (or defaults) plus environment credentials
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = explicit_path
            .map(Path::to_path_buf)
            .or_else(Self::find_config_path);

        let mut config = match config_path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_toml(&std::fs::read_to_string(&path)?)?
            }
            Some(path) if explicit_path.is_some() => {
                anyhow::bail!("config file not found: {}", path.display());
            }
            _ => {
                tracing::info!("No config file found, using defaults");
                Self::default()
            }
        };

        config.credentials = Credentials::from_env();
        tracing::info!(
            faa = config.credentials.has_faa(),
            aircraft = config.credentials.has_aircraft_key(),
            "Credentials loaded"
        );

        Ok(config)
    }

    /// Parse a TOML document; missing sections take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults with every endpoint rooted at `base` and the given credentials
    pub fn for_base_url(base: &str, credentials: Credentials) -> Self {
        Self {
            endpoints: Endpoints::rooted_at(base),
            http: HttpConfig::default(),
            credentials,
        }
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }

        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".aviation-mcp").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_production() {
        let config = Config::default();
        assert_eq!(config.endpoints.weather, "https://aviationweather.gov/api/data");
        assert_eq!(config.endpoints.charts, "https://external-api.faa.gov/apra");
        assert!(config.http.user_agent.starts_with("aviation-mcp/"));
        assert!(!config.credentials.has_faa());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [endpoints]
            weather = "http://localhost:9000/api/data"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoints.weather, "http://localhost:9000/api/data");
        assert_eq!(config.endpoints.notam, default_notam_url());
        assert_eq!(config.http.user_agent, default_user_agent());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/aviation-mcp.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_rooted_endpoints() {
        let endpoints = Endpoints::rooted_at("http://127.0.0.1:4000/");
        assert_eq!(endpoints.charts, "http://127.0.0.1:4000/apra");
        assert_eq!(
            endpoints.precipitation,
            "http://127.0.0.1:4000/eim/services/proximityList"
        );
    }
}
