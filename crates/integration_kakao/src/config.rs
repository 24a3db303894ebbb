//! Directions client configuration

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::options::{OriginsOptions, RouteOptions};

/// Prefix for environment overrides, e.g. `KAKAO_DIRECTIONS_API_KEY`
pub const ENV_PREFIX: &str = "KAKAO_DIRECTIONS";

/// Default configuration file name (without extension), looked up in the working directory
pub const CONFIG_FILE: &str = "kakao_directions";

/// Configuration for the Kakao Mobility directions API
#[derive(Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// REST API key issued by Kakao Developers (sensitive - uses SecretString)
    ///
    /// Sent verbatim; a key with surrounding whitespace is rejected when the
    /// client is built.
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Base URL of the navigation API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Default options for single-origin and multi-waypoint searches
    #[serde(default)]
    pub route_defaults: RouteOptions,

    /// Default options for multi-origin searches
    #[serde(default)]
    pub origins_defaults: OriginsOptions,
}

impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field(
                "api_key",
                &if self.api_key.expose_secret().is_empty() {
                    "[EMPTY]"
                } else {
                    "[REDACTED]"
                },
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("route_defaults", &self.route_defaults)
            .field("origins_defaults", &self.origins_defaults)
            .finish()
    }
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_base_url() -> String {
    "https://apis-navi.kakaomobility.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("kakao-directions/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            route_defaults: RouteOptions::default(),
            origins_defaults: OriginsOptions::default(),
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration with the given API key and default settings
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Self::default()
        }
    }

    /// Create a configuration suitable for testing against a local server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from("test-key"),
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Self::default()
        }
    }

    /// Load configuration from `kakao_directions.toml` (optional) and
    /// `KAKAO_DIRECTIONS_*` environment variables
    ///
    /// Nested keys use a double underscore, e.g.
    /// `KAKAO_DIRECTIONS_ROUTE_DEFAULTS__PRIORITY=TIME`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse the configured base URL
    ///
    /// # Errors
    ///
    /// Returns an error message if the URL cannot be parsed.
    pub fn parsed_base_url(&self) -> Result<Url, String> {
        Url::parse(&self.base_url).map_err(|e| format!("invalid base_url: {e}"))
    }

    /// Validate the configuration
    ///
    /// The API key is checked when the client is created.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        self.parsed_base_url()?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
