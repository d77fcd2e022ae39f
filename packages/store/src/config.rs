//! # Client configuration — `config.toml`
//!
//! Defines the TOML configuration read by the client at startup. On the web it
//! comes from the `config` storage key ([`AppConfig::STORAGE_KEY`]); native
//! builds read `<config_dir>/recipebox/config.toml`.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000/api"
//!
//! [health]
//! retries = 3              # extra probes after the first failure
//! retry_delay_ms = 2000
//!
//! [ui]
//! notification_ms = 3000
//! login_redirect_ms = 1500
//! register_redirect_ms = 2000
//! logout_redirect_ms = 1000
//! counter_animation_ms = 1000
//! back_to_top_threshold_px = 300
//! description_preview_chars = 80
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and a builder for the API base URL. |
//! | [`ApiConfig`] | Where the REST API lives. |
//! | [`HealthConfig`] | Startup health probe retry policy. |
//! | [`UiConfig`] | Display delays and layout thresholds. |
//!
//! Every field has a serde default, so a missing or partial file is
//! equivalent to the defaults for whatever it leaves out.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Probes attempted after the first failure.
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    2000
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl HealthConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    #[serde(default = "default_login_redirect_ms")]
    pub login_redirect_ms: u64,
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u64,
    #[serde(default = "default_logout_redirect_ms")]
    pub logout_redirect_ms: u64,
    #[serde(default = "default_counter_animation_ms")]
    pub counter_animation_ms: u64,
    #[serde(default = "default_back_to_top_threshold_px")]
    pub back_to_top_threshold_px: f64,
    #[serde(default = "default_description_preview_chars")]
    pub description_preview_chars: usize,
}

fn default_notification_ms() -> u64 {
    3000
}

fn default_login_redirect_ms() -> u64 {
    1500
}

fn default_register_redirect_ms() -> u64 {
    2000
}

fn default_logout_redirect_ms() -> u64 {
    1000
}

fn default_counter_animation_ms() -> u64 {
    1000
}

fn default_back_to_top_threshold_px() -> f64 {
    300.0
}

fn default_description_preview_chars() -> usize {
    80
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            login_redirect_ms: default_login_redirect_ms(),
            register_redirect_ms: default_register_redirect_ms(),
            logout_redirect_ms: default_logout_redirect_ms(),
            counter_animation_ms: default_counter_animation_ms(),
            back_to_top_threshold_px: default_back_to_top_threshold_px(),
            description_preview_chars: default_description_preview_chars(),
        }
    }
}

impl AppConfig {
    /// Storage key the web client reads an override from.
    pub const STORAGE_KEY: &'static str = "config";

    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to set the health probe policy.
    pub fn with_health(mut self, retries: u32, retry_delay_ms: u64) -> Self {
        self.health = HealthConfig {
            retries,
            retry_delay_ms,
        };
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse TOML, logging and falling back to defaults when it is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed config: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.health.retries, 3);
        assert_eq!(config.health.retry_delay(), Duration::from_secs(2));
        assert_eq!(config.ui.description_preview_chars, 80);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://recipes.example/api"

            [ui]
            login_redirect_ms = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://recipes.example/api");
        assert_eq!(config.ui.login_redirect_ms, 10);
        assert_eq!(config.ui.register_redirect_ms, 2000);
        assert_eq!(config.health, HealthConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::new("http://localhost:9000/api").with_health(1, 50);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = AppConfig::from_toml_or_default("[api\nbase_url = 3");
        assert_eq!(config, AppConfig::default());
    }
}
