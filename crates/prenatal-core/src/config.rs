//! Assistant configuration.
//!
//! Values come from an optional config file and the environment; the
//! environment wins. Anything not set falls back to demo mode.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::conversation::AssistantMode;

/// Artificial latency applied to demo replies.
pub const DEFAULT_DEMO_DELAY: Duration = Duration::from_millis(800);
/// Name of the remote function invoked in remote mode.
pub const DEFAULT_FUNCTION_NAME: &str = "health-chat";

/// Environment variable names.
pub mod env_keys {
    /// Demo mode is on unless this is exactly `false`.
    pub const DEMO_MODE: &str = "HEALTH_CHAT_DEMO_MODE";
    pub const DEMO_DELAY_MS: &str = "HEALTH_CHAT_DEMO_DELAY_MS";
    pub const ENDPOINT_URL: &str = "HEALTH_CHAT_ENDPOINT_URL";
    pub const ANON_KEY: &str = "HEALTH_CHAT_ANON_KEY";
    pub const FUNCTION: &str = "HEALTH_CHAT_FUNCTION";
}

/// Connection settings for the remote chat function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub endpoint_url: String,
    pub anon_key: String,
    pub function_name: String,
}

impl GatewayConfig {
    pub fn new(endpoint_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            anon_key: anon_key.into(),
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }

    pub fn with_function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = function_name.into();
        self
    }

    /// Full URL of the function endpoint.
    pub fn function_url(&self) -> String {
        format!(
            "{}/functions/v1/{}",
            self.endpoint_url.trim_end_matches('/'),
            self.function_name
        )
    }
}

/// Resolved configuration of a conversation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub mode: AssistantMode,
    pub demo_delay: Duration,
    /// Present only when both endpoint URL and key are configured.
    pub gateway: Option<GatewayConfig>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::demo()
    }
}

impl AssistantConfig {
    /// Demo mode with the default artificial delay.
    pub fn demo() -> Self {
        Self {
            mode: AssistantMode::Demo,
            demo_delay: DEFAULT_DEMO_DELAY,
            gateway: None,
        }
    }

    /// Remote mode. `None` keeps remote mode selected but unconfigured.
    pub fn remote(gateway: Option<GatewayConfig>) -> Self {
        Self {
            mode: AssistantMode::Remote,
            demo_delay: DEFAULT_DEMO_DELAY,
            gateway,
        }
    }

    pub fn with_demo_delay(mut self, delay: Duration) -> Self {
        self.demo_delay = delay;
        self
    }

    pub fn is_demo_mode(&self) -> bool {
        self.mode == AssistantMode::Demo
    }

    /// Builds the configuration from process environment only.
    pub fn from_env() -> Self {
        ConfigFile::default()
            .apply_env(|key| std::env::var(key).ok())
            .into_config()
    }
}

/// On-disk (TOML) representation. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub demo_mode: Option<bool>,
    #[serde(default)]
    pub demo_delay_ms: Option<u64>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<String>,
    #[serde(default)]
    pub function_name: Option<String>,
}

impl ConfigFile {
    /// Overlays values found through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_keys::DEMO_MODE) {
            self.demo_mode = Some(value != "false");
        }
        if let Some(value) = lookup(env_keys::DEMO_DELAY_MS) {
            match value.trim().parse::<u64>() {
                Ok(ms) => self.demo_delay_ms = Some(ms),
                Err(_) => tracing::warn!(
                    "[Config] Ignoring non-numeric {}={}",
                    env_keys::DEMO_DELAY_MS,
                    value
                ),
            }
        }
        if let Some(value) = lookup(env_keys::ENDPOINT_URL) {
            self.endpoint_url = Some(value);
        }
        if let Some(value) = lookup(env_keys::ANON_KEY) {
            self.anon_key = Some(value);
        }
        if let Some(value) = lookup(env_keys::FUNCTION) {
            self.function_name = Some(value);
        }
        self
    }

    pub fn into_config(self) -> AssistantConfig {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let gateway = match (non_empty(self.endpoint_url), non_empty(self.anon_key)) {
            (Some(url), Some(key)) => {
                let gateway = GatewayConfig::new(url, key);
                Some(match non_empty(self.function_name) {
                    Some(name) => gateway.with_function_name(name),
                    None => gateway,
                })
            }
            _ => None,
        };

        AssistantConfig {
            mode: if self.demo_mode.unwrap_or(true) {
                AssistantMode::Demo
            } else {
                AssistantMode::Remote
            },
            demo_delay: self
                .demo_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DEMO_DELAY),
            gateway,
        }
    }
}
