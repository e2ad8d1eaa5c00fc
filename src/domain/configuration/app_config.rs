//! File-backed configuration (`chuzapath.toml`).

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Model requested when the config file does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Route the proxy server mounts its handler on.
pub const DEFAULT_PROXY_PATH: &str = "/api/openai-proxy";

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChuzapathConfig {
    /// Completion API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Demo generator settings.
    #[serde(default)]
    pub demo: DemoConfig,
    /// Proxy server settings.
    #[serde(default)]
    pub proxy: ProxySettings,
}

impl ChuzapathConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.proxy.validate()
    }
}

/// Completion API endpoints and request parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upstream chat-completions endpoint, called directly in local mode.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: Url,
    /// Proxy endpoint, called whenever the key is not attached directly.
    #[serde(default = "default_proxy_url")]
    pub proxy_url: Url,
    /// Request timeout in seconds; the transport default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            upstream_url: default_upstream_url(),
            proxy_url: default_proxy_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("api.model must not be empty".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulated latency of the demo generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_continuation_delay_ms")]
    pub continuation_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            continuation_delay_ms: default_continuation_delay_ms(),
        }
    }
}

/// Where `chuzapath serve` listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxySettings {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default = "default_proxy_path")]
    pub path: String,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self { bind: default_bind(), path: default_proxy_path() }
    }
}

impl ProxySettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.path.starts_with('/') {
            return Err(AppError::InvalidConfig(format!(
                "proxy.path must start with '/': {}",
                self.path
            )));
        }
        if self.path.contains(['*', ':', '{', '}']) {
            return Err(AppError::InvalidConfig(format!(
                "proxy.path must be a literal route without parameters: {}",
                self.path
            )));
        }
        Ok(())
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_upstream_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default upstream URL must be valid")
}

fn default_proxy_url() -> Url {
    Url::parse("http://127.0.0.1:8787/api/openai-proxy").expect("Default proxy URL must be valid")
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_continuation_delay_ms() -> u64 {
    1500
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8787))
}

fn default_proxy_path() -> String {
    DEFAULT_PROXY_PATH.to_string()
}
