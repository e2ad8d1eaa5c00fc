//! Runtime configuration resolved from the hosting environment.

use std::net::IpAddr;

/// Key and execution mode, resolved once at process start and passed explicitly.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// API key, empty when none is configured.
    pub api_key: String,
    /// Whether this process runs in a local development setting.
    pub is_local: bool,
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("RuntimeConfig")
            .field("api_key", &api_key)
            .field("is_local", &self.is_local)
            .finish()
    }
}

impl RuntimeConfig {
    pub fn new(api_key: impl Into<String>, is_local: bool) -> Self {
        Self { api_key: api_key.into(), is_local }
    }

    /// Derive the per-call mode. Cheap, so it is never cached.
    pub fn mode(&self) -> RuntimeMode {
        RuntimeMode { has_api_key: !self.api_key.trim().is_empty(), is_local: self.is_local }
    }
}

/// Endpoint and auth strategy inputs for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeMode {
    pub has_api_key: bool,
    pub is_local: bool,
}

impl RuntimeMode {
    /// The key is attached directly only when running locally with a key.
    pub fn calls_upstream_directly(&self) -> bool {
        self.is_local && self.has_api_key
    }

    /// False when there is neither a key nor a local setup to reach the API through.
    pub fn has_api_path(&self) -> bool {
        self.has_api_key || self.is_local
    }
}

/// Whether a build-mode flag value means development.
pub fn is_development_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "development" | "dev" | "true" | "1")
}

/// Loopback, private-range, or local-domain host.
///
/// A heuristic for picking an endpoint, not a trust boundary.
pub fn is_local_host(host: &str) -> bool {
    let host = host.trim().trim_start_matches('[').trim_end_matches(']').to_ascii_lowercase();
    if host.is_empty() {
        return false;
    }
    if host == "localhost" || host.ends_with(".local") || host.ends_with(".localhost") {
        return true;
    }
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => ip.is_loopback() || ip.is_private(),
        Ok(IpAddr::V6(ip)) => ip.is_loopback(),
        Err(_) => false,
    }
}
