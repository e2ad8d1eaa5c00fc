//! Transport-independent core of the key-injecting proxy.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use url::Url;

use crate::domain::{ApiConfig, AppError};
use crate::ports::EnvironmentSource;

const SECRET_VAR: &str = "OPENAI_API_KEY";

/// Secret and upstream the proxy forwards to.
#[derive(Clone)]
pub struct ProxyConfig {
    /// Server-held key; `None` makes every POST fail with a configuration error.
    pub api_key: Option<String>,
    pub upstream_url: Url,
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("upstream_url", &self.upstream_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProxyConfig {
    /// Read the secret from the process environment; blank counts as unset.
    pub fn from_env<E: EnvironmentSource>(env: &E, api: &ApiConfig) -> Self {
        let api_key =
            env.process_var(SECRET_VAR).map(|key| key.trim().to_string()).filter(|k| !k.is_empty());
        Self { api_key, upstream_url: api.upstream_url.clone(), timeout_secs: api.timeout_secs }
    }
}

/// Status and JSON body returned to the proxy's caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Value,
}

impl ProxyResponse {
    fn error(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// Stateless forwarder; safe to share across request handlers.
pub struct ProxyHandler {
    config: ProxyConfig,
    client: Client,
}

impl ProxyHandler {
    pub fn new(config: ProxyConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AppError::CompletionApi {
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;
        if config.api_key.is_none() {
            warn!("proxy started without {}; requests will be rejected", SECRET_VAR);
        }
        Ok(Self { config, client })
    }

    /// Handle one incoming request.
    pub fn handle(&self, method: &Method, body: &[u8]) -> ProxyResponse {
        if *method != Method::POST {
            return ProxyResponse::error(405, json!({ "error": "Method Not Allowed" }));
        }

        if let Err(e) = serde_json::from_slice::<Value>(body) {
            return processing_error(&AppError::Json(e));
        }

        let Some(api_key) = self.config.api_key.as_deref() else {
            error!("{} not found in environment", SECRET_VAR);
            return ProxyResponse::error(500, json!({ "error": "API key configuration error" }));
        };

        match self.forward(body, api_key) {
            Ok(response) => {
                info!(status = response.status, "relayed upstream response");
                response
            }
            Err(e) => processing_error(&e),
        }
    }

    /// Sends the caller's bytes unchanged; only the bearer header is added.
    fn forward(&self, body: &[u8], api_key: &str) -> Result<ProxyResponse, AppError> {
        let response = self
            .client
            .post(self.config.upstream_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .body(body.to_vec())
            .send()
            .map_err(|e| AppError::CompletionApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().map_err(|e| AppError::CompletionApi {
            message: format!("Failed to read upstream response: {}", e),
            status: Some(status),
        })?;
        let body: Value = serde_json::from_str(&body_text)?;

        Ok(ProxyResponse { status, body })
    }
}

fn processing_error(err: &AppError) -> ProxyResponse {
    error!(error = %err, "proxy request failed");
    ProxyResponse::error(
        500,
        json!({ "error": "Error processing request", "message": err.to_string() }),
    )
}
