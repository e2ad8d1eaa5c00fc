//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::story::parse_story_content;
use crate::domain::{
    ApiConfig, AppError, CompletionOutcome, ConversationMessage, RuntimeConfig, StorySegment,
};
use crate::ports::CompletionClient;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;
const TOP_P: f32 = 1.0;
const FREQUENCY_PENALTY: f32 = 0.2;
const PRESENCE_PENALTY: f32 = 0.2;
const UNKNOWN_ERROR: &str = "Unknown error";

/// Target of a single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub url: &'a Url,
    pub bearer: Option<&'a str>,
}

/// HTTP transport for the completion API.
///
/// Each call performs exactly one request: either straight to the upstream API
/// with the key attached, or to the proxy which adds its own key.
#[derive(Clone)]
pub struct HttpCompletionClient {
    runtime: RuntimeConfig,
    model: String,
    upstream_url: Url,
    proxy_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("runtime", &self.runtime)
            .field("model", &self.model)
            .field("upstream_url", &self.upstream_url)
            .field("proxy_url", &self.proxy_url)
            .finish()
    }
}

impl HttpCompletionClient {
    pub fn new(runtime: RuntimeConfig, config: &ApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AppError::CompletionApi {
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;

        Ok(Self {
            runtime,
            model: config.model.clone(),
            upstream_url: config.upstream_url.clone(),
            proxy_url: config.proxy_url.clone(),
            client,
        })
    }

    /// Pick the endpoint for the current runtime mode.
    pub fn endpoint(&self) -> Endpoint<'_> {
        let mode = self.runtime.mode();
        if mode.calls_upstream_directly() {
            Endpoint { url: &self.upstream_url, bearer: Some(self.runtime.api_key.trim()) }
        } else {
            Endpoint { url: &self.proxy_url, bearer: None }
        }
    }

    fn send_request(&self, messages: &[ConversationMessage]) -> Result<StorySegment, AppError> {
        let mode = self.runtime.mode();
        let endpoint = self.endpoint();
        debug!(has_api_key = mode.has_api_key, is_local = mode.is_local, "runtime mode");
        info!(url = %endpoint.url, model = %self.model, "requesting story completion");

        let request = ApiRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        };

        let mut builder = self
            .client
            .post(endpoint.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&request);
        if let Some(key) = endpoint.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = builder.send().map_err(|e| AppError::CompletionApi {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();

        if !status.is_success() {
            let body_text = response.text().unwrap_or_default();
            let message =
                extract_error_message(&body_text).unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            warn!(status = status.as_u16(), %message, "completion API returned an error");
            return Err(AppError::CompletionApi {
                message: format!(
                    "API request failed with status {}: {}",
                    status.as_u16(),
                    message
                ),
                status: Some(status.as_u16()),
            });
        }

        let body_text = response.text().map_err(|e| AppError::CompletionApi {
            message: format!("Failed to read API response: {}", e),
            status: Some(status.as_u16()),
        })?;
        let api_response: ApiResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::CompletionApi {
                message: format!("Failed to decode API response: {}", e),
                status: Some(status.as_u16()),
            })?;
        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::StoryParse("response has no message content".to_string()))?;

        parse_story_content(&content).inspect_err(|e| {
            warn!(error = ?e, preview = %preview(&content), "could not use completion content");
        })
    }
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, messages: &[ConversationMessage]) -> CompletionOutcome {
        self.send_request(messages).into()
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ConversationMessage],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn preview(content: &str) -> String {
    content.chars().take(50).collect()
}
