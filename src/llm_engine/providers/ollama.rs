//! Ollama backend adapter
//!
//! Talks to a running Ollama server (default: localhost:11434) over its chat
//! API. Response-shape variance is normalized here and nowhere else: callers
//! always receive plain raw text or a classified error.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ServiceError;
use crate::llm_engine::provider::{GenerationOptions, LlmProvider};
use crate::prompts::RenderedPrompt;

/// Ollama API message format
#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

/// Ollama chat request
#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaSamplingOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaSamplingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Ollama chat response; only the content field matters here
#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

/// Ollama version response
#[derive(Debug, Deserialize)]
struct OllamaVersion {
    version: String,
}

/// Connection settings for the Ollama adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Ollama LLM provider
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    pub fn new(config: OllamaConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    pub fn with_default_config() -> Self {
        Self::new(OllamaConfig::default())
    }
}

/// Map a transport-level failure onto the spec'd error kinds
fn classify_request_error(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::BackendTimeout(format!("Ollama call timed out: {}", e))
    } else if e.is_connect() {
        ServiceError::BackendUnreachable(format!("Cannot connect to Ollama: {}", e))
    } else {
        ServiceError::BackendResponse(format!("Ollama request failed: {}", e))
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    async fn check_connection(&self) -> Result<String, ServiceError> {
        let url = format!("{}/api/version", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_request_error)?;

        if !response.status().is_success() {
            return Err(ServiceError::BackendResponse(format!(
                "Ollama version endpoint returned {}",
                response.status()
            )));
        }

        let version: OllamaVersion = response
            .json()
            .await
            .map_err(|e| ServiceError::BackendResponse(format!("Invalid version response: {}", e)))?;

        Ok(version.version)
    }

    async fn generate(
        &self,
        prompt: &RenderedPrompt,
        options: &GenerationOptions,
    ) -> Result<String, ServiceError> {
        let url = format!("{}/api/chat", self.config.base_url);

        let request = OllamaChatRequest {
            model: options.model_name.clone(),
            messages: vec![
                OllamaMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                OllamaMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            stream: false,
            options: Some(OllamaSamplingOptions {
                temperature: options.temperature,
                num_predict: options.max_output_tokens,
            }),
        };

        log::debug!("Sending generation request to {} (model: {})", url, options.model_name);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::BackendResponse(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let parsed: OllamaChatResponse = response.json().await.map_err(|e| {
            ServiceError::BackendResponse(format!(
                "Ollama response missing message content: {}",
                e
            ))
        })?;

        // An empty content field is a valid (if unhelpful) response, not an error.
        Ok(parsed.message.content)
    }
}
