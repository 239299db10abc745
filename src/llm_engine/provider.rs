//! LLM provider trait and generation types
//!
//! Defines the interface a model-serving backend adapter implements. The
//! transport (HTTP, subprocess, in-process) is the adapter's concern; callers
//! only see a rendered prompt going in and raw model text coming out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::prompts::RenderedPrompt;

/// Sampling and routing options for one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier on the serving backend (e.g. "qwen3:14b")
    pub model_name: String,
    /// Sampling temperature; low values favor extractive output
    pub temperature: Option<f32>,
    /// Cap on generated tokens (None = model default)
    pub max_output_tokens: Option<u32>,
}

/// Output of one model call, returned directly to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Working notes the model emitted inside the reasoning span, if any
    pub reasoning: String,
    /// The final answer text
    pub result: String,
}

/// The trait every model-serving backend adapter implements
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Backend name for logs (e.g. "ollama")
    fn provider_name(&self) -> &'static str;

    /// Probe the backend and return its reported version
    async fn check_connection(&self) -> Result<String, ServiceError>;

    /// Run one generation call and return the raw model text.
    /// This is the single suspension point of the whole service; it may block
    /// for tens of seconds and must be awaited without holding any lock.
    async fn generate(
        &self,
        prompt: &RenderedPrompt,
        options: &GenerationOptions,
    ) -> Result<String, ServiceError>;
}
