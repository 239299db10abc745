//! Digest service: compiles transcripts into prompts and runs generation
//!
//! The one place the compiler and the generation client meet. Holds no
//! mutable state; concurrent requests issue concurrent model calls.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::llm_engine::provider::{GenerationOptions, GenerationResult, LlmProvider};
use crate::llm_engine::providers::OllamaProvider;
use crate::llm_engine::response::extract_reasoning;
use crate::prompts::{render, PromptSet, RenderedPrompt};
use crate::transcript::{canonical_transcript, Mode, TranscriptEntry};

/// Compile an entry list into the mode's rendered prompt.
/// Deterministic; identical inputs yield byte-identical output.
pub fn compile(
    entries: &[TranscriptEntry],
    mode: Mode,
    prompts: &PromptSet,
) -> Result<RenderedPrompt, ServiceError> {
    let transcript = canonical_transcript(entries)?;
    render(prompts.template(mode), &transcript)
}

/// Runs transcript analysis against the configured model backend
pub struct DigestService {
    provider: Arc<dyn LlmProvider>,
    prompts: PromptSet,
    options: GenerationOptions,
}

impl DigestService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_provider(
            Arc::new(OllamaProvider::new(config.ollama.connection())),
            config.prompts.clone(),
            config.ollama.generation_options(),
        )
    }

    /// Construct with an explicit provider; tests swap in a scripted backend
    pub fn with_provider(
        provider: Arc<dyn LlmProvider>,
        prompts: PromptSet,
        options: GenerationOptions,
    ) -> Self {
        Self {
            provider,
            prompts,
            options,
        }
    }

    /// Compile, generate, and apply the response contract for one mode
    pub async fn analyze(
        &self,
        entries: &[TranscriptEntry],
        mode: Mode,
    ) -> Result<GenerationResult, ServiceError> {
        let prompt = compile(entries, mode, &self.prompts)?;

        log::info!(
            "Running {} generation over {} entries via {}",
            mode.as_str(),
            entries.len(),
            self.provider.provider_name()
        );

        let raw = self.provider.generate(&prompt, &self.options).await?;
        Ok(extract_reasoning(&raw))
    }

    pub async fn generate_summary(
        &self,
        entries: &[TranscriptEntry],
    ) -> Result<GenerationResult, ServiceError> {
        self.analyze(entries, Mode::Summary).await
    }

    pub async fn generate_qa(
        &self,
        entries: &[TranscriptEntry],
    ) -> Result<GenerationResult, ServiceError> {
        self.analyze(entries, Mode::Qa).await
    }

    /// Probe the backend; used by the health endpoint and startup logging
    pub async fn backend_status(&self) -> Result<String, ServiceError> {
        self.provider.check_connection().await
    }
}
