//! Application configuration
//!
//! Loaded once at startup from a JSON file and passed explicitly; nothing in
//! the service reads configuration ambiently after construction. Missing file
//! or missing sections fall back to built-in defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::llm_engine::provider::GenerationOptions;
use crate::llm_engine::providers::OllamaConfig;
use crate::prompts::PromptSet;

pub const CONFIG_ENV_VAR: &str = "MEETING_DIGEST_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// HTTP bind address and CORS policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; `"*"` anywhere in the list means any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 49137,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Model backend address and sampling options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub base_url: String,
    pub model_name: String,
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model_name: "qwen3:14b".to_string(),
            timeout_secs: 120,
            // Extraction and summarization, not creative generation
            temperature: Some(0.2),
            max_output_tokens: Some(4096),
        }
    }
}

impl ModelConfig {
    pub fn connection(&self) -> OllamaConfig {
        OllamaConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            model_name: self.model_name.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

/// Top-level configuration: server, backend, and per-mode prompt templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ollama: ModelConfig,
    pub prompts: PromptSet,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the config path from `MEETING_DIGEST_CONFIG` (falling back to
    /// `config.json`) and load it; a missing file yields built-in defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let path = Path::new(&path);

        if path.exists() {
            let config = Self::load(path)?;
            log::info!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            log::info!(
                "No config file at {}, using built-in defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}
