//! Meeting Digest - transcript summarization and Q&A over a local LLM
//!
//! Accepts a meeting transcript as timestamped speaker utterances and returns
//! a structured summary or extracted question/answer chains, produced by a
//! locally hosted Ollama model. The core is two components consumed in order:
//! the transcript compiler (`transcript` + `prompts`) and the generation
//! client (`llm_engine`), tied together by `digest`.

pub mod config;
pub mod digest;
pub mod error;
pub mod llm_engine;
pub mod prompts;
pub mod server;
pub mod transcript;

pub use config::AppConfig;
pub use digest::{compile, DigestService};
pub use error::ServiceError;
pub use llm_engine::provider::{GenerationOptions, GenerationResult};
pub use prompts::{PromptSet, RenderedPrompt};
pub use transcript::{Mode, TranscriptEntry};
