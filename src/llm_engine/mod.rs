//! LLM backend integration
//!
//! `provider` defines the backend-agnostic contract, `providers` holds the
//! concrete adapters, `response` implements the model response contract.

pub mod provider;
pub mod providers;
pub mod response;

pub use provider::{GenerationOptions, GenerationResult, LlmProvider};
