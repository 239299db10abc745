//! Model response contract: optional delimited reasoning segment
//!
//! Reasoning-capable models may wrap their working notes in a literal
//! `<think>...</think>` span ahead of the answer. Extraction is total: a
//! malformed span degrades to "no reasoning extracted", never an error.

use crate::llm_engine::provider::GenerationResult;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Split a raw model response into `(reasoning, result)`.
///
/// A well-formed span (opening marker before a matching closing marker)
/// yields the span body as `reasoning` and everything after the closing
/// marker as `result`, both trimmed. No markers, an unmatched marker, or
/// markers out of order yield an empty `reasoning` and the whole trimmed
/// response as `result`.
pub fn extract_reasoning(raw: &str) -> GenerationResult {
    if let Some(open) = raw.find(THINK_OPEN) {
        let body_start = open + THINK_OPEN.len();
        if let Some(close_offset) = raw[body_start..].find(THINK_CLOSE) {
            let close = body_start + close_offset;
            return GenerationResult {
                reasoning: raw[body_start..close].trim().to_string(),
                result: raw[close + THINK_CLOSE.len()..].trim().to_string(),
            };
        }
    }

    GenerationResult {
        reasoning: String::new(),
        result: raw.trim().to_string(),
    }
}
