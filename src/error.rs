//! Error types for the digest core
//!
//! Every failure in the compiler or generation client maps to exactly one of
//! these kinds; the HTTP layer translates kinds to status codes.

use std::fmt;

/// Error kinds surfaced by the transcript compiler and generation client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller input rejected: empty entry list, unparseable timestamp, unknown mode
    Validation(String),
    /// Prompt template substitution failed (configuration defect)
    PromptRender(String),
    /// Model-serving endpoint could not be connected to
    BackendUnreachable(String),
    /// Model call exceeded the configured deadline
    BackendTimeout(String),
    /// Backend reachable but returned an error status or an unusable payload
    BackendResponse(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "Invalid request: {}", msg),
            ServiceError::PromptRender(msg) => write!(f, "Prompt template error: {}", msg),
            ServiceError::BackendUnreachable(msg) => write!(f, "Backend unreachable: {}", msg),
            ServiceError::BackendTimeout(msg) => write!(f, "Backend timed out: {}", msg),
            ServiceError::BackendResponse(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}
