//! Error types for the LLM layer

use thiserror::Error;

/// Classified failures from an upstream LLM call
///
/// Every variant carries a human-readable message that combines the raw
/// upstream detail with a remediation hint, since these strings are
/// surfaced directly to the caller.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Credential invalid or rejected by the provider
    #[error("{0}")]
    Authentication(String),

    /// Model identifier not recognized by the provider
    #[error("{0}")]
    ModelNotFound(String),

    /// Provider rate limit exceeded
    #[error("{0}")]
    RateLimited(String),

    /// Upstream unreachable
    #[error("{0}")]
    Connection(String),

    /// Fixed deadline exceeded
    #[error("{0}")]
    Timeout(String),

    /// Any other non-success HTTP response (catch-all)
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::Serialization(err.to_string())
    }
}
