//! Mapping between relay messages and OpenRouter wire types

use std::time::Duration;

use crate::llm::core::error::LlmError;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Text returned when OpenRouter's response carries no extractable reply
pub const EMPTY_REPLY: &str =
    "DeepSeek returned an empty or unparseable response. Please try again or select a different model.";

/// Build a single-turn chat completions request from the user message
pub fn to_completion_request(model: &str, message: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: message.to_string(),
        }],
    }
}

/// Extract the first choice's message content, if any
///
/// Returns `None` when the expected nested structure is absent or the text
/// is empty; the caller surfaces that as the soft [`EMPTY_REPLY`] message.
pub fn extract_reply(response: &ChatCompletionResponse) -> Option<String> {
    let text = response
        .choices
        .first()?
        .message
        .as_ref()?
        .content
        .clone()?;
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Classify a non-success HTTP status into an `LlmError` with a hint
pub fn classify_status(status: u16, body: String) -> LlmError {
    let detail = format!("OpenRouter API HTTP error (Status: {}): {}", status, body);
    match status {
        401 | 403 => LlmError::Authentication(format!(
            "{}. This usually means your OPENROUTER_API_KEY is incorrect or invalid.",
            detail
        )),
        404 => LlmError::ModelNotFound(format!(
            "{}. Model not found or incorrect model ID on OpenRouter. Check OpenRouter's model list.",
            detail
        )),
        429 => LlmError::RateLimited(format!(
            "{}. Rate limit exceeded on OpenRouter. Try again after some time.",
            detail
        )),
        _ => LlmError::Http { status, body },
    }
}

/// Classify a transport-level failure into an `LlmError`
pub fn classify_transport(err: reqwest::Error, timeout: Duration) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout(format!(
            "OpenRouter API request timed out after {} seconds. Server might be slow.",
            timeout.as_secs()
        ))
    } else if err.is_connect() {
        LlmError::Connection(
            "OpenRouter API Connection Error: Backend could not connect to OpenRouter. Check internet."
                .to_string(),
        )
    } else {
        LlmError::Http {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}
