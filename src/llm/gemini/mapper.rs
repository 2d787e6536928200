//! Mapping between relay messages and Gemini wire types

use std::time::Duration;

use crate::llm::core::error::LlmError;

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};

/// Text returned when Gemini's response carries no extractable reply
pub const EMPTY_REPLY: &str = "Gemini returned an empty or unparseable response. Try again.";

/// Build a single-turn Gemini request from the user message
pub fn to_gemini_request(message: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: Some(message.to_string()),
            }],
        }],
    }
}

/// Extract the first candidate's text, if any
///
/// Returns `None` when the expected nested structure is absent or the text
/// is empty; the caller surfaces that as the soft [`EMPTY_REPLY`] message,
/// not as an error.
pub fn extract_reply(response: &GenerateContentResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .clone()?;
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Classify a non-success HTTP status into an `LlmError` with a hint
pub fn classify_status(status: u16, body: String) -> LlmError {
    let detail = format!("Gemini API error (Status: {}): {}", status, body);
    match status {
        401 | 403 => LlmError::Authentication(format!(
            "{}. Please check your GOOGLE_API_KEY for validity and permissions.",
            detail
        )),
        404 => LlmError::ModelNotFound(format!(
            "{}. Model not found or not available in your region.",
            detail
        )),
        429 => LlmError::RateLimited(format!(
            "{}. Rate limit exceeded. Try again after some time.",
            detail
        )),
        _ => LlmError::Http { status, body },
    }
}

/// Classify a transport-level failure into an `LlmError`
pub fn classify_transport(err: reqwest::Error, timeout: Duration) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout(format!(
            "Gemini API request timed out after {} seconds. Server might be slow.",
            timeout.as_secs()
        ))
    } else if err.is_connect() {
        LlmError::Connection(
            "Gemini API Connection Error: backend could not connect to Google. Check internet."
                .to_string(),
        )
    } else {
        LlmError::Http {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}
