//! OpenRouter-specific request and response types
//!
//! These map to OpenRouter's OpenAI-compatible chat completions schema.
//! Response fields are defaulted so parsing is total; a body missing the
//! expected structure deserializes to an empty shape instead of failing.

use serde::{Deserialize, Serialize};

/// Request to the chat completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier, e.g. "deepseek/deepseek-r1"
    pub model: String,
    /// Conversation; the relay always sends a single user turn
    pub messages: Vec<ChatMessage>,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "user", "assistant" or "system"
    pub role: String,
    pub content: String,
}

/// Response from the chat completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices (usually just one)
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// The assistant message; absent in malformed replies
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Message inside a completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
