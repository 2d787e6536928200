//! Gemini-specific request and response types
//!
//! These map to the Generative Language API `generateContent` schema.
//! Response fields are all optional or defaulted so that parsing is total:
//! a body missing the expected structure deserializes to an empty shape
//! instead of failing.

use serde::{Deserialize, Serialize};

/// Request to generate content from Gemini
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; the relay always sends a single user turn
    pub contents: Vec<Content>,
}

/// A single content item in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    pub role: String,
    /// Parts of the content (may be empty when hitting limits like MAX_TOKENS)
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A part of content; only text parts are consumed by the relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response from Gemini's generateContent endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates (usually just one; absent when the prompt was blocked)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A candidate response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content; can be absent on safety blocks
    #[serde(default)]
    pub content: Option<Content>,
    /// Why the candidate finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}
