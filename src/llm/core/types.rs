//! Core types for the LLM abstraction layer

/// Unified model enum for the two supported providers
///
/// Variants correspond to the model labels the UI sends in the `/chat`
/// body; anything else is rejected before an adapter is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// Google Gemini via the Generative Language API
    Gemini,
    /// DeepSeek served through OpenRouter
    DeepSeek,
}

impl Model {
    /// Parse the wire label from a chat request
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Gemini" => Some(Model::Gemini),
            "DeepSeek (via OpenRouter)" => Some(Model::DeepSeek),
            _ => None,
        }
    }

    /// Get the wire label for this model
    pub fn label(&self) -> &'static str {
        match self {
            Model::Gemini => "Gemini",
            Model::DeepSeek => "DeepSeek (via OpenRouter)",
        }
    }

    /// Both models, in the order the "Try Both" mode queries them
    pub fn all() -> [Model; 2] {
        [Model::Gemini, Model::DeepSeek]
    }
}
