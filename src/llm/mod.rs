//! LLM abstraction layer
//!
//! This module provides a unified interface over the two upstream chat
//! APIs the relay talks to: Google's Generative Language API (Gemini) and
//! OpenRouter (DeepSeek). Each adapter builds its provider's native
//! request, performs exactly one HTTPS call, and either extracts the reply
//! text or classifies the failure.

pub mod core;
pub mod gemini;
pub mod openrouter;

// Re-export commonly used types
pub use core::{
    error::LlmError,
    provider::{create_provider, ChatProvider},
    types::Model,
};
