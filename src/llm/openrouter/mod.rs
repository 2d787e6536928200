//! OpenRouter provider implementation
//!
//! Adapter for DeepSeek models served through OpenRouter's
//! OpenAI-compatible chat completions API.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::OpenRouterClient;
