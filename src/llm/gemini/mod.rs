//! Gemini provider implementation
//!
//! Adapter for Google's Generative Language API.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::GeminiClient;
