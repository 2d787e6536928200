// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod relay;
pub mod routes;

// LLM abstraction layer
pub mod llm;
