// Request/response payload types for the HTTP surface

use serde::{Deserialize, Serialize};

/// Body of POST /chat
///
/// `message` and `model` are optional at the serde level so the handler can
/// return the documented 400 bodies instead of a generic rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub model: Option<String>,
    /// Accepted and logged, but no adapter consumes it
    #[serde(default)]
    pub research_mode: bool,
    /// Opaque caller identity; never used for authorization
    pub user_email: Option<String>,
}

/// Successful reply from POST /chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of POST /login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Reply from POST /login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Reply from GET /ping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
    pub message: String,
}

/// Reply from POST /get_history; always empty, nothing is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<serde_json::Value>,
}
