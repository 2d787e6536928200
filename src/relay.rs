//! Relay Service: validation, model dispatch and error mapping
//!
//! Sits between the HTTP handlers and the provider adapters. Validation
//! and configuration errors are resolved here and never reach an adapter;
//! adapter-classified hard errors pass through unchanged. No retry is
//! attempted anywhere on this path: a single upstream failure is a single
//! relay failure.

use thiserror::Error;
use warp::http::StatusCode;

use crate::config::RelayConfig;
use crate::llm::{create_provider, LlmError, Model};
use crate::models::ChatRequest;

/// Failures resolved at the relay boundary, plus pass-through upstream errors
#[derive(Debug, Error)]
pub enum RelayError {
    /// Message absent or empty; checked before anything else
    #[error("No message provided")]
    EmptyMessage,

    /// Model label outside the two recognized values
    #[error("Invalid model selected")]
    UnsupportedModel(String),

    /// The selected provider has no configured credential
    #[error("{provider} API Key is missing. Please set {env_var} in your .env file.")]
    MissingCredential {
        provider: &'static str,
        env_var: &'static str,
    },

    /// Classified failure from the provider adapter, unchanged
    #[error(transparent)]
    Upstream(#[from] LlmError),
}

impl RelayError {
    /// HTTP status the error maps to
    ///
    /// Client mistakes are 400; configuration and upstream failures are
    /// 500, matching the original surface.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::EmptyMessage | RelayError::UnsupportedModel(_) => StatusCode::BAD_REQUEST,
            RelayError::MissingCredential { .. } | RelayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// One provider's labeled outcome in a both-provider aggregation
#[derive(Debug)]
pub struct ProviderReply {
    /// Wire label of the provider that produced this result
    pub model: &'static str,
    pub result: Result<String, RelayError>,
}

/// Validate a chat request, yielding the model and message to relay
///
/// Performs no I/O; a request rejected here causes zero upstream calls.
pub fn validate(request: &ChatRequest) -> Result<(Model, &str), RelayError> {
    let message = request
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or(RelayError::EmptyMessage)?;

    let label = request.model.as_deref().unwrap_or_default();
    let model =
        Model::from_label(label).ok_or_else(|| RelayError::UnsupportedModel(label.to_string()))?;

    Ok((model, message))
}

/// Handle a full chat request: validate, then dispatch
pub async fn handle(config: &RelayConfig, request: &ChatRequest) -> Result<String, RelayError> {
    let (model, message) = validate(request)?;
    dispatch(config, model, message).await
}

/// Relay a validated message to the selected provider
///
/// Checks the credential guard, then performs exactly one adapter call.
pub async fn dispatch(
    config: &RelayConfig,
    model: Model,
    message: &str,
) -> Result<String, RelayError> {
    guard_credential(model, config)?;
    let provider = create_provider(model, config)?;
    let text = provider.generate(message).await?;
    Ok(text)
}

/// Query both providers in sequence and collect the labeled results
///
/// This backs the UI's "Try Both" mode. The calls are strictly sequential,
/// never concurrent; one provider failing does not stop the other from
/// being queried.
pub async fn dispatch_both(config: &RelayConfig, message: &str) -> Vec<ProviderReply> {
    let mut replies = Vec::with_capacity(2);
    for model in Model::all() {
        let result = dispatch(config, model, message).await;
        replies.push(ProviderReply {
            model: model.label(),
            result,
        });
    }
    replies
}

/// Reject the request up front when the provider's credential is absent
fn guard_credential(model: Model, config: &RelayConfig) -> Result<(), RelayError> {
    let (settings, provider, env_var) = match model {
        Model::Gemini => (&config.gemini, "Gemini", "GOOGLE_API_KEY"),
        Model::DeepSeek => (&config.openrouter, "OpenRouter", "OPENROUTER_API_KEY"),
    };
    if settings.api_key.is_none() {
        return Err(RelayError::MissingCredential { provider, env_var });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderSettings;

    fn request(message: Option<&str>, model: Option<&str>) -> ChatRequest {
        ChatRequest {
            message: message.map(String::from),
            model: model.map(String::from),
            research_mode: false,
            user_email: None,
        }
    }

    fn config_without_keys() -> RelayConfig {
        RelayConfig {
            gemini: ProviderSettings::new(None, "http://127.0.0.1:1", "gemini-1.5-flash"),
            openrouter: ProviderSettings::new(None, "http://127.0.0.1:1", "deepseek/deepseek-r1"),
        }
    }

    #[test]
    fn test_validate_missing_message() {
        let req = request(None, Some("Gemini"));
        let result = validate(&req);
        assert!(matches!(result, Err(RelayError::EmptyMessage)));
    }

    #[test]
    fn test_validate_empty_message() {
        let req = request(Some(""), Some("Gemini"));
        let result = validate(&req);
        assert!(matches!(result, Err(RelayError::EmptyMessage)));
    }

    #[test]
    fn test_validate_missing_model() {
        let req = request(Some("hello"), None);
        let result = validate(&req);
        assert!(matches!(result, Err(RelayError::UnsupportedModel(_))));
    }

    #[test]
    fn test_validate_unknown_model() {
        let req = request(Some("hello"), Some("GPT-4"));
        match validate(&req) {
            Err(RelayError::UnsupportedModel(label)) => assert_eq!(label, "GPT-4"),
            other => panic!("Expected unsupported model, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_ok() {
        let req = request(Some("hello"), Some("Gemini"));
        let (model, message) = validate(&req).unwrap();
        assert_eq!(model, Model::Gemini);
        assert_eq!(message, "hello");
    }

    #[test]
    fn test_validate_checks_message_before_model() {
        // Matches the original handler's check order
        let req = request(None, Some("GPT-4"));
        let result = validate(&req);
        assert!(matches!(result, Err(RelayError::EmptyMessage)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::EmptyMessage.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::UnsupportedModel("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::MissingCredential {
                provider: "Gemini",
                env_var: "GOOGLE_API_KEY"
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::Upstream(LlmError::Connection("down".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_credential_message() {
        let err = RelayError::MissingCredential {
            provider: "OpenRouter",
            env_var: "OPENROUTER_API_KEY",
        };
        assert_eq!(
            err.to_string(),
            "OpenRouter API Key is missing. Please set OPENROUTER_API_KEY in your .env file."
        );
    }

    #[tokio::test]
    async fn test_dispatch_without_credential_makes_no_call() {
        // The unroutable base_url would fail loudly if a call were attempted;
        // the credential guard must reject first.
        let config = config_without_keys();
        let result = dispatch(&config, Model::Gemini, "hello").await;
        assert!(matches!(result, Err(RelayError::MissingCredential { .. })));
    }

    #[tokio::test]
    async fn test_dispatch_both_reports_both_labels() {
        let config = config_without_keys();
        let replies = dispatch_both(&config, "hello").await;
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].model, "Gemini");
        assert_eq!(replies[1].model, "DeepSeek (via OpenRouter)");
        assert!(replies.iter().all(|r| r.result.is_err()));
    }
}
