//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::{error::LlmError, types::Model};
use crate::config::RelayConfig;
use crate::llm::gemini::GeminiClient;
use crate::llm::openrouter::OpenRouterClient;

/// Main interface that both provider adapters satisfy
///
/// One call is one atomic request/response round trip: a single HTTPS POST
/// with a fixed timeout, returning either reply text or a classified
/// failure. Adapters never retry and never let a transport or parsing
/// fault propagate as a panic.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a single-turn message and return the reply text
    ///
    /// An upstream response with no extractable text is NOT a failure;
    /// the adapter returns `Ok` with an explanatory sentence instead.
    async fn generate(&self, message: &str) -> Result<String, LlmError>;
}

/// Create a provider adapter for the selected model
///
/// The relay checks for a configured credential before calling this, so a
/// missing key here is reported as an authentication error rather than a
/// panic.
///
/// # Example
///
/// ```rust,no_run
/// use funnx_backend::config::RelayConfig;
/// use funnx_backend::llm::{create_provider, Model};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RelayConfig::from_env();
/// let provider = create_provider(Model::Gemini, &config)?;
/// # Ok(())
/// # }
/// ```
pub fn create_provider(
    model: Model,
    config: &RelayConfig,
) -> Result<Box<dyn ChatProvider>, LlmError> {
    match model {
        Model::Gemini => {
            let client = GeminiClient::new(config.gemini.clone())?;
            Ok(Box::new(client))
        }
        Model::DeepSeek => {
            let client = OpenRouterClient::new(config.openrouter.clone())?;
            Ok(Box::new(client))
        }
    }
}
