//! OpenRouter client implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ProviderSettings;
use crate::llm::core::{error::LlmError, provider::ChatProvider};

use super::mapper::{classify_status, classify_transport, extract_reply, to_completion_request, EMPTY_REPLY};
use super::types::ChatCompletionResponse;

/// Attribution headers OpenRouter uses to rank referring apps
const REFERER: &str = "https://funnx.ai";
const TITLE: &str = "FunnX.Ai";

/// Client for DeepSeek models served through OpenRouter
pub struct OpenRouterClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent as a Bearer token
    api_key: String,
    /// Endpoint, model and timeout settings
    settings: ProviderSettings,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client
    ///
    /// # Errors
    ///
    /// Returns an authentication error if no API key is configured, or an
    /// HTTP error if the client cannot be constructed.
    pub fn new(settings: ProviderSettings) -> Result<Self, LlmError> {
        let api_key = settings.api_key.clone().ok_or_else(|| {
            LlmError::Authentication(
                "OpenRouter API Key is missing. Please set OPENROUTER_API_KEY in your .env file."
                    .to_string(),
            )
        })?;

        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(settings.timeout)
            .build()
            .map_err(|e| LlmError::Http {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            settings,
        })
    }

    /// Build the chat completions endpoint URL
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url)
    }

    /// Perform the single request/response round trip
    async fn make_request(&self, message: &str) -> Result<String, LlmError> {
        let completion_request = to_completion_request(&self.settings.model, message);

        let url = self.build_endpoint_url();
        debug!(url = %url, model = %self.settings.model, "sending OpenRouter request");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", REFERER)
            .header("X-Title", TITLE)
            .json(&completion_request)
            .send()
            .await
            .map_err(|e| classify_transport(e, self.settings.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| classify_transport(e, self.settings.timeout))?;

        if !status.is_success() {
            return Err(classify_status(status.as_u16(), body));
        }

        let completion_response: ChatCompletionResponse = serde_json::from_str(&body)?;

        match extract_reply(&completion_response) {
            Some(text) => Ok(text),
            None => {
                warn!(raw = %body, "OpenRouter response was empty or malformed");
                Ok(EMPTY_REPLY.to_string())
            }
        }
    }
}

#[async_trait]
impl ChatProvider for OpenRouterClient {
    async fn generate(&self, message: &str) -> Result<String, LlmError> {
        self.make_request(message).await
    }
}
