//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ProviderSettings;
use crate::llm::core::{error::LlmError, provider::ChatProvider};

use super::mapper::{classify_status, classify_transport, extract_reply, to_gemini_request, EMPTY_REPLY};
use super::types::GenerateContentResponse;

/// Client for the Generative Language API (Gemini)
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent in the x-goog-api-key header
    api_key: String,
    /// Endpoint, model and timeout settings
    settings: ProviderSettings,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Errors
    ///
    /// Returns an authentication error if no API key is configured, or an
    /// HTTP error if the client cannot be constructed.
    pub fn new(settings: ProviderSettings) -> Result<Self, LlmError> {
        let api_key = settings.api_key.clone().ok_or_else(|| {
            LlmError::Authentication(
                "Gemini API Key is missing. Please set GOOGLE_API_KEY in your .env file."
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

    /// Build the generateContent endpoint URL
    fn build_endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url, self.settings.model
        )
    }

    /// Perform the single request/response round trip
    async fn make_request(&self, message: &str) -> Result<String, LlmError> {
        let gemini_request = to_gemini_request(message);

        let url = self.build_endpoint_url();
        debug!(url = %url, "sending Gemini request");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
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

        let gemini_response: GenerateContentResponse = serde_json::from_str(&body)?;

        match extract_reply(&gemini_response) {
            Some(text) => Ok(text),
            None => {
                warn!(raw = %body, "Gemini response was empty or malformed");
                Ok(EMPTY_REPLY.to_string())
            }
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiClient {
    async fn generate(&self, message: &str) -> Result<String, LlmError> {
        self.make_request(message).await
    }
}
