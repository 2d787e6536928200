//! Process configuration for the relay
//!
//! All configuration is read from the environment exactly once at startup
//! and carried in an immutable `RelayConfig` that is passed explicitly to
//! the routes and adapters. A missing API key is a warning, not a crash:
//! requests selecting that provider fail at request time instead.

use std::time::Duration;
use tracing::{info, warn};

/// Default Gemini API endpoint (Generative Language API)
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default OpenRouter API endpoint
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Gemini model served behind the "Gemini" label
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// OpenRouter model served behind the "DeepSeek (via OpenRouter)" label
pub const OPENROUTER_MODEL: &str = "deepseek/deepseek-r1";

/// Per-request deadline for upstream calls
const UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Settings for one upstream provider
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// API credential; `None` means calls to this provider fail immediately
    pub api_key: Option<String>,
    /// Base URL of the provider API (overridable for tests)
    pub base_url: String,
    /// Model identifier sent upstream
    pub model: String,
    /// Total deadline for a single request
    pub timeout: Duration,
}

impl ProviderSettings {
    /// Create settings with the default 60-second deadline
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
        }
    }

    /// Override the request deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Immutable configuration for both provider adapters
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Gemini adapter settings
    pub gemini: ProviderSettings,
    /// OpenRouter adapter settings
    pub openrouter: ProviderSettings,
}

impl RelayConfig {
    /// Build the configuration from the process environment
    ///
    /// Reads `GOOGLE_API_KEY` and `OPENROUTER_API_KEY`. Absence of either
    /// is logged as a warning; the corresponding provider then rejects
    /// requests with a configuration error instead of calling upstream.
    pub fn from_env() -> Self {
        let gemini_key = read_key("GOOGLE_API_KEY");
        if gemini_key.is_some() {
            info!("Gemini API configured");
        } else {
            warn!("GOOGLE_API_KEY not found in environment. Gemini API calls will fail.");
        }

        let openrouter_key = read_key("OPENROUTER_API_KEY");
        if openrouter_key.is_some() {
            info!("OpenRouter API key loaded");
        } else {
            warn!("OPENROUTER_API_KEY not found in environment. OpenRouter API calls will fail.");
        }

        Self {
            gemini: ProviderSettings::new(gemini_key, GEMINI_BASE_URL, GEMINI_MODEL),
            openrouter: ProviderSettings::new(openrouter_key, OPENROUTER_BASE_URL, OPENROUTER_MODEL),
        }
    }
}

/// Read an environment variable, treating empty values as absent
fn read_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
