mod env;

use env::{read_env_u64, read_non_empty_env};

pub const DEFAULT_AI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_AI_TIMEOUT_MS: u64 = 15_000;

/// Trailing-debounce window for autocomplete. Tunable, not a contract.
pub const DEFAULT_SUGGEST_DEBOUNCE_MS: u64 = 500;

/// Settings for the external generative-text capability. `api_key` being
/// absent is a fully supported state: every augmenter short-circuits to
/// its neutral fallback without touching the network.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
    pub suggest_debounce_ms: u64,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_AI_ENDPOINT.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
            timeout_ms: DEFAULT_AI_TIMEOUT_MS,
            suggest_debounce_ms: DEFAULT_SUGGEST_DEBOUNCE_MS,
        }
    }
}

impl AssistConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: read_non_empty_env("GEMINI_API_KEY"),
            endpoint: read_non_empty_env("DARULIFTA_AI_ENDPOINT").unwrap_or(defaults.endpoint),
            model: read_non_empty_env("DARULIFTA_AI_MODEL").unwrap_or(defaults.model),
            timeout_ms: read_env_u64("DARULIFTA_AI_TIMEOUT_MS").unwrap_or(defaults.timeout_ms),
            suggest_debounce_ms: read_env_u64("DARULIFTA_SUGGEST_DEBOUNCE_MS")
                .unwrap_or(defaults.suggest_debounce_ms),
        }
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
