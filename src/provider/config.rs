//! Generative provider configuration.
//!
//! Environment-only: nothing here is read from the catalog file.
//!
//! | Variable              | Default                                  |
//! |-----------------------|------------------------------------------|
//! | `GROQ_API_KEY`        | unset (provider reports `MissingApiKey`) |
//! | `PANTRY_LLM_ENDPOINT` | `https://api.groq.com/openai/v1`         |
//! | `PANTRY_LLM_MODEL`    | `llama-3.1-8b-instant`                   |

use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the endpoint base URL
pub const ENDPOINT_ENV: &str = "PANTRY_LLM_ENDPOINT";

/// Environment variable overriding the model name
pub const MODEL_ENV: &str = "PANTRY_LLM_MODEL";

/// Default OpenAI-compatible base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Settings for [`super::HttpRecommendationProvider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL; `/chat/completions` is appended
    pub endpoint: String,

    /// Model identifier sent with each request
    pub model: String,

    /// Bearer token
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Sampling temperature
    pub temperature: f32,

    /// Completion token cap
    pub max_tokens: u32,

    /// Whole-request timeout
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 2048,
            timeout_secs: 60,
        }
    }
}

impl ProviderConfig {
    /// Defaults overlaid with whatever the environment sets.
    ///
    /// Blank variables count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ProviderConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            endpoint: get(ENDPOINT_ENV).unwrap_or(defaults.endpoint),
            model: get(MODEL_ENV).unwrap_or(defaults.model),
            api_key: get(API_KEY_ENV),
            ..defaults
        }
    }

    /// Chat completions URL
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key.is_none());
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.max_tokens, 2048);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            (API_KEY_ENV, "secret"),
            (MODEL_ENV, "some-model"),
            (ENDPOINT_ENV, "   "),
        ]
        .into_iter()
        .collect();

        let config = ProviderConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "some-model");
        // Blank value falls back to the default
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_completions_url() {
        let mut config = ProviderConfig::default();
        assert_eq!(
            config.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );

        config.endpoint = "http://localhost:8080/v1/".to_string();
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = ProviderConfig {
            api_key: Some("secret".to_string()),
            ..ProviderConfig::default()
        };
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        assert!(!json.contains("secret"));
    }
}
