//! Configuration management for dilemma-duel
//!
//! Handles the provider credential, endpoint, model and request timeout.
//! Everything is read from the environment once at startup into an explicit
//! [`LlmConfig`] that is handed to the provider at construction time.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default Groq endpoint (OpenAI-compatible)
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
/// Default model for all three agents
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
/// Default per-request HTTP timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Error types for configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// LLM provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq API key (env: GROQ_API_KEY)
    pub groq_api_key: Option<String>,
    /// API base URL (env: GROQ_BASE_URL)
    pub base_url: String,
    /// Model used by every agent (env: DUEL_MODEL)
    pub model: String,
    /// Per-request timeout in seconds (env: DUEL_TIMEOUT_SECS)
    pub timeout_secs: u64,
}

// Keeps the key out of logs.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match non_empty("DUEL_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DUEL_TIMEOUT_SECS must be a positive integer, got {:?}",
                        raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            groq_api_key: non_empty("GROQ_API_KEY"),
            base_url: non_empty("GROQ_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty("DUEL_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_secs,
        })
    }

    /// Get the API key, failing if it was not configured
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.groq_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GROQ_API_KEY".to_string()))
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LlmConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(matches!(config.api_key(), Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_overrides() {
        let config = LlmConfig::from_lookup(lookup(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_BASE_URL", "http://localhost:8080/"),
            ("DUEL_MODEL", "llama-3.3-70b-versatile"),
            ("DUEL_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_key().unwrap(), "gsk_test");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = LlmConfig::from_lookup(lookup(&[("DUEL_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LlmConfig::from_lookup(lookup(&[("DUEL_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = LlmConfig::from_lookup(lookup(&[("GROQ_API_KEY", "  ")])).unwrap();
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = LlmConfig {
            groq_api_key: Some("gsk_secret".to_string()),
            ..LlmConfig::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("gsk_secret"));
        assert!(printed.contains("<redacted>"));
    }
}
