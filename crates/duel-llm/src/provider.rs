//! LLM Provider trait and common types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::global_metrics;

/// Errors from LLM providers
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Provider not available")]
    NotAvailable,
    #[error("Blocking task failed: {0}")]
    TaskFailed(String),
}

/// A request to an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    /// System prompt (role/persona)
    pub system: String,
    /// User message
    pub prompt: String,
    /// Model override; `None` uses the provider's default
    pub model: Option<String>,
    /// Temperature (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Ask the provider to constrain the reply to a JSON object
    pub json_mode: bool,
}

impl LlmRequest {
    /// Create a simple request with default settings
    pub fn simple(prompt: &str) -> Self {
        Self::with_role("You are a helpful assistant.", prompt)
    }

    /// Create a request with a specific role
    pub fn with_role(system: &str, prompt: &str) -> Self {
        Self {
            system: system.to_string(),
            prompt: prompt.to_string(),
            model: None,
            temperature: 0.7,
            max_tokens: 1024,
            json_mode: false,
        }
    }

    /// Request a JSON object reply from the given model
    pub fn json(system: &str, prompt: &str, model: &str) -> Self {
        Self {
            model: Some(model.to_string()),
            json_mode: true,
            ..Self::with_role(system, prompt)
        }
    }
}

/// Response from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// The generated text
    pub content: String,
    /// Model used
    pub model: String,
    /// Tokens used (if available)
    pub tokens_used: Option<u32>,
    /// Time taken in milliseconds
    pub latency_ms: u64,
}

/// Trait for LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Generate a completion
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Generate with a simple prompt (convenience method)
    async fn ask(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.complete(LlmRequest::simple(prompt)).await?;
        Ok(response.content)
    }

    /// One JSON-mode chat completion, returning the reply text trimmed.
    ///
    /// Errors from the provider are returned as-is; there is no retry.
    async fn invoke(&self, system: &str, user: &str, model: &str) -> Result<String, LlmError> {
        let metrics = global_metrics();
        match self.complete(LlmRequest::json(system, user, model)).await {
            Ok(response) => {
                metrics.record_llm_call(response.tokens_used.unwrap_or(0) as u64, false);
                tracing::debug!(
                    provider = %self.name(),
                    model = %response.model,
                    latency_ms = response.latency_ms,
                    tokens = ?response.tokens_used,
                    "LLM call completed"
                );
                Ok(response.content.trim().to_string())
            }
            Err(e) => {
                metrics.record_llm_call(0, true);
                tracing::warn!(provider = %self.name(), model, error = %e, "LLM call failed");
                Err(e)
            }
        }
    }
}
