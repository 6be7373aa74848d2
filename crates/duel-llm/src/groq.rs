//! Groq LLM provider (OpenAI-compatible API)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::{ConfigError, LlmConfig};
use crate::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};

/// Groq API request format (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Groq API response format
#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<Choice>,
    model: String,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

/// Groq provider for chat completions
#[derive(Debug)]
pub struct GroqProvider {
    /// API key
    api_key: String,
    /// Default model (e.g., "llama-3.1-8b-instant")
    model: String,
    /// HTTP client, carrying the configured timeout
    client: reqwest::Client,
    /// Base URL
    base_url: String,
}

impl GroqProvider {
    /// Create a provider from explicit configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, ConfigError> {
        let api_key = config.api_key()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::Invalid(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.to_string(),
            model: config.model.clone(),
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Create with the default endpoint and timeout
    pub fn new(api_key: &str, model: &str) -> Result<Self, ConfigError> {
        Self::from_config(&LlmConfig {
            groq_api_key: Some(api_key.to_string()),
            model: model.to_string(),
            ..LlmConfig::default()
        })
    }

    /// Create with the small instant-response model
    pub fn instant(api_key: &str) -> Result<Self, ConfigError> {
        Self::new(api_key, crate::config::DEFAULT_MODEL)
    }

    fn build_request(&self, request: LlmRequest) -> GroqRequest {
        let messages = vec![
            Message {
                role: "system".to_string(),
                content: request.system,
            },
            Message {
                role: "user".to_string(),
                content: request.prompt,
            },
        ];

        GroqRequest {
            model: request.model.unwrap_or_else(|| self.model.clone()),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request
                .json_mode
                .then_some(ResponseFormat { kind: "json_object" }),
        }
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/v1/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = Instant::now();
        let url = format!("{}/v1/chat/completions", self.base_url);
        let groq_request = self.build_request(request);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&groq_request)
            .send()
            .await
            .map_err(|e| LlmError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::RequestFailed(format!(
                "Status: {}, Body: {}",
                status, body
            )));
        }

        let api_response: GroqResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| LlmError::InvalidResponse("response has no choices".to_string()))?;

        Ok(LlmResponse {
            content,
            model: api_response.model,
            tokens_used: api_response.usage.map(|u| u.total_tokens),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_sets_response_format() {
        let provider = GroqProvider::instant("gsk_test").unwrap();
        let body = provider.build_request(LlmRequest::json("sys", "user", "llama-3.3-70b-versatile"));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "llama-3.3-70b-versatile");
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "user");
    }

    #[test]
    fn test_plain_request_uses_default_model() {
        let provider = GroqProvider::instant("gsk_test").unwrap();
        let body = provider.build_request(LlmRequest::simple("hi"));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn test_requires_api_key() {
        let err = GroqProvider::from_config(&LlmConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_parses_null_content() {
        let raw = r#"{"model":"m","choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let parsed: GroqResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
        assert!(parsed.usage.is_none());
    }

    #[tokio::test]
    #[ignore] // Requires valid API key
    async fn test_groq() {
        let api_key = std::env::var("GROQ_API_KEY").expect("GROQ_API_KEY not set");
        let provider = GroqProvider::instant(&api_key).unwrap();

        if provider.is_available().await {
            let response = provider.ask("Confirm Groq is working.").await.unwrap();
            assert!(!response.is_empty());
            println!("Groq response: {}", response);
        }
    }
}
