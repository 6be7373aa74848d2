//! Integration tests for the provider layer
//!
//! Tests that hit the real API are marked with #[ignore] and need:
//! - GROQ_API_KEY
//!
//! Run with: cargo test -p duel-llm --test llm_integration -- --ignored

use std::sync::Arc;
use std::time::Duration;

use duel_llm::{global_metrics, GroqProvider, LlmConfig, LlmError, LlmProvider, MockProvider};

/// Test Groq provider with real API
#[tokio::test]
#[ignore = "Requires GROQ_API_KEY"]
async fn test_groq_real_json_request() {
    let config = LlmConfig::from_env().expect("valid environment");
    let provider = GroqProvider::from_config(&config).expect("GROQ_API_KEY must be set");

    assert!(provider.is_available().await, "Groq should be available");

    let reply = provider
        .invoke(
            "You reply with a JSON object only.",
            "Return {\"status\": \"ok\"} as JSON to confirm Groq is working.",
            &config.model,
        )
        .await
        .expect("request should succeed");

    let value: serde_json::Value = serde_json::from_str(&reply).expect("JSON mode reply");
    assert!(value.is_object());
    println!("Groq reply: {}", reply);
}

/// Test error handling with invalid API key
#[tokio::test]
#[ignore = "Makes real API call"]
async fn test_invalid_api_key() {
    let provider = GroqProvider::instant("invalid-key-12345").unwrap();

    let err = provider
        .invoke("Reply in JSON.", "Hello", "llama-3.1-8b-instant")
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::RequestFailed(_)), "{:?}", err);
}

/// Unreachable endpoint surfaces as a connection failure
#[tokio::test]
async fn test_unreachable_endpoint() {
    let config = LlmConfig {
        groq_api_key: Some("gsk_test".to_string()),
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..LlmConfig::default()
    };
    let provider = GroqProvider::from_config(&config).unwrap();

    let err = provider
        .invoke("sys", "user", &config.model)
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::ConnectionFailed(_)), "{:?}", err);
    assert!(!provider.is_available().await);
}

/// Providers are shared as trait objects across concurrent callers
#[tokio::test]
async fn test_shared_trait_object() {
    let mock = Arc::new(
        MockProvider::routed()
            .with_latency(Duration::from_millis(10))
            .route("left", r#"{"side":"left"}"#)
            .route("right", r#"{"side":"right"}"#),
    );
    let provider: Arc<dyn LlmProvider> = mock.clone();

    let (left, right) = futures::future::join(
        provider.invoke("left", "go", "m"),
        provider.invoke("right", "go", "m"),
    )
    .await;

    assert_eq!(left.unwrap(), r#"{"side":"left"}"#);
    assert_eq!(right.unwrap(), r#"{"side":"right"}"#);
    assert_eq!(mock.call_count(), 2);
}

/// Test metrics are recorded
#[tokio::test]
async fn test_metrics_recording() {
    let before = global_metrics().snapshot();

    let mock = MockProvider::constant("{}").with_latency(Duration::ZERO);
    mock.invoke("sys", "one", "m").await.unwrap();
    mock.invoke("sys", "two", "m").await.unwrap();

    let after = global_metrics().snapshot();
    assert!(after.llm_calls >= before.llm_calls + 2);
    assert!(after.tokens_used > before.tokens_used);
}
