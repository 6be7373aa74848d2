//! # Duel LLM
//!
//! Chat-completion provider integrations for dilemma-duel agents.
//!
//! ## Supported Backends
//!
//! | Provider | Type | Key Required |
//! |----------|------|--------------|
//! | Groq | API | `GROQ_API_KEY` |
//! | Offloaded | Any blocking client | Depends on client |
//! | Mock | Testing | None |
//!
//! ## Quick Start
//!
//! ```rust
//! use duel_llm::{MockProvider, LlmProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Use mock provider for testing
//!     let llm = MockProvider::constant(r#"{"answer": 42}"#);
//!
//!     // One JSON-mode call: system prompt, user prompt, model
//!     let reply = llm.invoke("You answer in JSON.", "What is 6 x 7?", "mock").await.unwrap();
//!     println!("{}", reply);
//! }
//! ```
//!
//! ## With Groq
//!
//! ```rust,ignore
//! use duel_llm::{GroqProvider, LlmConfig};
//!
//! let config = LlmConfig::from_env()?;
//! let llm = GroqProvider::from_config(&config)?;
//!
//! let reply = llm.invoke("Reply in JSON.", "Confirm Groq is working.", &config.model).await?;
//! ```

pub mod blocking;
pub mod config;
pub mod groq;
pub mod metrics;
pub mod mock;
pub mod provider;

pub use blocking::{BlockingProvider, Offloaded};
pub use config::{ConfigError, LlmConfig};
pub use groq::GroqProvider;
pub use metrics::{global_metrics, Metrics, MetricsSnapshot};
pub use mock::MockProvider;
pub use provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};
