//! # Duel Agents
//!
//! A three-agent debate over a chat-completion provider.
//!
//! One agent generates a dilemma with two opposing viewpoints; two advocates
//! then defend one side each, concurrently. Every reply is parsed into a typed
//! document at the boundary, and any failure aborts the whole run.
//!
//! ## Key Types
//!
//! - [`Orchestrator`] — runs the generator, then both advocates in parallel
//! - [`AdvocateAgent`] — defends one [`ViewpointLabel`]
//! - [`DilemmaDocument`] / [`AdvocacyDocument`] — the JSON contracts
//! - [`DebateTranscript`] — the three documents of one run, in fixed order
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use duel_agents::{Orchestrator, OrchestratorConfig};
//! use duel_llm::MockProvider;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let llm = Arc::new(
//!     MockProvider::routed()
//!         .route("Agent 2", r#"{"agent":"Agent 2","defended_viewpoint":"A","argument":"x","key_points":["1","2","3"]}"#)
//!         .route("Agent 3", r#"{"agent":"Agent 3","defended_viewpoint":"B","argument":"y","key_points":["4","5","6"]}"#)
//!         .route("dilemma generator", r#"{"topic":"t","dilemma":"d","viewpoint_a":{"title":"A1","position":"p1"},"viewpoint_b":{"title":"B1","position":"p2"}}"#),
//! );
//!
//! let orchestrator = Orchestrator::new(llm, OrchestratorConfig::default());
//! let transcript = orchestrator.run().await.unwrap();
//! transcript.emit(std::io::stdout()).unwrap();
//! # }
//! ```

pub mod advocate;
pub mod debate;
pub mod dilemma;
pub mod document;
pub mod error;
pub mod orchestrator;

pub use advocate::AdvocateAgent;
pub use debate::DebateTranscript;
pub use dilemma::{generate_dilemma, DILEMMA_SYSTEM_PROMPT, DILEMMA_USER_PROMPT};
pub use document::{AdvocacyDocument, DilemmaDocument, Viewpoint, ViewpointLabel};
pub use error::DebateError;
pub use orchestrator::{Orchestrator, OrchestratorConfig};
