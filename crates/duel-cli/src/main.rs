//! Duel CLI - runs one three-agent dilemma debate
//!
//! # Usage
//!
//! ```bash
//! export GROQ_API_KEY=gsk_...
//! duel                      # prints dilemma, advocacy A, advocacy B as JSON
//! RUST_LOG=debug duel       # same, with per-call logs on stderr
//! ```

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use duel_agents::{Orchestrator, OrchestratorConfig};
use duel_llm::{global_metrics, GroqProvider, LlmConfig};

/// Duel - a three-agent dilemma debate
///
/// Generates a dilemma with two opposing viewpoints, then has two agents
/// defend one side each, concurrently.
#[derive(Parser)]
#[command(
    name = "duel",
    version,
    about = "Three-agent dilemma debate over the Groq API",
    long_about = "Generates a dilemma with two opposing viewpoints, then runs two advocate\n\
                  agents concurrently, one per viewpoint. Prints three JSON documents to\n\
                  stdout: the dilemma, Agent 2's advocacy (A), Agent 3's advocacy (B).\n\n\
                  Environment:\n  \
                    GROQ_API_KEY        provider credential (required)\n  \
                    GROQ_BASE_URL       API base (default https://api.groq.com/openai)\n  \
                    DUEL_MODEL          model id (default llama-3.1-8b-instant)\n  \
                    DUEL_TIMEOUT_SECS   per-request timeout (default 60)\n  \
                    RUST_LOG            log filter for stderr (default warn)"
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    setup_logging();

    let config = LlmConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let llm = GroqProvider::from_config(&config).context("Failed to create Groq client")?;
    let orchestrator = Orchestrator::new(
        Arc::new(llm),
        OrchestratorConfig::from_llm_config(&config),
    );

    let result = orchestrator.run().await;
    tracing::debug!(metrics = ?global_metrics().snapshot(), "Run finished");
    let transcript = result.context("Debate failed")?;

    let mut stdout = std::io::stdout().lock();
    transcript
        .emit(&mut stdout)
        .context("Failed to write output")?;
    stdout.flush()?;

    Ok(())
}

/// Setup logging on stderr so stdout carries only the documents
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
