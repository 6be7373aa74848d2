//! Orchestrator - runs the generator, then both advocates concurrently

use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use duel_llm::{global_metrics, LlmConfig, LlmProvider};

use crate::advocate::AdvocateAgent;
use crate::debate::DebateTranscript;
use crate::dilemma::generate_dilemma;
use crate::document::{AdvocacyDocument, DilemmaDocument, ViewpointLabel};
use crate::error::DebateError;

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Model used by all three agents
    pub model: String,
    /// Name of the advocate for viewpoint A
    pub first_advocate: String,
    /// Name of the advocate for viewpoint B
    pub second_advocate: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            model: duel_llm::config::DEFAULT_MODEL.to_string(),
            first_advocate: "Agent 2".to_string(),
            second_advocate: "Agent 3".to_string(),
        }
    }
}

impl OrchestratorConfig {
    /// Use the model from the provider configuration
    pub fn from_llm_config(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            ..Self::default()
        }
    }
}

/// Runs one debate: a dilemma, then two advocates in parallel
#[derive(Debug)]
pub struct Orchestrator {
    /// Configuration
    pub config: OrchestratorConfig,
    /// LLM backend shared by all agents
    llm: Arc<dyn LlmProvider>,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(llm: Arc<dyn LlmProvider>, config: OrchestratorConfig) -> Self {
        Self { config, llm }
    }

    /// Run the full debate.
    ///
    /// The dilemma is generated first; both advocates start only once it
    /// exists and are then polled together. The first failure from any agent
    /// fails the run and drops the other in-flight call.
    pub async fn run(&self) -> Result<DebateTranscript, DebateError> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("debate", %run_id, model = %self.config.model);
        self.run_inner(run_id).instrument(span).await
    }

    async fn run_inner(&self, run_id: Uuid) -> Result<DebateTranscript, DebateError> {
        let metrics = global_metrics();
        metrics.record_debate();
        let start = Instant::now();

        let dilemma = generate_dilemma(self.llm.as_ref(), &self.config.model)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Dilemma generation failed"))?;
        let dilemma = Arc::new(dilemma);

        let first = AdvocateAgent::new(&self.config.first_advocate, ViewpointLabel::A);
        let second = AdvocateAgent::new(&self.config.second_advocate, ViewpointLabel::B);
        tracing::info!(
            first = %first.name,
            second = %second.name,
            "Starting advocates"
        );

        let (advocacy_a, advocacy_b) = tokio::try_join!(
            self.advocate(first, Arc::clone(&dilemma)),
            self.advocate(second, Arc::clone(&dilemma)),
        )?;

        metrics.record_debate_completed();
        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Debate completed"
        );

        Ok(DebateTranscript {
            run_id,
            dilemma,
            advocacy_a,
            advocacy_b,
        })
    }

    async fn advocate(
        &self,
        agent: AdvocateAgent,
        dilemma: Arc<DilemmaDocument>,
    ) -> Result<AdvocacyDocument, DebateError> {
        let llm = Arc::clone(&self.llm);
        let span = tracing::info_span!("advocate", agent = %agent.name, viewpoint = %agent.label);

        async move {
            agent
                .advocate(llm.as_ref(), &self.config.model, &dilemma)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Advocate failed"))
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.first_advocate, "Agent 2");
        assert_eq!(config.second_advocate, "Agent 3");
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_config_follows_llm_model() {
        let llm = LlmConfig {
            model: "llama-3.3-70b-versatile".to_string(),
            ..LlmConfig::default()
        };
        assert_eq!(
            OrchestratorConfig::from_llm_config(&llm).model,
            "llama-3.3-70b-versatile"
        );
    }
}
