//! Dilemma generator agent

use duel_llm::LlmProvider;

use crate::document::DilemmaDocument;
use crate::error::DebateError;

/// Role given to the generator
pub const DILEMMA_SYSTEM_PROMPT: &str = "You are a dilemma generator. \
     Invent one realistic dilemma and produce exactly two opposing viewpoints on it. \
     Always answer with a single JSON object and nothing else.";

/// Schema and constraints for the generated dilemma
pub const DILEMMA_USER_PROMPT: &str = r#"Create a dilemma and return it as JSON with exactly this shape:
{
  "topic": "short topic name",
  "dilemma": "one or two sentences describing the situation",
  "viewpoint_a": { "title": "short title", "position": "what this side believes and wants" },
  "viewpoint_b": { "title": "short title", "position": "what this side believes and wants" }
}

Rules:
- viewpoint_a and viewpoint_b must genuinely conflict; both cannot be satisfied at once.
- Keep all prose together under 180 words.
- Return only the JSON object."#;

/// Generate the run's dilemma with one provider call
pub async fn generate_dilemma(
    llm: &dyn LlmProvider,
    model: &str,
) -> Result<DilemmaDocument, DebateError> {
    let raw = llm
        .invoke(DILEMMA_SYSTEM_PROMPT, DILEMMA_USER_PROMPT, model)
        .await?;
    let dilemma = DilemmaDocument::parse(&raw)?;

    tracing::info!(topic = %dilemma.topic, "Dilemma generated");
    Ok(dilemma)
}
