//! Error types for a debate run

use thiserror::Error;

use duel_llm::LlmError;

/// Errors that abort a debate run
#[derive(Debug, Error)]
pub enum DebateError {
    /// The chat-completion call itself failed
    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    /// The reply was not valid JSON for the expected document
    #[error("Schema violation in {document}: {reason}")]
    SchemaViolation {
        document: &'static str,
        reason: String,
    },
}

impl DebateError {
    pub(crate) fn schema(document: &'static str, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            document,
            reason: reason.into(),
        }
    }

    /// Whether the failure came from the reply contents rather than the provider
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation { .. })
    }
}
