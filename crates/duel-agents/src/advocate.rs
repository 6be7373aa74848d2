//! Advocate agents: each defends one side of the dilemma

use serde::{Deserialize, Serialize};

use duel_llm::LlmProvider;

use crate::document::{AdvocacyDocument, DilemmaDocument, ViewpointLabel};
use crate::error::DebateError;

/// An agent assigned to argue for one viewpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocateAgent {
    /// Human-readable name, echoed back in the document
    pub name: String,
    /// The side this agent defends
    pub label: ViewpointLabel,
}

impl AdvocateAgent {
    pub fn new(name: &str, label: ViewpointLabel) -> Self {
        Self {
            name: name.to_string(),
            label,
        }
    }

    /// Role prompt naming the agent and the side it must defend
    pub fn system_prompt(&self, dilemma: &DilemmaDocument) -> String {
        let viewpoint = dilemma.viewpoint(self.label);
        format!(
            "You are {name}, an advocate in a structured debate. \
             You must defend viewpoint {label} (\"{title}\") and only that viewpoint. \
             Do not concede to viewpoint {other}. \
             Always answer with a single JSON object and nothing else.",
            name = self.name,
            label = self.label,
            title = viewpoint.title,
            other = self.label.other(),
        )
    }

    /// Task prompt carrying the output schema and the dilemma as context
    pub fn user_prompt(&self, dilemma: &DilemmaDocument) -> Result<String, DebateError> {
        let context = serde_json::to_string_pretty(dilemma)
            .map_err(|e| DebateError::schema(DilemmaDocument::NAME, e.to_string()))?;

        Ok(format!(
            "Dilemma:\n{context}\n\n\
             Argue for viewpoint {label} and return JSON with exactly this shape:\n\
             {{\n  \
               \"agent\": \"{name}\",\n  \
               \"defended_viewpoint\": \"{label}\",\n  \
               \"argument\": \"your main argument in one paragraph\",\n  \
               \"key_points\": [\"point 1\", \"point 2\", \"point 3\"]\n\
             }}\n\n\
             key_points must contain exactly 3 strings. Return only the JSON object.",
            context = context,
            label = self.label,
            name = self.name,
        ))
    }

    /// Produce this agent's defense with one provider call
    pub async fn advocate(
        &self,
        llm: &dyn LlmProvider,
        model: &str,
        dilemma: &DilemmaDocument,
    ) -> Result<AdvocacyDocument, DebateError> {
        let system = self.system_prompt(dilemma);
        let user = self.user_prompt(dilemma)?;

        let raw = llm.invoke(&system, &user, model).await?;
        let advocacy = AdvocacyDocument::parse(&raw, self.label)?;

        if advocacy.agent != self.name {
            tracing::debug!(
                expected = %self.name,
                reported = %advocacy.agent,
                "Advocate reported a different agent name"
            );
        }
        tracing::info!(agent = %self.name, viewpoint = %self.label, "Advocacy produced");
        Ok(advocacy)
    }
}
