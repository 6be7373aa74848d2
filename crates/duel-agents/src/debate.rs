//! The result of one debate run

use std::io::Write;
use std::sync::Arc;
use uuid::Uuid;

use crate::document::{AdvocacyDocument, DilemmaDocument};

/// A completed debate: the dilemma and one defense per side
#[derive(Debug, Clone)]
pub struct DebateTranscript {
    /// Correlates log lines of one run
    pub run_id: Uuid,
    /// The shared, read-only dilemma
    pub dilemma: Arc<DilemmaDocument>,
    /// Defense of viewpoint A (first advocate)
    pub advocacy_a: AdvocacyDocument,
    /// Defense of viewpoint B (second advocate)
    pub advocacy_b: AdvocacyDocument,
}

impl DebateTranscript {
    /// Write the three documents, pretty-printed, in fixed order:
    /// dilemma, advocacy A, advocacy B. Non-ASCII text is written as-is.
    pub fn emit<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut out, self.dilemma.as_ref())?;
        writeln!(out)?;
        serde_json::to_writer_pretty(&mut out, &self.advocacy_a)?;
        writeln!(out)?;
        serde_json::to_writer_pretty(&mut out, &self.advocacy_b)?;
        writeln!(out)?;
        out.flush()
    }
}
