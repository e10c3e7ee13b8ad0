// file: src/flows/scripture_retrieval.rs
// description: scripture retrieval contract around one model call
// reference: internal contract design

use crate::error::Result;
use crate::llm::{GenerativeModel, generate_structured};
use crate::models::{ScriptureRetrievalInput, ScriptureRetrievalOutput};
use crate::prompts::{SCRIPTURE_PROMPT_NAME, build_scripture_prompt};
use crate::utils::OperationTimer;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ScriptureRetrievalFlow {
    model: Arc<dyn GenerativeModel>,
}

impl ScriptureRetrievalFlow {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Returns an empty result without calling the model when no religion is
    /// selected. Model and decode failures propagate unchanged.
    pub async fn run(&self, input: &ScriptureRetrievalInput) -> Result<ScriptureRetrievalOutput> {
        let request_id = Uuid::new_v4();

        if input.religions.is_empty() {
            warn!(%request_id, "No religions selected, skipping model call");
            return Ok(ScriptureRetrievalOutput::empty());
        }

        let prompt = build_scripture_prompt(input)?;
        let timer = OperationTimer::new("scripture retrieval");

        let mut output: ScriptureRetrievalOutput =
            generate_structured(self.model.as_ref(), SCRIPTURE_PROMPT_NAME, prompt).await?;

        for entry in &mut output.scripture_entries {
            entry.strip_insight_label();

            if !input.religions.contains(&entry.religion) {
                warn!(
                    %request_id,
                    "Model returned {} entry '{}' outside the requested religions",
                    entry.religion,
                    entry.scripture
                );
            }
        }

        timer.finish_with_count(output.len());
        info!(%request_id, "Retrieved {} scripture entries", output.len());

        Ok(output)
    }
}
