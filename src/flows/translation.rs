// file: src/flows/translation.rs
// description: translation contract around one model call

use crate::error::Result;
use crate::llm::{GenerativeModel, generate_structured};
use crate::models::{DEFAULT_TARGET_LANGUAGE, TranslateTextInput, TranslateTextOutput};
use crate::prompts::{TRANSLATION_PROMPT_NAME, build_translation_prompt};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct TranslationFlow {
    model: Arc<dyn GenerativeModel>,
    default_language: String,
}

impl TranslationFlow {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            default_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }

    pub fn with_default_language(mut self, language: &str) -> Self {
        self.default_language = language.to_string();
        self
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Translates `text`, falling back to the default language when none is given.
    pub async fn translate(
        &self,
        text: &str,
        target_language: Option<&str>,
    ) -> Result<TranslateTextOutput> {
        let language = target_language.unwrap_or(self.default_language.as_str());
        self.run(&TranslateTextInput::new(text, Some(language))).await
    }

    pub async fn run(&self, input: &TranslateTextInput) -> Result<TranslateTextOutput> {
        debug!(
            "Translating {} chars to {}",
            input.text_to_translate.chars().count(),
            input.target_language
        );

        let prompt = build_translation_prompt(input)?;
        generate_structured(self.model.as_ref(), TRANSLATION_PROMPT_NAME, prompt).await
    }
}
