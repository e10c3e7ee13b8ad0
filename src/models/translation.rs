// file: src/models/translation.rs
// description: translation request/response schemas
// reference: internal data structures

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_LANGUAGE: &str = "bn";

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextInput {
    /// The text to be translated.
    pub text_to_translate: String,

    /// The target language code (e.g., "bn" for Bengali, "es" for Spanish). Defaults to Bengali.
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl TranslateTextInput {
    pub fn new(text: impl Into<String>, target_language: Option<&str>) -> Self {
        Self {
            text_to_translate: text.into(),
            target_language: target_language
                .map(str::to_string)
                .unwrap_or_else(default_target_language),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextOutput {
    /// The translated text.
    pub translated_text: String,
}
