// file: src/prompts/translation.rs
// description: request template for the translation contract

use crate::error::Result;
use crate::models::TranslateTextInput;
use crate::prompts::template::PromptTemplate;
use std::collections::HashMap;

pub const TRANSLATION_PROMPT_NAME: &str = "translationPrompt";

const TRANSLATION_TEMPLATE: PromptTemplate = PromptTemplate::new(
    TRANSLATION_PROMPT_NAME,
    "Translate the following text to {{targetLanguage}} ({{targetLanguage}}):\n\n\"{{textToTranslate}}\"\n\nReturn ONLY the translated text.",
);

pub fn build_translation_prompt(input: &TranslateTextInput) -> Result<String> {
    let mut values = HashMap::new();
    values.insert("targetLanguage", input.target_language.clone());
    values.insert("textToTranslate", input.text_to_translate.clone());

    TRANSLATION_TEMPLATE.render(&values)
}
