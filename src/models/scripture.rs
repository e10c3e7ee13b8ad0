// file: src/models/scripture.rs
// description: scripture retrieval request/response schemas and insight cleanup
// reference: internal data structures

use crate::models::Religion;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureRetrievalInput {
    /// The question to be answered using scripture.
    pub question: String,

    /// An array of selected religions to search scriptures from.
    pub religions: Vec<Religion>,
}

impl ScriptureRetrievalInput {
    pub fn new(question: impl Into<String>, religions: Vec<Religion>) -> Self {
        Self {
            question: question.into(),
            religions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureEntry {
    /// The name of the scripture (e.g., Bhagavad Gita, Qur'an, Bible).
    pub scripture: String,

    /// The chapter of the scripture (e.g., 3, 51, Ecclesiastes 12).
    pub chapter: String,

    /// The verse(s) from the scripture (e.g., 19, 56, 13).
    pub verses: String,

    /// The direct quote from the scripture.
    pub answer: String,

    /// A brief, respectful explanation of the scripture's message in relation to the
    /// question, formatted as "Purpose according to [Scripture Name]: [explanation]".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,

    /// The religion associated with the scripture.
    pub religion: Religion,

    /// Optional category of the source text (e.g., Sruti, Hadith, Mahayana Sutra).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ScriptureEntry {
    /// Heading the presentation layer shows above the insight.
    pub fn insight_label(&self) -> String {
        insight_label(&self.scripture)
    }

    /// Removes an echoed `Purpose according to <scripture>:` label from the insight.
    pub fn strip_insight_label(&mut self) {
        if let Some(insight) = self.ai_insight.take() {
            self.ai_insight = Some(strip_insight_label(&self.scripture, &insight));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureRetrievalOutput {
    /// An array of scripture entries relevant to the question from the selected religions.
    pub scripture_entries: Vec<ScriptureEntry>,
}

impl ScriptureRetrievalOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.scripture_entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scripture_entries.len()
    }
}

pub fn insight_label(scripture: &str) -> String {
    format!("Purpose according to {}:", scripture)
}

/// Strips the label while it prefixes the text (case-insensitively), trimming
/// leading whitespace after each strip. The remainder keeps its case.
pub fn strip_insight_label(scripture: &str, insight: &str) -> String {
    let label = insight_label(scripture);
    let mut rest = insight;

    while let Some(remainder) = strip_prefix_ignore_case(rest, &label) {
        rest = remainder.trim_start();
    }

    rest.to_string()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut text_chars = text.char_indices();

    for expected in prefix.chars() {
        let (_, actual) = text_chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }

    let end = text_chars.next().map_or(text.len(), |(index, _)| index);
    Some(&text[end..])
}
