// file: src/prompts/scripture.rs
// description: request template for the scripture retrieval contract
// reference: internal prompt design

use crate::error::Result;
use crate::models::{Religion, ScriptureRetrievalInput};
use crate::prompts::catalogue::scoped_catalogue;
use crate::prompts::template::PromptTemplate;
use std::collections::HashMap;

pub const SCRIPTURE_PROMPT_NAME: &str = "scriptureRetrievalPrompt";

const SCRIPTURE_TEMPLATE: PromptTemplate = PromptTemplate::new(
    SCRIPTURE_PROMPT_NAME,
    r#"You are a spiritually informed AI assistant for a multi-faith wisdom app. Your goal is to provide answers from authentic and verified scriptural sources based on the user's question and selected religions.

User's Question: "{{question}}"
Selected Religions for Search: {{religions}}

Instructions:
1.  For EACH selected religion, search its primary AND secondary sacred texts for the most relevant and direct answer to the user's question.
2.  If a direct answer is found in a scripture, prioritize that.
3.  If no direct answer is found, search across all holy books of that specific selected religion for a closely related answer or teaching.
4.  For each relevant scripture found, provide the output in the EXACT following format:
    -   Religion: The religion (e.g., Hinduism, Islam). This will be used to group entries.
    -   Scripture: The specific name of the scripture text (e.g., Bhagavad Gita, Qur'an, Bible, Dhammapada, Tanakh, Guru Granth Sahib).
    -   Category (Optional): The section or class of the text if clear (e.g., Sruti, Smriti, Hadith, Mahayana Sutra).
    -   Chapter: The chapter, canto, or section (e.g., Chapter 3, Surah 51, Ecclesiastes Chapter 12, Verse 183, Micah Chapter 6, Ang 1).
    -   Verses: The verse number(s) (e.g., 19, 56, 13, 8, "First Mehl").
    -   Answer: The direct, translated quote from the scripture.
    -   AI Insight (Optional): A brief, respectful spiritual explanation, interpretation, or context of how the quote answers the question. This MUST be phrased as: "Purpose according to [Scripture Name]: [Your explanation here]". For example: "Purpose according to Bhagavad Gita: Fulfill your dharma (duty) selflessly to attain spiritual liberation (moksha)."

5.  If, for a particular selected religion, you cannot find any relevant scripture for the question (neither direct nor closely related), do NOT include an entry for that religion in the output.
6.  Ensure all references (scripture name, chapter, verses) are accurate and complete.
7.  The 'answer' field should contain ONLY the scriptural quote. The 'aiInsight' field should contain ONLY your respectful explanation.

Available Scriptures by Religion (search within these for the selected religions):

{{catalogue}}
Return an array of scripture entries in the 'scriptureEntries' field of the JSON output. If no relevant scriptures are found for ANY of the selected religions, return an empty array for 'scriptureEntries'.
"#,
);

/// The religion line keeps the caller's order; the catalogue is in canonical order.
pub fn build_scripture_prompt(input: &ScriptureRetrievalInput) -> Result<String> {
    let mut values = HashMap::new();
    values.insert("question", input.question.clone());
    values.insert("religions", Religion::join(&input.religions));
    values.insert("catalogue", scoped_catalogue(&input.religions));

    SCRIPTURE_TEMPLATE.render(&values)
}
