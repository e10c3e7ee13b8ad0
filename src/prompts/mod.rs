// file: src/prompts/mod.rs
// description: prompt templates and the per-religion reference catalogue
// reference: internal module structure

pub mod catalogue;
pub mod scripture;
pub mod template;
pub mod translation;

pub use catalogue::{reference_block, scoped_catalogue};
pub use scripture::{SCRIPTURE_PROMPT_NAME, build_scripture_prompt};
pub use template::PromptTemplate;
pub use translation::{TRANSLATION_PROMPT_NAME, build_translation_prompt};
