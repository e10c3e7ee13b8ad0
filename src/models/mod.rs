// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod religion;
pub mod scripture;
pub mod translation;

pub use religion::Religion;
pub use scripture::{ScriptureEntry, ScriptureRetrievalInput, ScriptureRetrievalOutput};
pub use translation::{DEFAULT_TARGET_LANGUAGE, TranslateTextInput, TranslateTextOutput};
