// file: src/flows/mod.rs
// description: the retrieval and translation contracts
// reference: internal module structure

pub mod scripture_retrieval;
pub mod translation;

pub use scripture_retrieval::ScriptureRetrievalFlow;
pub use translation::TranslationFlow;
