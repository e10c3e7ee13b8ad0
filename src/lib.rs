// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod flows;
pub mod llm;
pub mod models;
pub mod presentation;
pub mod prompts;
pub mod server;
pub mod utils;

pub use config::{Config, LlmConfig, RetrievalConfig, ServerConfig, TranslationConfig};
pub use error::{Result, WellError};
pub use exporter::{ExportedAnswer, JsonExporter};
pub use flows::{ScriptureRetrievalFlow, TranslationFlow};
pub use llm::{GenerativeModel, GroqClient, ModelRequest, UnavailableModel};
pub use models::{
    DEFAULT_TARGET_LANGUAGE, Religion, ScriptureEntry, ScriptureRetrievalInput,
    ScriptureRetrievalOutput, TranslateTextInput, TranslateTextOutput,
};
pub use presentation::{TranslationBoard, WaitIndicator, render_result, translate_entries};
pub use server::{AppState, create_router};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        assert_eq!(config.translation.default_language, DEFAULT_TARGET_LANGUAGE);
        assert_eq!(Religion::ALL.len(), 8);
    }
}
