// file: src/llm/mod.rs
// description: generative model seam and structured reply decoding
// reference: https://docs.rs/schemars

pub mod groq;

pub use groq::GroqClient;

use crate::error::{Result, WellError};
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use tracing::debug;

lazy_static! {
    static ref FENCED_JSON: Regex =
        Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)\s*```").expect("FENCED_JSON regex is valid");
}

/// One templated request to the external model.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub prompt_name: &'static str,
    pub prompt: String,
    /// JSON schema the reply must satisfy.
    pub output_schema: serde_json::Value,
}

/// An opaque text generation service.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the raw reply text, expected to hold a JSON document.
    async fn generate(&self, request: &ModelRequest) -> Result<String>;
}

/// Stands in for a model that cannot be reached; every call fails with `reason`.
pub struct UnavailableModel {
    reason: String,
}

impl UnavailableModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl GenerativeModel for UnavailableModel {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn generate(&self, _request: &ModelRequest) -> Result<String> {
        Err(WellError::Model(self.reason.clone()))
    }
}

/// Sends `prompt` with `T`'s schema and decodes the reply into `T`.
pub async fn generate_structured<T>(
    model: &dyn GenerativeModel,
    prompt_name: &'static str,
    prompt: String,
) -> Result<T>
where
    T: DeserializeOwned + JsonSchema,
{
    let request = ModelRequest {
        prompt_name,
        prompt,
        output_schema: serde_json::to_value(schema_for!(T))?,
    };

    let reply = model.generate(&request).await?;
    debug!(
        "Model {} replied to {} with {} chars",
        model.name(),
        prompt_name,
        reply.len()
    );

    decode_reply(&reply)
}

pub fn decode_reply<T: DeserializeOwned>(reply: &str) -> Result<T> {
    let payload = extract_json_payload(reply);
    if payload.is_empty() {
        return Err(WellError::Schema("model returned no output".to_string()));
    }

    serde_json::from_str(payload).map_err(|e| WellError::Schema(e.to_string()))
}

/// Unwraps a fenced ```json block if the model added one.
pub fn extract_json_payload(reply: &str) -> &str {
    match FENCED_JSON.captures(reply).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => reply.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScriptureRetrievalOutput, TranslateTextOutput};
    use std::sync::Mutex;

    struct EchoModel {
        reply: String,
        seen: Mutex<Vec<ModelRequest>>,
    }

    #[async_trait]
    impl GenerativeModel for EchoModel {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, request: &ModelRequest) -> Result<String> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_extract_plain_payload() {
        assert_eq!(extract_json_payload("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_fenced_payload() {
        let reply = "Here you go:\n```json\n{\"translatedText\": \"hola\"}\n```\n";
        assert_eq!(extract_json_payload(reply), "{\"translatedText\": \"hola\"}");

        let bare_fence = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json_payload(bare_fence), "{\"a\": 1}");
    }

    #[test]
    fn test_decode_reply_errors_are_schema_errors() {
        let empty = decode_reply::<TranslateTextOutput>("   ").unwrap_err();
        assert!(matches!(empty, WellError::Schema(_)));

        let wrong_shape = decode_reply::<TranslateTextOutput>("{\"text\": \"x\"}").unwrap_err();
        assert!(matches!(wrong_shape, WellError::Schema(_)));

        let not_json = decode_reply::<TranslateTextOutput>("I cannot help with that.").unwrap_err();
        assert!(matches!(not_json, WellError::Schema(_)));
    }

    #[tokio::test]
    async fn test_unavailable_model_fails_as_upstream() {
        let model = UnavailableModel::new("No API key configured");
        let err = generate_structured::<TranslateTextOutput>(
            &model,
            "translationPrompt",
            "prompt".to_string(),
        )
        .await
        .unwrap_err();

        assert!(err.is_upstream());
        assert!(err.to_string().contains("No API key configured"));
    }

    #[tokio::test]
    async fn test_generate_structured_sends_schema() {
        let model = EchoModel {
            reply: "{\"scriptureEntries\": []}".to_string(),
            seen: Mutex::new(Vec::new()),
        };

        let output: ScriptureRetrievalOutput =
            generate_structured(&model, "scriptureRetrievalPrompt", "prompt".to_string())
                .await
                .unwrap();
        assert!(output.is_empty());

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].prompt_name, "scriptureRetrievalPrompt");
        let schema = seen[0].output_schema.to_string();
        assert!(schema.contains("scriptureEntries"));
        assert!(schema.contains("aiInsight"));
        assert!(schema.contains("Sikhism"));
    }
}
