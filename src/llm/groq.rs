// file: src/llm/groq.rs
// description: Groq chat completions client used as the external generative model
// reference: https://console.groq.com/docs/api-reference#chat

use crate::config::LlmConfig;
use crate::error::{Result, WellError};
use crate::llm::{GenerativeModel, ModelRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        let defaults = LlmConfig::default();
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: defaults.base_url,
            temperature: defaults.temperature,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                WellError::Config(
                    "No API key configured (set llm.api_key or GROQ_API_KEY)".to_string(),
                )
            })?;

        Ok(Self::new(api_key, config.model.clone())
            .with_base_url(&config.base_url)
            .with_temperature(config.temperature))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn system_message(request: &ModelRequest) -> String {
        format!(
            "Respond with a single JSON object and nothing else. \
             The object must validate against this JSON schema:\n{}",
            request.output_schema
        )
    }
}

#[async_trait]
impl GenerativeModel for GroqClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &ModelRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_message(request),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        debug!(
            "Sending {} to {} ({} prompt chars)",
            request.prompt_name,
            self.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| WellError::Model(format!("Failed to send Groq API request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Groq API returned {} for {}", status, request.prompt_name);
            return Err(WellError::Model(format!(
                "Groq API request failed with status {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            WellError::Model(format!("Failed to parse Groq API response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| WellError::Model("No completion returned from Groq API".to_string()))
    }
}
