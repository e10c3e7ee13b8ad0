// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, WellError};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub min_question_length: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub default_language: String,
    pub max_in_flight: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "openai/gpt-oss-120b".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            temperature: 0.2,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            min_question_length: 10,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_language: "bn".to_string(),
            max_in_flight: 4,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9002,
        }
    }
}

impl Config {
    /// Layers the given file (or the optional default file), then `WISDOM_WELL__*`
    /// environment variables. `GROQ_API_KEY` fills in a missing key.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("WISDOM_WELL")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| WellError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| WellError::Config(e.to_string()))?;

        config = config.with_env_api_key();
        config.validate()?;
        Ok(config)
    }

    /// Fills a missing key from `GROQ_API_KEY`.
    pub fn with_env_api_key(mut self) -> Self {
        self.fill_missing_api_key(std::env::var("GROQ_API_KEY").ok());
        self
    }

    fn fill_missing_api_key(&mut self, candidate: Option<String>) {
        if self.has_api_key() {
            return;
        }
        if let Some(key) = candidate.filter(|key| !key.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
    }

    pub fn default_config() -> Self {
        Self {
            llm: LlmConfig::default(),
            retrieval: RetrievalConfig::default(),
            translation: TranslationConfig::default(),
            server: ServerConfig::default(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.llm
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.llm.base_url)
            .map_err(|e| WellError::Config(e.to_string()))?;

        if self.llm.model.trim().is_empty() {
            return Err(WellError::Config("llm.model must not be empty".to_string()));
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(WellError::Config(
                "llm.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }

        if self.retrieval.min_question_length == 0 {
            return Err(WellError::Config(
                "min_question_length must be greater than 0".to_string(),
            ));
        }

        Validator::validate_language_code(&self.translation.default_language)
            .map_err(|e| WellError::Config(e.to_string()))?;

        if self.translation.max_in_flight == 0 {
            return Err(WellError::Config(
                "max_in_flight must be greater than 0".to_string(),
            ));
        }

        Validator::validate_port(self.server.port).map_err(|e| WellError::Config(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.translation.default_language, "bn");
        assert_eq!(config.retrieval.min_question_length, 10);
    }

    #[test]
    fn test_load_partial_file_uses_section_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wisdom.toml");
        fs::write(
            &path,
            "[llm]\napi_key = \"test-key\"\nmodel = \"llama-3.3-70b-versatile\"\nbase_url = \"http://localhost:8080/v1\"\ntemperature = 0.0\n\n[server]\nhost = \"0.0.0.0\"\nport = 8080\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.translation.max_in_flight, 4);
        assert!(config.has_api_key());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(
            &path,
            "[translation]\ndefault_language = \"bengali!\"\nmax_in_flight = 2\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(WellError::Config(_))
        ));
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.toml");
        fs::write(&path, "[translation]\ndefault_language = \"es\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.translation.default_language, "es");
        assert_eq!(config.translation.max_in_flight, 4);
        assert_eq!(config.llm.model, "openai/gpt-oss-120b");
    }

    #[test]
    fn test_missing_key_is_filled_from_fallback() {
        let mut config = Config::default_config();
        config.fill_missing_api_key(Some("   ".to_string()));
        assert!(!config.has_api_key());

        config.fill_missing_api_key(Some("gsk_fallback".to_string()));
        assert_eq!(config.llm.api_key.as_deref(), Some("gsk_fallback"));

        config.fill_missing_api_key(Some("gsk_other".to_string()));
        assert_eq!(config.llm.api_key.as_deref(), Some("gsk_fallback"));
    }

    #[test]
    fn test_blank_configured_key_is_replaced_by_fallback() {
        let mut config = Config::default_config();
        config.llm.api_key = Some(String::new());
        config.fill_missing_api_key(Some("gsk_fallback".to_string()));
        assert!(config.has_api_key());
    }

    #[test]
    fn test_validate_rejects_zero_in_flight() {
        let mut config = Config::default_config();
        config.translation.max_in_flight = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default_config();
        config.llm.base_url = "api.groq.com".to_string();
        assert!(config.validate().is_err());
    }
}
