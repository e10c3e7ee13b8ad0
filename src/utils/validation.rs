// file: src/utils/validation.rs
// description: input validation for queries, translation requests and settings
// reference: input validation patterns

use crate::error::{Result, WellError};
use crate::models::Religion;

pub struct Validator;

impl Validator {
    /// Counts characters of the question exactly as submitted, whitespace included.
    pub fn validate_question(question: &str, min_length: usize) -> Result<()> {
        let length = question.chars().count();
        if length < min_length {
            return Err(WellError::validation(
                "question",
                format!("Question must be at least {} characters.", min_length),
            ));
        }
        Ok(())
    }

    pub fn validate_religions(religions: &[Religion]) -> Result<()> {
        if religions.is_empty() {
            return Err(WellError::validation(
                "religions",
                "You have to select at least one religion.",
            ));
        }
        Ok(())
    }

    /// Accepts short ISO-style codes such as `bn`, `es`, `fil` or `pt-BR`.
    pub fn validate_language_code(code: &str) -> Result<()> {
        let mut parts = code.split('-');
        let primary = parts.next().unwrap_or_default();

        let primary_ok =
            (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
        let region_ok = parts.all(|part| {
            (2..=4).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphanumeric())
        });

        if !primary_ok || !region_ok {
            return Err(WellError::validation(
                "targetLanguage",
                format!("Invalid language code: {}", code),
            ));
        }
        Ok(())
    }

    pub fn validate_text_not_empty(field: &str, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(WellError::validation(field, "Text is empty"));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(WellError::validation(
                "url",
                format!("Invalid URL format: {}", url),
            ));
        }
        Ok(())
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(WellError::validation("port", "Port cannot be 0"));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }
}
