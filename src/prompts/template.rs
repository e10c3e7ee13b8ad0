// file: src/prompts/template.rs
// description: placeholder substitution for model request templates
// reference: https://docs.rs/regex

use crate::error::{Result, WellError};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

lazy_static! {
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("PLACEHOLDER regex is valid");
}

/// A request template with `{{name}}` placeholders.
///
/// Substitution is a single pass, so values that themselves contain `{{...}}`
/// are inserted verbatim and never expanded.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: &'static str,
    template: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, template: &'static str) -> Self {
        Self { name, template }
    }

    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String> {
        let mut missing = Vec::new();

        let rendered = PLACEHOLDER.replace_all(self.template, |caps: &Captures| {
            let key = &caps[1];
            match values.get(key) {
                Some(value) => value.clone(),
                None => {
                    missing.push(key.to_string());
                    String::new()
                }
            }
        });

        if !missing.is_empty() {
            return Err(WellError::validation(
                "template",
                format!(
                    "Template '{}' is missing values for: {}",
                    self.name,
                    missing.join(", ")
                ),
            ));
        }

        Ok(rendered.into_owned())
    }
}
