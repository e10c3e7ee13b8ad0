// file: src/exporter/json.rs
// description: json export of answered questions

use crate::error::Result;
use crate::models::{Religion, ScriptureRetrievalOutput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedAnswer {
    pub exported_at: DateTime<Utc>,
    pub question: String,
    pub religions: Vec<Religion>,
    pub result: ScriptureRetrievalOutput,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn export(
        &self,
        question: &str,
        religions: &[Religion],
        result: &ScriptureRetrievalOutput,
        pretty: bool,
    ) -> Result<PathBuf> {
        let exported_at = Utc::now();
        let record = ExportedAnswer {
            exported_at,
            question: question.to_string(),
            religions: religions.to_vec(),
            result: result.clone(),
        };

        let file_name = format!("wisdom-{}.json", exported_at.format("%Y%m%dT%H%M%S%.3fZ"));
        let path = self.output_dir.join(file_name);

        let json = if pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        fs::write(&path, json)?;

        info!(
            "Exported {} entries to {}",
            result.len(),
            path.display()
        );
        Ok(path)
    }
}
