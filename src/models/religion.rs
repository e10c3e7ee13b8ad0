// file: src/models/religion.rs
// description: closed enumeration of the supported traditions
// reference: internal data structures

use crate::error::WellError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight traditions whose scriptures can be searched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Religion {
    Hinduism,
    Islam,
    Christianity,
    Buddhism,
    Judaism,
    Jainism,
    Sikhism,
    Taoism,
}

impl Religion {
    /// Canonical order, also the order of the reference catalogue.
    pub const ALL: [Religion; 8] = [
        Religion::Hinduism,
        Religion::Islam,
        Religion::Christianity,
        Religion::Buddhism,
        Religion::Judaism,
        Religion::Jainism,
        Religion::Sikhism,
        Religion::Taoism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Religion::Hinduism => "Hinduism",
            Religion::Islam => "Islam",
            Religion::Christianity => "Christianity",
            Religion::Buddhism => "Buddhism",
            Religion::Judaism => "Judaism",
            Religion::Jainism => "Jainism",
            Religion::Sikhism => "Sikhism",
            Religion::Taoism => "Taoism",
        }
    }

    /// Deduplicates and sorts a selection into canonical order.
    pub fn normalize_selection(religions: &[Religion]) -> Vec<Religion> {
        let mut selection = religions.to_vec();
        selection.sort();
        selection.dedup();
        selection
    }

    /// Comma-joined display list, e.g. `Islam, Buddhism`.
    pub fn join(religions: &[Religion]) -> String {
        religions
            .iter()
            .map(Religion::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Religion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Religion {
    type Err = WellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Religion::ALL
            .into_iter()
            .find(|religion| religion.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                WellError::validation(
                    "religions",
                    format!(
                        "Unknown religion '{}' (expected one of: {})",
                        wanted,
                        Religion::join(&Religion::ALL)
                    ),
                )
            })
    }
}
