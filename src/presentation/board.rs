// file: src/presentation/board.rs
// description: per-field translation state keyed by (scripture, chapter, verses, field)
// reference: https://docs.rs/futures

use crate::error::Result;
use crate::flows::TranslationFlow;
use crate::models::{ScriptureEntry, ScriptureRetrievalOutput, TranslateTextOutput};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Quote,
    Insight,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Quote => "quote",
            FieldKind::Insight => "insight",
        }
    }
}

/// Identity of one displayed, translatable field. `entry_index` is the entry's
/// position in the result, so entries sharing a citation keep separate keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TranslationKey {
    pub entry_index: usize,
    pub scripture: String,
    pub chapter: String,
    pub verses: String,
    pub field: FieldKind,
}

impl TranslationKey {
    pub fn for_entry(entry_index: usize, entry: &ScriptureEntry, field: FieldKind) -> Self {
        Self {
            entry_index,
            scripture: entry.scripture.clone(),
            chapter: entry.chapter.clone(),
            verses: entry.verses.clone(),
            field,
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.scripture,
            self.chapter,
            self.verses,
            self.entry_index,
            self.field.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationState {
    Loading,
    Translated(String),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct TranslationBoard {
    states: HashMap<TranslationKey, TranslationState>,
}

impl TranslationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as loading. Returns false while a request for it is already out.
    pub fn begin(&mut self, key: TranslationKey) -> bool {
        if self.is_loading(&key) {
            return false;
        }
        self.states.insert(key, TranslationState::Loading);
        true
    }

    pub fn complete(&mut self, key: TranslationKey, result: Result<TranslateTextOutput>) {
        let state = match result {
            Ok(output) => TranslationState::Translated(output.translated_text),
            Err(e) => {
                warn!("Translation of {} failed: {}", key, e);
                TranslationState::Failed(e.to_string())
            }
        };
        self.states.insert(key, state);
    }

    pub fn state(&self, key: &TranslationKey) -> Option<&TranslationState> {
        self.states.get(key)
    }

    pub fn is_loading(&self, key: &TranslationKey) -> bool {
        matches!(self.states.get(key), Some(TranslationState::Loading))
    }

    /// Translated text when available, otherwise the original.
    pub fn display_text<'a>(&'a self, key: &TranslationKey, original: &'a str) -> &'a str {
        match self.states.get(key) {
            Some(TranslationState::Translated(text)) => text.as_str(),
            _ => original,
        }
    }

    pub fn failures(&self) -> usize {
        self.states
            .values()
            .filter(|state| matches!(state, TranslationState::Failed(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Translates every quote and insight of `output` with at most `max_in_flight`
/// calls outstanding. Each completion only touches its own key.
pub async fn translate_entries(
    flow: &TranslationFlow,
    output: &ScriptureRetrievalOutput,
    target_language: Option<&str>,
    max_in_flight: usize,
    board: &mut TranslationBoard,
) -> usize {
    let mut jobs = Vec::new();

    for (index, entry) in output.scripture_entries.iter().enumerate() {
        let mut fields = vec![(FieldKind::Quote, entry.answer.as_str())];
        if let Some(insight) = entry.ai_insight.as_deref() {
            fields.push((FieldKind::Insight, insight));
        }

        for (field, text) in fields {
            let key = TranslationKey::for_entry(index, entry, field);
            if board.begin(key.clone()) {
                jobs.push((key, text));
            }
        }
    }

    let requested = jobs.len();
    info!("Requesting {} field translations", requested);

    let mut completions = stream::iter(jobs.into_iter().map(|(key, text)| async move {
        let result = flow.translate(text, target_language).await;
        (key, result)
    }))
    .buffer_unordered(max_in_flight.max(1));

    while let Some((key, result)) = completions.next().await {
        board.complete(key, result);
    }

    requested
}
