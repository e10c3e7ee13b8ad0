// file: src/presentation/mod.rs
// description: terminal rendering and per-field translation state
// reference: internal module structure

pub mod board;
pub mod cards;
pub mod progress;

pub use board::{FieldKind, TranslationBoard, TranslationKey, TranslationState, translate_entries};
pub use cards::{render_entry, render_result, source_line};
pub use progress::WaitIndicator;
