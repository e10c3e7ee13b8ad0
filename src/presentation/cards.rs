// file: src/presentation/cards.rs
// description: terminal card rendering for retrieval results
// reference: https://docs.rs/colored

use crate::models::{Religion, ScriptureEntry, ScriptureRetrievalOutput};
use crate::presentation::board::{FieldKind, TranslationBoard, TranslationKey};
use colored::{Color, Colorize};

const RULE_WIDTH: usize = 72;

pub fn religion_color(religion: Religion) -> Color {
    match religion {
        Religion::Hinduism => Color::TrueColor {
            r: 249,
            g: 115,
            b: 22,
        },
        Religion::Islam => Color::Green,
        Religion::Christianity => Color::Cyan,
        Religion::Buddhism => Color::Magenta,
        Religion::Judaism => Color::Blue,
        Religion::Jainism => Color::Yellow,
        Religion::Sikhism => Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        },
        Religion::Taoism => Color::BrightBlack,
    }
}

pub fn religion_emblem(religion: Religion) -> &'static str {
    match religion {
        Religion::Hinduism => "🕉️",
        Religion::Islam => "☪️",
        Religion::Christianity => "✝️",
        Religion::Buddhism => "☸️",
        Religion::Judaism => "🕎",
        Religion::Jainism => "🛕",
        Religion::Sikhism => "🛐",
        Religion::Taoism => "☯️",
    }
}

/// `From: <scripture> (<category>), Chapter <chapter>, Verse(s) <verses>`
pub fn source_line(entry: &ScriptureEntry) -> String {
    let category = entry
        .category
        .as_deref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default();

    format!(
        "From: {}{}, Chapter {}, Verse(s) {}",
        entry.scripture, category, entry.chapter, entry.verses
    )
}

pub fn render_question(question: &str) -> String {
    format!(
        "{}\n  {}\n",
        "Your Question:".bold(),
        format!("\"{}\"", question).italic()
    )
}

/// `index` is the entry's position in the result and selects its translations.
pub fn render_entry(
    index: usize,
    entry: &ScriptureEntry,
    board: Option<&TranslationBoard>,
) -> String {
    let color = religion_color(entry.religion);
    let mut card = String::new();

    card.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH).dimmed()));
    card.push_str(&format!(
        "{} {}  [{}]\n",
        religion_emblem(entry.religion),
        entry.religion.as_str().color(color).bold(),
        entry.scripture.color(color)
    ));
    card.push_str(&format!("  {}\n\n", source_line(entry).dimmed()));

    let quote_key = TranslationKey::for_entry(index, entry, FieldKind::Quote);
    let quote = board.map_or(entry.answer.as_str(), |b| {
        b.display_text(&quote_key, &entry.answer)
    });
    card.push_str(&format!("  {}\n", "Quote:".bold()));
    card.push_str(&format!("  │ {}\n", quote.italic()));

    if let Some(insight) = entry.ai_insight.as_deref() {
        let insight_key = TranslationKey::for_entry(index, entry, FieldKind::Insight);
        let insight = board.map_or(insight, |b| b.display_text(&insight_key, insight));
        card.push_str(&format!("\n  {}\n", entry.insight_label().bold()));
        card.push_str(&format!("  {}\n", insight));
    }

    card
}

pub fn render_result(
    question: &str,
    output: &ScriptureRetrievalOutput,
    board: Option<&TranslationBoard>,
) -> String {
    let mut rendered = render_question(question);
    rendered.push('\n');

    if output.is_empty() {
        rendered.push_str(&format!("{}\n", "No Scriptures Found".bold()));
        rendered.push_str(
            "We couldn't find any scriptures matching your query for the selected religions.\n\
             Please try rephrasing your question or selecting different religions.\n",
        );
        return rendered;
    }

    rendered.push_str(&format!("{}\n", "Wisdom Found:".bold()));
    for (index, entry) in output.scripture_entries.iter().enumerate() {
        rendered.push_str(&render_entry(index, entry, board));
    }
    rendered.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH).dimmed()));

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranslateTextOutput;

    fn sample_entry() -> ScriptureEntry {
        ScriptureEntry {
            scripture: "Bhagavad Gita".to_string(),
            chapter: "2".to_string(),
            verses: "47".to_string(),
            answer: "You have a right to perform your prescribed duty.".to_string(),
            ai_insight: Some("Act without attachment to results.".to_string()),
            religion: Religion::Hinduism,
            category: Some("Smriti".to_string()),
        }
    }

    #[test]
    fn test_source_line() {
        let mut entry = sample_entry();
        assert_eq!(
            source_line(&entry),
            "From: Bhagavad Gita (Smriti), Chapter 2, Verse(s) 47"
        );
        entry.category = None;
        assert_eq!(
            source_line(&entry),
            "From: Bhagavad Gita, Chapter 2, Verse(s) 47"
        );
    }

    #[test]
    fn test_render_entry_restores_insight_label() {
        colored::control::set_override(false);
        let card = render_entry(0, &sample_entry(), None);
        assert!(card.contains("Hinduism"));
        assert!(card.contains("Purpose according to Bhagavad Gita:"));
        assert!(card.contains("Act without attachment to results."));
    }

    #[test]
    fn test_render_entry_uses_translations() {
        colored::control::set_override(false);
        let entry = sample_entry();
        let key = TranslationKey::for_entry(0, &entry, FieldKind::Quote);

        let mut board = TranslationBoard::new();
        board.begin(key.clone());
        board.complete(
            key,
            Ok(TranslateTextOutput {
                translated_text: "আপনার কর্তব্য পালনের অধিকার আছে।".to_string(),
            }),
        );

        let card = render_entry(0, &entry, Some(&board));
        assert!(card.contains("আপনার কর্তব্য পালনের অধিকার আছে।"));
        assert!(!card.contains("prescribed duty"));
        assert!(card.contains("Act without attachment to results."));
    }

    #[test]
    fn test_translation_stays_on_its_own_card() {
        colored::control::set_override(false);
        let mut first = sample_entry();
        first.answer = "first hadith".to_string();
        first.ai_insight = None;
        let mut second = first.clone();
        second.answer = "second hadith".to_string();

        let mut board = TranslationBoard::new();
        let key = TranslationKey::for_entry(0, &first, FieldKind::Quote);
        board.begin(key.clone());
        board.complete(
            key,
            Ok(TranslateTextOutput {
                translated_text: "FIRST HADITH".to_string(),
            }),
        );

        let first_card = render_entry(0, &first, Some(&board));
        let second_card = render_entry(1, &second, Some(&board));
        assert!(first_card.contains("FIRST HADITH"));
        assert!(second_card.contains("second hadith"));
        assert!(!second_card.contains("FIRST HADITH"));
    }

    #[test]
    fn test_render_empty_result() {
        colored::control::set_override(false);
        let rendered = render_result(
            "How can I find peace?",
            &ScriptureRetrievalOutput::empty(),
            None,
        );
        assert!(rendered.contains("\"How can I find peace?\""));
        assert!(rendered.contains("No Scriptures Found"));
    }

    #[test]
    fn test_every_religion_has_an_emblem() {
        for religion in Religion::ALL {
            assert!(!religion_emblem(religion).is_empty());
        }
    }
}
