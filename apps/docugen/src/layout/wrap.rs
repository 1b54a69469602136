//! Greedy word wrap against a measured width budget.
//!
//! Wrap rules, in order:
//! 1. Explicit `\n` always forces a line break.
//! 2. A paragraph with no words (empty line, or whitespace only) yields one
//!    empty output line, so blank separator lines survive into layout.
//! 3. Words accumulate left to right; a word moves to the next line when
//!    `current + space + word` would exceed the budget.
//! 4. A single word wider than the budget is emitted on its own line,
//!    unsplit. It overflows the right margin deterministically; hyphenation
//!    and mid-word breaking are out of scope.
//!
//! Runs of inter-word spaces and tabs collapse to a single space. Newlines
//! are the only whitespace the editor treats as structure.

use crate::layout::font_metrics::{FontMetricTable, PT_TO_MM};

/// Wraps `text` into printable lines no wider than `max_width_mm`, measured
/// with `metrics` at `font_size_pt`.
///
/// Callers pass a clamped config's width and size; a non-positive size would
/// make the em budget meaningless.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    // Convert the mm budget into em once; all measurement stays in em after
    let max_width_em = max_width_mm / (font_size_pt * PT_TO_MM);

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, metrics, max_width_em, &mut lines);
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    metrics: &FontMetricTable,
    max_width_em: f32,
    lines: &mut Vec<String>,
) {
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    if words.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = words[0].to_string();
    let mut current_em = metrics.measure_str(words[0]);

    for word in &words[1..] {
        let word_em = metrics.measure_str(word);
        if current_em + metrics.space_width + word_em > max_width_em {
            lines.push(current);
            current = (*word).to_string();
            current_em = word_em;
        } else {
            current.push(' ');
            current.push_str(word);
            current_em += metrics.space_width + word_em;
        }
    }
    lines.push(current);
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
