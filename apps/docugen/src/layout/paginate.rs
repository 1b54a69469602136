//! Pagination cursor walk: wrapped lines in, placed line instructions out.
//!
//! The cursor starts at the top margin and moves down one line advance per
//! line. Before each line is placed, if the advance would carry it past
//! `page_height - margin`, the walk opens a new page and resets the cursor
//! to the top margin. Blank lines place like any other line (the renderer
//! draws nothing for them, but they consume vertical space).
//!
//! The pass is pure: no clock, no randomness, no I/O. Identical `(text,
//! config)` inputs produce identical output, which is what makes layout
//! previews trustworthy against the exported file.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::get_metrics;
use crate::layout::page::PageConfig;
use crate::layout::wrap::wrap_text;

/// One placed line: which page it lands on, what it says, and the baseline
/// offset from the page's top edge in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineInstruction {
    pub page_index: usize,
    pub text: String,
    pub y_offset_mm: f32,
}

/// The complete placement plan for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub lines: Vec<LineInstruction>,
    pub page_count: usize,
}

impl LayoutResult {
    /// True when the document produced no pages at all.
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Lines placed on the given page, in reading order.
    pub fn lines_on_page(&self, page_index: usize) -> impl Iterator<Item = &LineInstruction> {
        self.lines
            .iter()
            .filter(move |line| line.page_index == page_index)
    }
}

/// Lays out `text` against `config`.
///
/// Empty or whitespace-only text yields zero pages; callers treat that as
/// "nothing to export". Out-of-range config values are clamped here, so the
/// result never depends on upstream validation.
pub fn layout_document(text: &str, config: &PageConfig) -> LayoutResult {
    if text.trim().is_empty() {
        return LayoutResult::default();
    }

    let config = config.clamped();
    let metrics = get_metrics(&config.font_family);
    let wrapped = wrap_text(
        text,
        metrics,
        config.font_size_pt,
        config.content_width_mm(),
    );

    let margin = config.margin_mm;
    let advance = config.line_advance_mm();
    let bottom_limit = config.page_height_mm() - margin;

    let mut lines = Vec::with_capacity(wrapped.len());
    let mut page_index = 0usize;
    let mut cursor_y = margin;

    for text_line in wrapped {
        if cursor_y + advance > bottom_limit {
            page_index += 1;
            cursor_y = margin;
        }
        lines.push(LineInstruction {
            page_index,
            text: text_line,
            y_offset_mm: cursor_y,
        });
        cursor_y += advance;
    }

    LayoutResult {
        lines,
        page_count: page_index + 1,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
