//! Editor session state: the document, its page configuration, and the
//! enhancement request status.
//!
//! Everything a renderer or exporter needs is derivable from this one
//! struct; there is no hidden global state. Transitions are plain methods
//! so they stay synchronous and trivially testable; the async orchestration
//! around them lives in `enhance::controller`.

use serde::{Deserialize, Serialize};

use crate::layout::PageConfig;

/// Lifecycle of the single outstanding enhancement request.
///
/// Exactly one variant holds at a time. The legal walk is
/// `Idle -> Loading -> Succeeded | Failed`, and from either terminal state
/// back to `Loading` on the next trigger (or `Idle` via acknowledgement).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhanceStatus {
    #[default]
    Idle,
    Loading,
    /// Carries the text the service returned, which also replaced the
    /// document wholesale.
    Succeeded(String),
    /// Carries the user-facing failure message. The document is untouched.
    Failed(String),
}

impl EnhanceStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, EnhanceStatus::Loading)
    }
}

/// Footer statistics for the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Unicode scalar count, not byte length.
    pub characters: usize,
    /// Whitespace-separated token count.
    pub words: usize,
}

/// The whole editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub document: String,
    pub config: PageConfig,
    pub enhance: EnhanceStatus,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session seeded with document text; config stays at defaults.
    pub fn with_document(document: impl Into<String>) -> Self {
        EditorState {
            document: document.into(),
            ..Self::default()
        }
    }

    pub fn is_enhancing(&self) -> bool {
        self.enhance.is_loading()
    }

    /// Marks the single outstanding request as in flight.
    pub fn begin_enhancement(&mut self) {
        self.enhance = EnhanceStatus::Loading;
    }

    /// Success: the returned text replaces the document wholesale.
    pub fn complete_enhancement(&mut self, text: String) {
        self.document = text.clone();
        self.enhance = EnhanceStatus::Succeeded(text);
    }

    /// Failure: only the status changes; the document stays byte-identical.
    pub fn fail_enhancement(&mut self, message: String) {
        self.enhance = EnhanceStatus::Failed(message);
    }

    /// Dismisses a terminal status back to idle (e.g. the user closed the
    /// error banner).
    pub fn acknowledge_enhancement(&mut self) {
        self.enhance = EnhanceStatus::Idle;
    }

    /// Clears the document and any request status; config is kept.
    pub fn clear(&mut self) {
        self.document.clear();
        self.enhance = EnhanceStatus::Idle;
    }

    /// Full session reset: document, status, and config all back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            characters: self.document.chars().count(),
            words: self.document.split_whitespace().count(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state(document: &str) -> EditorState {
        EditorState::with_document(document)
    }

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = EditorState::new();
        assert_eq!(state.document, "");
        assert_eq!(state.enhance, EnhanceStatus::Idle);
        assert!(!state.is_enhancing());
    }

    #[test]
    fn test_begin_complete_walk() {
        let mut state = make_state("draft");
        state.begin_enhancement();
        assert!(state.is_enhancing());
        state.complete_enhancement("polished".to_string());
        assert_eq!(state.document, "polished");
        assert_eq!(
            state.enhance,
            EnhanceStatus::Succeeded("polished".to_string())
        );
        assert!(!state.is_enhancing());
    }

    #[test]
    fn test_failure_keeps_document() {
        let mut state = make_state("draft");
        state.begin_enhancement();
        state.fail_enhancement("service unreachable".to_string());
        assert_eq!(state.document, "draft", "failure must not touch the text");
        assert_eq!(
            state.enhance,
            EnhanceStatus::Failed("service unreachable".to_string())
        );
    }

    #[test]
    fn test_acknowledge_returns_to_idle() {
        let mut state = make_state("draft");
        state.fail_enhancement("oops".to_string());
        state.acknowledge_enhancement();
        assert_eq!(state.enhance, EnhanceStatus::Idle);
    }

    #[test]
    fn test_clear_resets_document_and_status() {
        let mut state = make_state("draft");
        state.fail_enhancement("oops".to_string());
        state.clear();
        assert_eq!(state.document, "");
        assert_eq!(state.enhance, EnhanceStatus::Idle);
        assert_eq!(state.config, PageConfig::default(), "config survives clear");
    }

    #[test]
    fn test_reset_restores_default_config() {
        let mut state = make_state("draft");
        state.config.font_size_pt = 30.0;
        state.begin_enhancement();
        state.reset();
        assert_eq!(state, EditorState::default());
    }

    #[test]
    fn test_stats_counts_chars_and_words() {
        let state = make_state("Hello, world!\nSecond line");
        let stats = state.stats();
        assert_eq!(stats.characters, 25);
        assert_eq!(stats.words, 4);
    }

    #[test]
    fn test_stats_counts_scalars_not_bytes() {
        let state = make_state("héllo");
        assert_eq!(state.stats().characters, 5);
    }

    #[test]
    fn test_stats_empty_document() {
        let state = EditorState::new();
        let stats = state.stats();
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.words, 0);
    }
}
