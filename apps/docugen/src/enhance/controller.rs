//! Enhancement controller — the single-flight request state machine between
//! the editor state and the text-generation backend.
//!
//! Rules enforced here, not by callers:
//! - An empty (after trim) document never reaches the backend.
//! - At most one request is in flight; a trigger while `Loading` is
//!   rejected outright, never queued.
//! - Success replaces the document wholesale. Failure leaves the document
//!   byte-identical and surfaces a fixed user-facing message; the raw error
//!   goes to the log, not the user.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::enhance::prompts::{POLISH_DIRECTIVE, STRUCTURE_DIRECTIVE, SUMMARIZE_DIRECTIVE};
use crate::llm_client::{GeminiClient, LlmError};
use crate::state::EditorState;

/// What the user sees when any enhancement attempt fails. Transport detail
/// stays in the logs.
pub const ENHANCE_FAILURE_MESSAGE: &str =
    "Failed to enhance text with AI. Please check your connection.";

// ────────────────────────────────────────────────────────────────────────────
// Actions
// ────────────────────────────────────────────────────────────────────────────

/// The three document rewrites the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhanceAction {
    /// Professional rewrite preserving meaning.
    Polish,
    /// Short preface-style summary.
    Summarize,
    /// Reformat with plain-text headings and spacing.
    Structure,
}

impl EnhanceAction {
    pub fn directive(&self) -> &'static str {
        match self {
            EnhanceAction::Polish => POLISH_DIRECTIVE,
            EnhanceAction::Summarize => SUMMARIZE_DIRECTIVE,
            EnhanceAction::Structure => STRUCTURE_DIRECTIVE,
        }
    }

    /// Final prompt: directive, blank line, then the untrimmed document.
    pub fn build_prompt(&self, document: &str) -> String {
        format!("{}\n\n{}", self.directive(), document)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backend trait
// ────────────────────────────────────────────────────────────────────────────

/// The text-generation backend seam. Production uses `GeminiClient`; tests
/// substitute stubs to drive the state machine without a network.
#[async_trait]
pub trait TextEnhancer: Send + Sync {
    async fn enhance(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl TextEnhancer for GeminiClient {
    async fn enhance(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

/// How a trigger resolved. The editor state carries the same information in
/// its status; the outcome exists so callers can branch without matching on
/// status payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhanceOutcome {
    /// Backend replied; the document was replaced.
    Applied,
    /// Document was empty after trimming; nothing was sent.
    EmptyInput,
    /// A request is already in flight; this trigger was dropped.
    AlreadyRunning,
    /// Backend call failed; the document is untouched.
    ServiceFailed,
}

/// Runs one enhancement round trip against the editor state.
///
/// Guards first (empty document, request already in flight), then walks the
/// status machine: `Loading`, one backend call, then `Succeeded` or
/// `Failed`. The guards return without touching state or the backend.
pub async fn run_enhancement(
    state: &mut EditorState,
    action: EnhanceAction,
    enhancer: &dyn TextEnhancer,
) -> EnhanceOutcome {
    if state.document.trim().is_empty() {
        return EnhanceOutcome::EmptyInput;
    }
    if state.is_enhancing() {
        warn!("enhancement already in flight, dropping {action:?} trigger");
        return EnhanceOutcome::AlreadyRunning;
    }

    state.begin_enhancement();
    let prompt = action.build_prompt(&state.document);
    info!(
        "enhancing document ({:?}, {} chars)",
        action,
        state.document.chars().count()
    );

    match enhancer.enhance(&prompt).await {
        Ok(text) => {
            info!("enhancement applied ({} chars returned)", text.chars().count());
            state.complete_enhancement(text);
            EnhanceOutcome::Applied
        }
        Err(e) => {
            warn!("enhancement failed: {e}");
            state.fail_enhancement(ENHANCE_FAILURE_MESSAGE.to_string());
            EnhanceOutcome::ServiceFailed
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EnhanceStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Always replies with a fixed string; counts invocations.
    struct FixedEnhancer {
        reply: &'static str,
        calls: AtomicUsize,
    }

    impl FixedEnhancer {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextEnhancer for FixedEnhancer {
        async fn enhance(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    /// Always fails; counts invocations.
    struct FailingEnhancer {
        calls: AtomicUsize,
    }

    impl FailingEnhancer {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextEnhancer for FailingEnhancer {
        async fn enhance(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmError::EmptyContent)
        }
    }

    /// Records every prompt it receives.
    struct RecordingEnhancer {
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingEnhancer {
        fn new() -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextEnhancer for RecordingEnhancer {
        async fn enhance(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("ok".to_string())
        }
    }

    fn make_state(document: &str) -> EditorState {
        EditorState::with_document(document)
    }

    #[tokio::test]
    async fn test_success_replaces_document_wholesale() {
        let mut state = make_state("original draft");
        let enhancer = FixedEnhancer::new("REWRITTEN");

        let outcome = run_enhancement(&mut state, EnhanceAction::Polish, &enhancer).await;

        assert_eq!(outcome, EnhanceOutcome::Applied);
        assert_eq!(state.document, "REWRITTEN");
        assert_eq!(
            state.enhance,
            EnhanceStatus::Succeeded("REWRITTEN".to_string())
        );
        assert_eq!(enhancer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_preserves_document_and_sets_message() {
        let mut state = make_state("original draft");
        let enhancer = FailingEnhancer::new();

        let outcome = run_enhancement(&mut state, EnhanceAction::Summarize, &enhancer).await;

        assert_eq!(outcome, EnhanceOutcome::ServiceFailed);
        assert_eq!(
            state.document, "original draft",
            "a failed request must leave the document byte-identical"
        );
        match &state.enhance {
            EnhanceStatus::Failed(message) => {
                assert!(!message.is_empty(), "failure message must be user-facing");
                assert_eq!(message, ENHANCE_FAILURE_MESSAGE);
            }
            other => panic!("expected Failed status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_document_never_reaches_backend() {
        let mut state = make_state("   \n\t  ");
        let enhancer = FixedEnhancer::new("REWRITTEN");

        let outcome = run_enhancement(&mut state, EnhanceAction::Polish, &enhancer).await;

        assert_eq!(outcome, EnhanceOutcome::EmptyInput);
        assert_eq!(enhancer.call_count(), 0, "guard must fire before the call");
        assert_eq!(state.enhance, EnhanceStatus::Idle, "state must be untouched");
        assert_eq!(state.document, "   \n\t  ");
    }

    #[tokio::test]
    async fn test_trigger_while_loading_is_rejected() {
        let mut state = make_state("draft");
        state.begin_enhancement();
        let enhancer = FixedEnhancer::new("REWRITTEN");

        let outcome = run_enhancement(&mut state, EnhanceAction::Structure, &enhancer).await;

        assert_eq!(outcome, EnhanceOutcome::AlreadyRunning);
        assert_eq!(enhancer.call_count(), 0, "no second request may be issued");
        assert!(state.is_enhancing(), "the in-flight status must stand");
        assert_eq!(state.document, "draft");
    }

    #[tokio::test]
    async fn test_retrigger_after_failure_is_allowed() {
        let mut state = make_state("draft");
        let failing = FailingEnhancer::new();
        let fixed = FixedEnhancer::new("REWRITTEN");

        run_enhancement(&mut state, EnhanceAction::Polish, &failing).await;
        let outcome = run_enhancement(&mut state, EnhanceAction::Polish, &fixed).await;

        assert_eq!(outcome, EnhanceOutcome::Applied);
        assert_eq!(state.document, "REWRITTEN");
    }

    #[tokio::test]
    async fn test_prompt_carries_directive_and_document() {
        let mut state = make_state("the raw document body");
        let enhancer = RecordingEnhancer::new();

        run_enhancement(&mut state, EnhanceAction::Summarize, &enhancer).await;

        let prompts = enhancer.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with(SUMMARIZE_DIRECTIVE));
        assert!(prompts[0].ends_with("the raw document body"));
        assert!(
            prompts[0].contains("\n\n"),
            "directive and document are separated by a blank line"
        );
    }

    #[test]
    fn test_build_prompt_shape() {
        let prompt = EnhanceAction::Polish.build_prompt("body");
        assert_eq!(prompt, format!("{POLISH_DIRECTIVE}\n\nbody"));
    }

    #[test]
    fn test_directives_are_distinct() {
        let directives = [
            EnhanceAction::Polish.directive(),
            EnhanceAction::Summarize.directive(),
            EnhanceAction::Structure.directive(),
        ];
        assert_ne!(directives[0], directives[1]);
        assert_ne!(directives[1], directives[2]);
        assert_ne!(directives[0], directives[2]);
    }
}
