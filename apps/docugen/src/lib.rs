//! DocuGen engine: plain-text editing state, deterministic pagination, AI
//! text enhancement, and PDF export.
//!
//! The crate splits along one seam: everything about putting words on pages
//! (`layout`, `render`) is pure and synchronous, while everything about
//! rewriting words (`llm_client`, `enhance`) is async and fallible. The
//! `state` module carries the session both sides operate on, and the
//! `docugen` binary wires the pieces to a command line.

pub mod config;
pub mod enhance;
pub mod errors;
pub mod layout;
pub mod llm_client;
pub mod render;
pub mod state;

pub use enhance::{run_enhancement, EnhanceAction, EnhanceOutcome, TextEnhancer};
pub use errors::EngineError;
pub use layout::{
    layout_document, FontFamily, LayoutResult, LineInstruction, Orientation, PageConfig, PaperSize,
};
pub use llm_client::GeminiClient;
pub use render::{export_pdf, ExportArtifact, EXPORT_FILE_NAME};
pub use state::{DocumentStats, EditorState, EnhanceStatus};
