// Export surface: the layout-to-PDF renderer plus the download-shaped
// orchestration (fixed artifact name, empty-document no-op).

pub mod pdf;

pub use pdf::render_document;

use tracing::info;

use crate::layout::layout_document;
use crate::state::EditorState;

/// Every export lands under this name, matching the editor's download
/// convention.
pub const EXPORT_FILE_NAME: &str = "DocuGen-Export.pdf";

/// Document title stamped into the PDF metadata.
const EXPORT_DOC_TITLE: &str = "DocuGen Export";

/// A finished export: the bytes plus the layout numbers callers report.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub line_count: usize,
}

/// Lays out and renders the session's document.
///
/// Returns `None` when the document is empty after trimming: an export of
/// nothing is silently skipped, it is not an error.
pub fn export_pdf(state: &EditorState) -> Option<ExportArtifact> {
    if state.document.trim().is_empty() {
        info!("skipping export, document is empty");
        return None;
    }

    let layout = layout_document(&state.document, &state.config);
    let bytes = render_document(&layout, &state.config, EXPORT_DOC_TITLE);
    info!(
        "export rendered: {} pages, {} lines, {} bytes",
        layout.page_count,
        layout.lines.len(),
        bytes.len()
    );

    Some(ExportArtifact {
        bytes,
        page_count: layout.page_count,
        line_count: layout.lines.len(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
