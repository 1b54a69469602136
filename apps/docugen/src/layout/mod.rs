// Layout engine: font measurement, greedy word wrap, pagination cursor walk.
// The whole pass is pure and synchronous; identical (text, config) inputs
// must produce identical placement output.

pub mod font_metrics;
pub mod page;
pub mod paginate;
pub mod wrap;

// Re-export the public API consumed by other modules (render, state, CLI).
pub use font_metrics::{get_metrics, FontFamily, FontMetricTable, PT_TO_MM};
pub use page::{Orientation, PageConfig, PaperSize, LINE_ADVANCE_MM_PER_PT};
pub use paginate::{layout_document, LayoutResult, LineInstruction};
pub use wrap::wrap_text;
