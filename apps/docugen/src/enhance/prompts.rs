// Directive prompt constants for the enhancement actions.
// Each directive is prepended to the raw document text with a blank line
// between; see `EnhanceAction::build_prompt`.

/// Polish: professional rewrite that keeps the meaning intact.
pub const POLISH_DIRECTIVE: &str = "Rewrite the following text to be more professional, clear, \
    and grammatically correct while preserving the original meaning:";

/// Summarize: short preface-style condensation.
pub const SUMMARIZE_DIRECTIVE: &str = "Provide a concise summary of the following text suitable \
    for a document preface or short PDF report:";

/// Structure: headings and spacing only. The reply is rendered as plain
/// text in a PDF, so Markdown syntax would print literally.
pub const STRUCTURE_DIRECTIVE: &str = "Format the following text with clear headings, bullet \
    points where appropriate, and a logical structure for a PDF document. Do not use Markdown \
    characters that might look messy in a plain text PDF, just use spacing and standard \
    capitalization for headers:";
