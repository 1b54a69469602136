//! PDF byte production: turns a placement plan into a document using the
//! builtin standard-14 fonts (no embedding, no subsetting).
//!
//! The layout pass hands over fully wrapped lines with top-origin baseline
//! offsets; this module only converts coordinates and writes glyphs. It
//! must never re-wrap or re-measure text, or the preview and the export
//! would disagree.

use printpdf::*;

use crate::layout::{FontFamily, LayoutResult, PageConfig};

/// Millimeters to points (inverse of the width-measurement factor).
const MM_TO_PT: f32 = 72.0 / 25.4;

/// Maps an export font family onto its builtin standard-14 font.
fn builtin_font(family: FontFamily) -> BuiltinFont {
    match family {
        FontFamily::Helvetica => BuiltinFont::Helvetica,
        FontFamily::Times => BuiltinFont::TimesRoman,
        FontFamily::Courier => BuiltinFont::Courier,
    }
}

/// Renders a placement plan into PDF bytes.
///
/// One output page per layout page. A zero-page plan still yields a single
/// blank page so the bytes are always a well-formed PDF; callers gate the
/// empty-document no-op before rendering.
pub fn render_document(layout: &LayoutResult, config: &PageConfig, title: &str) -> Vec<u8> {
    let config = config.clamped();
    let page_w = Mm(config.page_width_mm());
    let page_h = Mm(config.page_height_mm());
    let page_height_pt = config.page_height_mm() * MM_TO_PT;

    let font = builtin_font(config.font_family);
    let font_size = Pt(config.font_size_pt);
    let line_height = Pt(config.line_advance_mm() * MM_TO_PT);
    let margin_x = Pt(config.margin_mm * MM_TO_PT);

    let mut doc = PdfDocument::new(title);
    let mut pages = Vec::new();

    for page_index in 0..layout.page_count {
        let mut ops = Vec::new();

        for line in layout.lines_on_page(page_index) {
            if line.text.is_empty() {
                continue;
            }
            // Layout offsets are baselines from the top edge; PDF origin is
            // bottom-left
            let text_y = page_height_pt - line.y_offset_mm * MM_TO_PT;

            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: Point {
                    x: margin_x,
                    y: Pt(text_y),
                },
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                size: font_size,
                font,
            });
            ops.push(Op::SetLineHeight { lh: line_height });
            ops.push(Op::SetFillColor {
                col: Color::Rgb(Rgb {
                    r: 0.0,
                    g: 0.0,
                    b: 0.0,
                    icc_profile: None,
                }),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(to_winlatin(&line.text))],
                font,
            });
            ops.push(Op::EndTextSection);
        }

        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    // Keep the file well-formed even for an empty plan.
    if pages.is_empty() {
        pages.push(PdfPage::new(page_w, page_h, Vec::new()));
    }

    doc.with_pages(pages);
    doc.save(&PdfSaveOptions::default(), &mut Vec::new())
}

/// Convert a UTF-8 string to raw Windows-1252 bytes wrapped in a String so
/// printpdf writes them unchanged into the stream (builtin fonts use
/// WinAnsiEncoding, one byte per glyph 0x00-0xFF).
fn to_winlatin(s: &str) -> String {
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80, // euro
            '\u{201A}' => 0x82, // single low-9 quote
            '\u{201E}' => 0x84, // double low-9 quote
            '\u{2026}' => 0x85, // ellipsis
            '\u{2018}' => 0x91, // left single quote
            '\u{2019}' => 0x92, // right single quote
            '\u{201C}' => 0x93, // left double quote
            '\u{201D}' => 0x94, // right double quote
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en-dash
            '\u{2014}' => 0x97, // em-dash
            '\u{2122}' => 0x99, // trademark
            '\u{00A0}' => 0x20, // non-breaking space -> space
            c if (c as u32) < 256 => c as u8,
            _ => b'?',
        })
        .collect();
    // SAFETY: intentionally non-UTF-8 for the 0x80-0x9F range; printpdf
    // passes these bytes straight through, decoded by WinAnsiEncoding.
    #[allow(unsafe_code)]
    unsafe {
        String::from_utf8_unchecked(bytes)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_document;

    fn make_config() -> PageConfig {
        PageConfig::default()
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let config = make_config();
        let layout = layout_document("Hello PDF world.", &config);
        let bytes = render_document(&layout, &config, "Test Document");
        assert!(bytes.starts_with(b"%PDF-"), "output must carry a PDF header");
        assert!(bytes.len() > 200, "a one-line document is not this small");
    }

    #[test]
    fn test_render_empty_plan_yields_valid_pdf() {
        let config = make_config();
        let layout = LayoutResult::default();
        let bytes = render_document(&layout, &config, "Empty");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_multi_page_plan_renders() {
        let config = PageConfig {
            font_size_pt: 20.0,
            line_height: 2.0,
            ..PageConfig::default()
        };
        let text = vec!["row of words"; 60].join("\n");
        let layout = layout_document(&text, &config);
        assert!(layout.page_count >= 2);
        let bytes = render_document(&layout, &config, "Multi");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_builtin_font_mapping() {
        assert!(matches!(
            builtin_font(FontFamily::Helvetica),
            BuiltinFont::Helvetica
        ));
        assert!(matches!(
            builtin_font(FontFamily::Times),
            BuiltinFont::TimesRoman
        ));
        assert!(matches!(
            builtin_font(FontFamily::Courier),
            BuiltinFont::Courier
        ));
    }

    #[test]
    fn test_winlatin_passthrough_ascii() {
        assert_eq!(to_winlatin("plain ASCII 123").as_bytes(), b"plain ASCII 123");
    }

    #[test]
    fn test_winlatin_maps_typographic_punctuation() {
        assert_eq!(to_winlatin("\u{2019}").as_bytes(), &[0x92]);
        assert_eq!(to_winlatin("\u{2014}").as_bytes(), &[0x97]);
        assert_eq!(to_winlatin("\u{2022}").as_bytes(), &[0x95]);
    }

    #[test]
    fn test_winlatin_unmappable_becomes_question_mark() {
        assert_eq!(to_winlatin("\u{4E16}").as_bytes(), b"?");
    }
}
