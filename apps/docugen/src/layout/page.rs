//! Page geometry: paper sizes, orientation, and the user-facing page
//! configuration the layout pass consumes.
//!
//! All distances are millimeters unless the name says otherwise. Consumers
//! must not assume a config arrived validated; `clamped()` pulls every
//! numeric field back into the editor's control ranges before layout math.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFamily;

/// Vertical distance one laid-out line occupies, in mm per point of font
/// size, before the line-height multiplier.
///
/// This is the rounded factor the export renderer's vertical rhythm was
/// calibrated against, not the exact pt-to-mm conversion (0.352778) used for
/// width measurement. Changing it reflows every page break, so it stays a
/// named constant rather than being derived.
pub const LINE_ADVANCE_MM_PER_PT: f32 = 0.35;

/// Editor control ranges. Values outside these are clamped, never rejected.
pub const MIN_FONT_SIZE_PT: f32 = 8.0;
pub const MAX_FONT_SIZE_PT: f32 = 36.0;
pub const MIN_LINE_HEIGHT: f32 = 1.0;
pub const MAX_LINE_HEIGHT: f32 = 3.0;
pub const MIN_MARGIN_MM: f32 = 5.0;
pub const MAX_MARGIN_MM: f32 = 60.0;

/// Floor for the usable text width. Within the control ranges above the
/// floor is never hit (worst case leaves ~90mm); it exists so degenerate
/// inputs degrade to narrow pages instead of a zero or negative wrap width.
pub const MIN_CONTENT_WIDTH_MM: f32 = 1.0;

// ────────────────────────────────────────────────────────────────────────────
// Paper size and orientation
// ────────────────────────────────────────────────────────────────────────────

/// Supported paper stocks with their portrait dimensions in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// ISO A4: 210 x 297 mm.
    #[default]
    A4,
    /// US Letter: 215.9 x 279.4 mm (8.5" x 11").
    Letter,
    /// US Legal: 215.9 x 355.6 mm (8.5" x 14").
    Legal,
}

impl PaperSize {
    /// Portrait (width, height) in millimeters.
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    /// Swaps the paper's width and height.
    Landscape,
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for a document export.
///
/// The margin is uniform on all four sides. `line_height` is a unitless
/// multiplier on the per-point line advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub font_family: FontFamily,
    pub font_size_pt: f32,
    pub line_height: f32,
    pub margin_mm: f32,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            font_family: FontFamily::Helvetica,
            font_size_pt: 12.0,
            line_height: 1.5,
            margin_mm: 20.0,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl PageConfig {
    /// Effective page width after applying orientation.
    pub fn page_width_mm(&self) -> f32 {
        let (w, h) = self.paper_size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => w,
            Orientation::Landscape => h,
        }
    }

    /// Effective page height after applying orientation.
    pub fn page_height_mm(&self) -> f32 {
        let (w, h) = self.paper_size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => h,
            Orientation::Landscape => w,
        }
    }

    /// Usable text width: page width minus both margins, floored at
    /// `MIN_CONTENT_WIDTH_MM`.
    pub fn content_width_mm(&self) -> f32 {
        (self.page_width_mm() - 2.0 * self.margin_mm).max(MIN_CONTENT_WIDTH_MM)
    }

    /// Vertical distance the cursor moves per laid-out line:
    /// `font_size x 0.35 x line_height` millimeters.
    pub fn line_advance_mm(&self) -> f32 {
        self.font_size_pt * LINE_ADVANCE_MM_PER_PT * self.line_height
    }

    /// Returns a copy with every numeric field clamped into the editor's
    /// control ranges. Layout entry points call this so out-of-range configs
    /// degrade instead of producing negative widths or zero advances.
    pub fn clamped(&self) -> Self {
        PageConfig {
            font_family: self.font_family,
            font_size_pt: self.font_size_pt.clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT),
            line_height: self.line_height.clamp(MIN_LINE_HEIGHT, MAX_LINE_HEIGHT),
            margin_mm: self.margin_mm.clamp(MIN_MARGIN_MM, MAX_MARGIN_MM),
            paper_size: self.paper_size,
            orientation: self.orientation,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_editor_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.font_family, FontFamily::Helvetica);
        assert!((config.font_size_pt - 12.0).abs() < 1e-6);
        assert!((config.line_height - 1.5).abs() < 1e-6);
        assert!((config.margin_mm - 20.0).abs() < 1e-6);
        assert_eq!(config.paper_size, PaperSize::A4);
        assert_eq!(config.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_paper_dimension_table() {
        assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
        assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
        assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));
    }

    #[test]
    fn test_landscape_swaps_axes() {
        let portrait = PageConfig::default();
        let landscape = PageConfig {
            orientation: Orientation::Landscape,
            ..PageConfig::default()
        };
        assert_eq!(portrait.page_width_mm(), landscape.page_height_mm());
        assert_eq!(portrait.page_height_mm(), landscape.page_width_mm());
    }

    #[test]
    fn test_content_width_subtracts_both_margins() {
        let config = PageConfig::default();
        // A4 portrait at 20mm margins: 210 - 40 = 170
        assert!((config.content_width_mm() - 170.0).abs() < 1e-4);
    }

    #[test]
    fn test_content_width_floored_for_degenerate_margin() {
        let config = PageConfig {
            margin_mm: 300.0,
            ..PageConfig::default()
        };
        // Unclamped margin would leave a negative width; the floor holds
        assert!(config.content_width_mm() >= MIN_CONTENT_WIDTH_MM);
    }

    #[test]
    fn test_line_advance_formula() {
        let config = PageConfig::default();
        // 12pt x 0.35 x 1.5 = 6.3mm
        assert!(
            (config.line_advance_mm() - 6.3).abs() < 1e-4,
            "default advance should be 6.3mm, got {}",
            config.line_advance_mm()
        );
    }

    #[test]
    fn test_clamped_pulls_values_into_ranges() {
        let config = PageConfig {
            font_size_pt: 100.0,
            line_height: 0.2,
            margin_mm: -4.0,
            ..PageConfig::default()
        };
        let clamped = config.clamped();
        assert_eq!(clamped.font_size_pt, MAX_FONT_SIZE_PT);
        assert_eq!(clamped.line_height, MIN_LINE_HEIGHT);
        assert_eq!(clamped.margin_mm, MIN_MARGIN_MM);
    }

    #[test]
    fn test_clamped_is_identity_for_in_range_config() {
        let config = PageConfig::default();
        assert_eq!(config.clamped(), config);
    }

    #[test]
    fn test_clamped_content_area_always_positive() {
        // The extreme corner of the control ranges must still leave room for
        // text on every paper size
        for paper in [PaperSize::A4, PaperSize::Letter, PaperSize::Legal] {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let config = PageConfig {
                    font_size_pt: MAX_FONT_SIZE_PT,
                    line_height: MAX_LINE_HEIGHT,
                    margin_mm: MAX_MARGIN_MM,
                    paper_size: paper,
                    orientation,
                    ..PageConfig::default()
                }
                .clamped();
                assert!(
                    config.content_width_mm() > MIN_CONTENT_WIDTH_MM,
                    "{paper:?} {orientation:?} should keep usable width"
                );
                assert!(
                    config.page_height_mm() - 2.0 * config.margin_mm > config.line_advance_mm(),
                    "{paper:?} {orientation:?} should fit at least one line"
                );
            }
        }
    }
}
