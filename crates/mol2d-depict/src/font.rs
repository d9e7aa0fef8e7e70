//! Glyph outline seam
//!
//! The engine never rasterizes text. It measures label runs and asks a
//! [`GlyphOutliner`] for vector outlines; a host plugs in a real font
//! backend (e.g. a TrueType outliner) behind the trait. [`BoxGlyphs`] is
//! the built-in fallback with fixed metrics, which keeps layout fully
//! deterministic in tests.

use mol2d_geom::Point2;
use mol2d_scene::Path;

/// Measured extents of a text run, in the same units as the font size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

/// Converts text runs to vector outlines
///
/// `origin` is the lower-left corner of the run in Y-up world coordinates.
pub trait GlyphOutliner {
    /// Measure a text run at the given size
    fn measure(&self, text: &str, size: f64) -> TextExtents;

    /// Produce outline paths for a text run at the given size and origin
    fn outline(&self, text: &str, size: f64, origin: Point2) -> Path;
}

/// Fixed-metric fallback outliner
///
/// Every glyph is a box: advance 0.6 of the font size, cap height 0.7.
/// Close enough to typical sans-serif metrics for layout to look right,
/// and exact enough for tests to assert on.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxGlyphs;

impl BoxGlyphs {
    const ADVANCE_RATIO: f64 = 0.6;
    const HEIGHT_RATIO: f64 = 0.7;
}

impl GlyphOutliner for BoxGlyphs {
    fn measure(&self, text: &str, size: f64) -> TextExtents {
        let chars = text.chars().count() as f64;
        TextExtents {
            width: chars * Self::ADVANCE_RATIO * size,
            height: Self::HEIGHT_RATIO * size,
        }
    }

    fn outline(&self, text: &str, size: f64, origin: Point2) -> Path {
        let advance = Self::ADVANCE_RATIO * size;
        let height = Self::HEIGHT_RATIO * size;
        let mut path = Path::new();
        for (i, _) in text.chars().enumerate() {
            let x = origin.x + i as f64 * advance;
            path.move_to(Point2::new(x, origin.y))
                .line_to(Point2::new(x + advance, origin.y))
                .line_to(Point2::new(x + advance, origin.y + height))
                .line_to(Point2::new(x, origin.y + height))
                .close();
        }
        path
    }
}
