//! Depiction configuration
//!
//! A [`DepictionModel`] is a read-only snapshot of every knob the engine
//! reads during one render call. Hosts hold one, mutate it between calls,
//! and pass it by reference; the engine never writes to it.
//!
//! The numeric constants below are empirically tuned values carried over
//! unchanged from long-standing depiction practice. They have no analytic
//! derivation; recalibrate against a visual reference corpus, not on
//! paper.

use serde::{Deserialize, Serialize};

use mol2d_color::Color;

/// Padding around label boxes, in world units
pub const LABEL_MARGIN: f64 = 0.03;

/// Perpendicular offset of each double-bond line from the bond axis
pub const DOUBLE_BOND_OFFSET: f64 = 0.1;

/// Distance an in-ring inner bond is pulled toward the ring centroid
pub const INNER_BOND_INSET: f64 = 0.15;

/// Aromatic annulus diameter as a fraction of the ring bounding box
pub const ANNULUS_SCALE: f64 = 0.7;

/// Aromatic annulus thickness as a fraction of the ring bounding box
pub const ANNULUS_WIDTH_FRACTION: f64 = 0.05;

/// Subscript/superscript size relative to the primary font size
pub const SMALL_FONT_RATIO: f64 = 0.4;

/// Divisor mapping font point size to world-unit glyph size
pub const FONT_WORLD_SCALE: f64 = 25.0;

/// Side length of the square mark behind a highlighted atom
pub const ATOM_MARK_SIZE: f64 = 0.8;

/// World-unit margin added around the atom hull so labels are not clipped
pub const BOUNDS_MARGIN: f64 = 1.0;

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// Font selection for atom symbols
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    /// Point size; divided by [`FONT_WORLD_SCALE`] to get world units
    pub size: f64,
    pub style: FontStyle,
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec {
            family: "Arial".to_string(),
            size: 16.0,
            style: FontStyle::Normal,
        }
    }
}

/// Configuration snapshot for one render call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepictionModel {
    /// Font for atom symbols
    pub font: FontSpec,
    /// Extra zoom applied on top of the fit scale
    pub zoom: f64,
    /// View margin as a fraction of the view extent, per side
    pub margin: f64,
    /// Bond line width, in model units
    pub bond_width: f64,
    /// Reference bond length, in model units
    pub bond_length: f64,
    /// Gap between the lines of a triple bond, in model units
    pub bond_distance: f64,
    /// Draw aromatic rings as annuli instead of alternating bonds
    pub show_aromaticity: bool,
    /// Draw bonds to explicit hydrogen atoms
    pub show_explicit_hydrogens: bool,
    /// Draw symbols on terminal carbons
    pub show_end_carbons: bool,
    /// Force symbols on every carbon (Kekulé display)
    pub kekule: bool,
    /// Compact display; highlight marks are outlined instead of filled
    pub compact: bool,
    /// Page background color (also fills label backgrounds)
    pub background: Color,
    /// Default drawing color
    pub foreground: Color,
    /// Color for selected/highlighted elements
    pub highlight: Color,
    /// Color for hover feedback
    pub hover: Color,
}

impl Default for DepictionModel {
    fn default() -> Self {
        DepictionModel {
            font: FontSpec::default(),
            zoom: 1.0,
            margin: 0.05,
            bond_width: 1.0,
            bond_length: 30.0,
            bond_distance: 6.0,
            show_aromaticity: true,
            show_explicit_hydrogens: true,
            show_end_carbons: false,
            kekule: false,
            compact: false,
            background: Color::WHITE,
            foreground: Color::BLACK,
            highlight: Color::from_rgb8(255, 102, 102),
            hover: Color::LIGHT_GRAY,
        }
    }
}

impl DepictionModel {
    /// Stroke width in world units
    pub fn stroke_width(&self) -> f64 {
        self.bond_width / self.bond_length
    }

    /// Half-width of a wedge triangle at its wide end, in world units
    pub fn wedge_width(&self) -> f64 {
        self.bond_width / 10.0
    }

    /// Tick spacing unit for dashed wedges, in world units
    pub fn dash_width(&self) -> f64 {
        self.bond_width / 40.0
    }

    /// Perpendicular offset of the outer triple-bond lines
    pub fn triple_bond_offset(&self) -> f64 {
        (self.bond_width / 2.0 + self.bond_distance) / self.bond_length
    }

    /// Primary font size in world units
    pub fn font_world_size(&self) -> f64 {
        self.font.size / FONT_WORLD_SCALE
    }

    /// Subscript/superscript font size in world units
    pub fn small_font_world_size(&self) -> f64 {
        self.font_world_size() * SMALL_FONT_RATIO
    }

    /// Whether aromatic rings are drawn as annuli under this model
    pub fn aromatic_annuli(&self) -> bool {
        self.show_aromaticity && !self.kekule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_widths() {
        let model = DepictionModel::default();
        assert!((model.stroke_width() - 1.0 / 30.0).abs() < 1e-12);
        assert!((model.wedge_width() - 0.1).abs() < 1e-12);
        assert!((model.dash_width() - 0.025).abs() < 1e-12);
        assert!((model.triple_bond_offset() - 6.5 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_kekule_disables_annuli() {
        let mut model = DepictionModel::default();
        assert!(model.aromatic_annuli());
        model.kekule = true;
        assert!(!model.aromatic_annuli());
    }
}
