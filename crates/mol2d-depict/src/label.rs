//! Label layout around an atom symbol
//!
//! Positions the primary element symbol and its annotations (implicit
//! hydrogens, hydrogen-count subscript, isotope superscript, charge) as
//! measured boxes in Y-up molecule coordinates. No outlines are produced
//! here; the converter turns the placed boxes into shapes.

use mol2d_geom::{Point2, Rect};
use mol2d_mol::Atom;

use crate::font::GlyphOutliner;
use crate::hydrogen::{HydrogenPosition, LabelAlignment};
use crate::model::{DepictionModel, LABEL_MARGIN};

/// What an auxiliary label box contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxKind {
    /// The "H" of an implicit-hydrogen label, primary font size
    Hydrogen,
    /// Hydrogen count subscript, small font size
    HydrogenCount,
    /// Isotope mass superscript, small font size
    MassNumber,
    /// Charge magnitude numeral, small font size
    ChargeCount,
    /// Charge sign glyph ("+" or the underscore-shaped minus), small size
    ChargeSign,
}

impl AuxKind {
    /// Whether this label renders at the small (sub/superscript) size
    pub fn is_small(&self) -> bool {
        !matches!(self, AuxKind::Hydrogen)
    }
}

/// One positioned auxiliary label
#[derive(Debug, Clone, PartialEq)]
pub struct AuxLabel {
    pub kind: AuxKind,
    pub text: String,
    /// Box in molecule space, glyph extents plus [`LABEL_MARGIN`] padding
    pub rect: Rect,
}

/// A fully placed atom label, ready for shape conversion
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    /// Primary symbol text
    pub text: String,
    /// Alignment of the symbol relative to the atom point
    pub alignment: LabelAlignment,
    /// Primary symbol box in molecule space (padded)
    pub rect: Rect,
    pub aux: Vec<AuxLabel>,
}

impl LabelPlacement {
    /// Glyph origin (lower-left, unpadded) of a padded label box
    pub fn glyph_origin(rect: &Rect) -> Point2 {
        Point2::new(rect.min_x + LABEL_MARGIN, rect.min_y + LABEL_MARGIN)
    }

    /// Union of the primary and auxiliary boxes
    pub fn bounds(&self) -> Rect {
        self.aux
            .iter()
            .fold(self.rect, |acc, aux| acc.union(aux.rect))
    }
}

/// Glyph extents plus the standard label padding
fn boxed(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Rect {
    Rect::from_origin(
        origin_x - LABEL_MARGIN,
        origin_y - LABEL_MARGIN,
        width + 2.0 * LABEL_MARGIN,
        height + 2.0 * LABEL_MARGIN,
    )
}

/// Lay out the symbol and annotations of one atom
///
/// `center` is the atom's 2D coordinate; callers guarantee it exists
/// (a missing coordinate is the fatal error of the render call and is
/// raised before layout).
pub fn place_label(
    atom: &Atom,
    center: Point2,
    position: HydrogenPosition,
    neighbor_count: usize,
    model: &DepictionModel,
    fonts: &dyn GlyphOutliner,
) -> LabelPlacement {
    let size = model.font_world_size();
    let small = model.small_font_world_size();

    let text = atom.element.symbol().to_string();
    let main = fonts.measure(&text, size);
    // glyph origin of the centered primary symbol
    let origin = Point2::new(center.x - main.width / 2.0, center.y - main.height / 2.0);

    let mut aux = Vec::new();

    // isotope superscript, upper-left of the symbol
    let mass_width = if atom.mass_number != 0 {
        let mass_text = atom.mass_number.to_string();
        let ext = fonts.measure(&mass_text, small);
        aux.push(AuxLabel {
            kind: AuxKind::MassNumber,
            text: mass_text,
            rect: boxed(
                origin.x - ext.width,
                origin.y + main.height - ext.height / 2.0,
                ext.width,
                ext.height,
            ),
        });
        ext.width
    } else {
        0.0
    };

    // implicit hydrogens: "H" plus an optional count subscript
    let hydrogens = atom.hydrogens();
    let mut hydrogen_right_width = 0.0;
    if hydrogens > 0 {
        let h_ext = fonts.measure("H", size);
        let count_ext = if hydrogens > 1 {
            fonts.measure(&hydrogens.to_string(), small)
        } else {
            Default::default()
        };

        let h_x = match position {
            // flush against the right edge of the symbol box
            HydrogenPosition::Right => origin.x + main.width,
            // clear of both the symbol and whichever superscript is wider
            HydrogenPosition::Left => {
                origin.x - h_ext.width - count_ext.width.max(mass_width)
            }
        };
        aux.push(AuxLabel {
            kind: AuxKind::Hydrogen,
            text: "H".to_string(),
            rect: boxed(h_x, origin.y, h_ext.width, h_ext.height),
        });

        if hydrogens > 1 {
            aux.push(AuxLabel {
                kind: AuxKind::HydrogenCount,
                text: hydrogens.to_string(),
                rect: boxed(
                    h_x + h_ext.width,
                    origin.y - count_ext.height / 2.0,
                    count_ext.width,
                    count_ext.height,
                ),
            });
        }

        if position == HydrogenPosition::Right {
            hydrogen_right_width = h_ext.width + count_ext.width;
        }
    }

    // charge, upper-right, pushed past a right-side hydrogen label
    if atom.charge != 0 {
        let magnitude = atom.charge.unsigned_abs();
        let sign = if atom.charge > 0 { "+" } else { "_" };
        let sign_ext = fonts.measure(sign, small);

        let mut x = origin.x + main.width + hydrogen_right_width;
        let y = origin.y + main.height - sign_ext.height / 2.0;

        if magnitude > 1 {
            let count_text = magnitude.to_string();
            let count_ext = fonts.measure(&count_text, small);
            aux.push(AuxLabel {
                kind: AuxKind::ChargeCount,
                text: count_text,
                rect: boxed(x, y, count_ext.width, count_ext.height),
            });
            x += count_ext.width;
        }
        aux.push(AuxLabel {
            kind: AuxKind::ChargeSign,
            text: sign.to_string(),
            rect: boxed(x, y, sign_ext.width, sign_ext.height),
        });
    }

    LabelPlacement {
        text,
        alignment: LabelAlignment::of(position, neighbor_count),
        rect: boxed(origin.x, origin.y, main.width, main.height),
        aux,
    }
}
