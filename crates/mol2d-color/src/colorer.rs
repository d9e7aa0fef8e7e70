//! Atom coloring schemes for 2D structure diagrams
//!
//! Unlike 3D space-fill palettes, 2D diagrams draw on a white page, so the
//! default palette keeps carbon and hydrogen at the foreground color and
//! saturates only the heteroatoms.

use mol2d_mol::{Atom, Element};

use crate::color::Color;

/// Maps atoms to label colors
pub trait AtomColorer {
    /// The color used for the atom's symbol and annotations
    fn color_of(&self, atom: &Atom) -> Color;
}

/// CPK-style palette adjusted for on-page 2D depiction
///
/// Carbon is drawn in the foreground color rather than gray; gray carbon
/// skeletons are unreadable at typical diagram line widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cpk2dColors;

impl AtomColorer for Cpk2dColors {
    fn color_of(&self, atom: &Atom) -> Color {
        if atom.kind.is_pseudo() {
            return Color::BLACK;
        }
        match atom.element {
            Element::Hydrogen | Element::Carbon => Color::BLACK,
            Element::Nitrogen => Color::from_rgb8(48, 80, 248),
            Element::Oxygen => Color::from_rgb8(255, 13, 13),
            Element::Fluorine => Color::from_rgb8(31, 179, 31),
            Element::Chlorine => Color::from_rgb8(31, 240, 31),
            Element::Bromine => Color::from_rgb8(166, 41, 41),
            Element::Iodine => Color::from_rgb8(148, 0, 148),
            Element::Phosphorus => Color::from_rgb8(255, 128, 0),
            Element::Sulfur => Color::from_rgb8(199, 154, 0),
            Element::Boron => Color::from_rgb8(255, 181, 181),
            Element::Silicon => Color::from_rgb8(240, 200, 160),
            Element::Sodium | Element::Potassium => Color::from_rgb8(103, 57, 244),
            Element::Magnesium | Element::Calcium => Color::from_rgb8(61, 166, 0),
            Element::Iron => Color::from_rgb8(224, 102, 51),
            Element::Copper => Color::from_rgb8(199, 128, 51),
            Element::Zinc => Color::from_rgb8(125, 128, 176),
            Element::Selenium => Color::from_rgb8(255, 161, 0),
            Element::Unknown => Color::MAGENTA,
        }
    }
}

/// A single color for every atom
#[derive(Debug, Clone, Copy)]
pub struct UniformColors(pub Color);

impl AtomColorer for UniformColors {
    fn color_of(&self, _atom: &Atom) -> Color {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpk_2d_heteroatoms() {
        let colorer = Cpk2dColors;
        assert_eq!(colorer.color_of(&Atom::new(Element::Carbon)), Color::BLACK);
        let oxygen = colorer.color_of(&Atom::new(Element::Oxygen));
        assert!(oxygen.r > oxygen.g && oxygen.r > oxygen.b);
        let nitrogen = colorer.color_of(&Atom::new(Element::Nitrogen));
        assert!(nitrogen.b > nitrogen.r && nitrogen.b > nitrogen.g);
    }

    #[test]
    fn test_pseudo_uses_foreground() {
        assert_eq!(Cpk2dColors.color_of(&Atom::pseudo("R1")), Color::BLACK);
    }

    #[test]
    fn test_uniform() {
        let colorer = UniformColors(Color::RED);
        assert_eq!(colorer.color_of(&Atom::new(Element::Oxygen)), Color::RED);
    }
}
