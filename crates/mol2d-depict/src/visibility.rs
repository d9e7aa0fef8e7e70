//! Symbol visibility policy
//!
//! Carbons in a skeletal diagram are implied by bond vertices; everything
//! else gets a drawn symbol. The rules here decide, per atom, whether the
//! symbol must render.

use log::warn;

use mol2d_mol::Atom;

use crate::model::DepictionModel;

/// Decide whether an atom's symbol must be drawn
///
/// `degree` is the number of bonds incident to the atom. An isotope
/// lookup failure (unknown element with a nonzero mass number) fails
/// open: the atom is not forced visible on isotope grounds.
pub fn symbol_visible(atom: &Atom, degree: usize, model: &DepictionModel) -> bool {
    if !atom.element.is_carbon() {
        return true;
    }
    if atom.charge != 0 {
        return true;
    }
    if degree == 0 {
        return true;
    }
    if atom.is_radical() {
        return true;
    }
    if isotope_mismatch(atom) {
        return true;
    }
    if model.show_end_carbons && degree == 1 {
        return true;
    }
    if atom.error_marker {
        return true;
    }
    model.kekule
}

fn isotope_mismatch(atom: &Atom) -> bool {
    if atom.mass_number == 0 {
        return false;
    }
    match atom.element.major_isotope_mass() {
        Some(major) => major != atom.mass_number,
        None => {
            warn!(
                "no major isotope known for {}; ignoring mass number {}",
                atom.element, atom.mass_number
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mol2d_mol::{AtomBuilder, Element};

    fn model() -> DepictionModel {
        DepictionModel::default()
    }

    #[test]
    fn test_heteroatoms_always_visible() {
        assert!(symbol_visible(&Atom::new(Element::Oxygen), 2, &model()));
        assert!(symbol_visible(&Atom::new(Element::Nitrogen), 3, &model()));
    }

    #[test]
    fn test_plain_carbon_hidden() {
        assert!(!symbol_visible(&Atom::new(Element::Carbon), 2, &model()));
    }

    #[test]
    fn test_carbon_special_cases() {
        // unbonded
        assert!(symbol_visible(&Atom::new(Element::Carbon), 0, &model()));
        // charged
        let charged = AtomBuilder::new(Element::Carbon).charge(-1).build();
        assert!(symbol_visible(&charged, 2, &model()));
        // radical
        let radical = AtomBuilder::new(Element::Carbon).radical_electrons(1).build();
        assert!(symbol_visible(&radical, 2, &model()));
        // isotope label (13C)
        let isotope = AtomBuilder::new(Element::Carbon).mass_number(13).build();
        assert!(symbol_visible(&isotope, 2, &model()));
        // natural-abundance mass number is not a mismatch
        let natural = AtomBuilder::new(Element::Carbon).mass_number(12).build();
        assert!(!symbol_visible(&natural, 2, &model()));
        // error marker
        let marked = AtomBuilder::new(Element::Carbon).error_marker(true).build();
        assert!(symbol_visible(&marked, 2, &model()));
    }

    #[test]
    fn test_display_options() {
        let mut m = model();
        assert!(!symbol_visible(&Atom::new(Element::Carbon), 1, &m));
        m.show_end_carbons = true;
        assert!(symbol_visible(&Atom::new(Element::Carbon), 1, &m));
        assert!(!symbol_visible(&Atom::new(Element::Carbon), 2, &m));
        m.kekule = true;
        assert!(symbol_visible(&Atom::new(Element::Carbon), 2, &m));
    }

    #[test]
    fn test_unknown_element_isotope_fails_open() {
        // Unknown has no major isotope; still visible because not carbon
        let atom = AtomBuilder::new(Element::Unknown).mass_number(99).build();
        assert!(symbol_visible(&atom, 1, &model()));
        // the mismatch itself resolves to false
        assert!(!super::isotope_mismatch(&atom));
    }
}
