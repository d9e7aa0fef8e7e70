//! Hydrogen label side and symbol alignment
//!
//! The implicit-hydrogen label goes on whichever side of the atom is free
//! of bonds. The side in turn fixes the symbol alignment for terminal
//! atoms: a "Cl" at the end of a bond keeps its "C" adjacent to the bond,
//! so the symbol right-aligns exactly when the hydrogens sit on the left.

use mol2d_geom::Vec2;
use mol2d_mol::{AtomIndex, Molecule};

/// Which side of the symbol the implicit-hydrogen label occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrogenPosition {
    Left,
    Right,
}

impl HydrogenPosition {
    /// Compute the hydrogen side from the bond geometry around an atom
    ///
    /// Sums the unit vectors toward each positioned neighbor: when the
    /// neighbors net to the right, the free space (and the label) is on
    /// the left. Atoms with no positioned neighbors default to Right.
    pub fn of(molecule: &Molecule, atom: AtomIndex) -> HydrogenPosition {
        let Some(center) = molecule.coord(atom) else {
            return HydrogenPosition::Right;
        };
        let mut sum = Vec2::new(0.0, 0.0);
        for neighbor in molecule.neighbors(atom) {
            if let Some(dir) = molecule
                .coord(neighbor)
                .and_then(|p| (p - center).normalized())
            {
                sum = sum + dir;
            }
        }
        if sum.x > 1e-9 {
            HydrogenPosition::Left
        } else {
            HydrogenPosition::Right
        }
    }
}

/// Horizontal alignment of a placed symbol relative to its atom point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlignment {
    Left,
    Right,
    Center,
}

impl LabelAlignment {
    /// Alignment as a pure function of hydrogen side and neighbor count
    ///
    /// Terminal atoms (exactly one neighbor) align away from the
    /// hydrogen label; all other atoms center on the atom point.
    pub fn of(position: HydrogenPosition, neighbor_count: usize) -> LabelAlignment {
        if neighbor_count != 1 {
            return LabelAlignment::Center;
        }
        match position {
            HydrogenPosition::Left => LabelAlignment::Right,
            HydrogenPosition::Right => LabelAlignment::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mol2d_mol::{Atom, BondOrder, Element, MoleculeBuilder};

    #[test]
    fn test_position_from_neighbor_side() {
        // the oxygen's neighbor nets to the right, so hydrogens go left
        let mol = MoleculeBuilder::new("m")
            .atom(Atom::new(Element::Oxygen), 0.0, 0.0)
            .atom(Atom::new(Element::Carbon), 1.0, 0.0)
            .bond(0, 1, BondOrder::Single)
            .build();
        assert_eq!(
            HydrogenPosition::of(&mol, AtomIndex(0)),
            HydrogenPosition::Left
        );
        // the carbon's neighbor is to its left, so hydrogens go right
        assert_eq!(
            HydrogenPosition::of(&mol, AtomIndex(1)),
            HydrogenPosition::Right
        );
    }

    #[test]
    fn test_isolated_atom_defaults_right() {
        let mol = MoleculeBuilder::new("m")
            .atom(Atom::new(Element::Oxygen), 0.0, 0.0)
            .build();
        assert_eq!(
            HydrogenPosition::of(&mol, AtomIndex(0)),
            HydrogenPosition::Right
        );
    }

    #[test]
    fn test_vertical_neighbor_defaults_right() {
        let mol = MoleculeBuilder::new("m")
            .atom(Atom::new(Element::Oxygen), 0.0, 0.0)
            .atom(Atom::new(Element::Carbon), 0.0, 1.0)
            .bond(0, 1, BondOrder::Single)
            .build();
        assert_eq!(
            HydrogenPosition::of(&mol, AtomIndex(0)),
            HydrogenPosition::Right
        );
    }

    #[test]
    fn test_alignment_rule() {
        assert_eq!(
            LabelAlignment::of(HydrogenPosition::Left, 1),
            LabelAlignment::Right
        );
        assert_eq!(
            LabelAlignment::of(HydrogenPosition::Right, 1),
            LabelAlignment::Left
        );
        assert_eq!(
            LabelAlignment::of(HydrogenPosition::Left, 0),
            LabelAlignment::Center
        );
        assert_eq!(
            LabelAlignment::of(HydrogenPosition::Right, 3),
            LabelAlignment::Center
        );
    }
}
