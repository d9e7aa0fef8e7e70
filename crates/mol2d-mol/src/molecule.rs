//! Molecule container
//!
//! Atoms and bonds in flat arrays, bonds referencing atoms by index, with
//! one optional 2D coordinate per atom. Connectivity queries are linear
//! scans; molecules this engine depicts are small enough that an adjacency
//! index would not pay for itself.

use mol2d_geom::{Line, Point2, Rect};

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::error::{MolError, MolResult};
use crate::index::{AtomIndex, BondIndex};

/// A molecular graph with 2D coordinates
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    coords: Vec<Option<Point2>>,
}

impl Molecule {
    /// Create an empty molecule
    pub fn new(name: impl Into<String>) -> Self {
        Molecule {
            name: name.into(),
            atoms: Vec::new(),
            bonds: Vec::new(),
            coords: Vec::new(),
        }
    }

    /// Molecule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of atoms
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds
    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Add an atom without coordinates
    pub fn add_atom(&mut self, atom: Atom) -> AtomIndex {
        self.atoms.push(atom);
        self.coords.push(None);
        AtomIndex(self.atoms.len() as u32 - 1)
    }

    /// Add an atom at the given 2D position
    pub fn add_atom_at(&mut self, atom: Atom, position: Point2) -> AtomIndex {
        let index = self.add_atom(atom);
        self.coords[index.as_usize()] = Some(position);
        index
    }

    /// Set the 2D coordinate of an atom
    pub fn set_coord(&mut self, atom: AtomIndex, position: Point2) -> MolResult<()> {
        let slot = self
            .coords
            .get_mut(atom.as_usize())
            .ok_or(MolError::AtomIndexOutOfBounds(atom.0, self.atoms.len()))?;
        *slot = Some(position);
        Ok(())
    }

    /// Add a bond between two existing atoms
    pub fn add_bond(
        &mut self,
        atom1: AtomIndex,
        atom2: AtomIndex,
        order: BondOrder,
    ) -> MolResult<BondIndex> {
        if atom1 == atom2 {
            return Err(MolError::InvalidBond(atom1.0, atom2.0));
        }
        for atom in [atom1, atom2] {
            if atom.as_usize() >= self.atoms.len() {
                return Err(MolError::AtomIndexOutOfBounds(atom.0, self.atoms.len()));
            }
        }
        if self
            .bonds
            .iter()
            .any(|b| b.involves(atom1) && b.involves(atom2))
        {
            return Err(MolError::DuplicateBond(atom1.0, atom2.0));
        }
        self.bonds.push(Bond::new(atom1, atom2, order));
        Ok(BondIndex(self.bonds.len() as u32 - 1))
    }

    /// Get an atom by index
    pub fn atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.as_usize())
    }

    /// Get a mutable atom by index
    pub fn atom_mut(&mut self, index: AtomIndex) -> Option<&mut Atom> {
        self.atoms.get_mut(index.as_usize())
    }

    /// Get a bond by index
    pub fn bond(&self, index: BondIndex) -> Option<&Bond> {
        self.bonds.get(index.as_usize())
    }

    /// Get a mutable bond by index
    pub fn bond_mut(&mut self, index: BondIndex) -> Option<&mut Bond> {
        self.bonds.get_mut(index.as_usize())
    }

    /// Get the 2D coordinate of an atom, `None` when absent
    pub fn coord(&self, index: AtomIndex) -> Option<Point2> {
        self.coords.get(index.as_usize()).copied().flatten()
    }

    /// Iterate over atoms with their indices
    pub fn atoms(&self) -> impl Iterator<Item = (AtomIndex, &Atom)> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, a)| (AtomIndex(i as u32), a))
    }

    /// Iterate over bonds with their indices
    pub fn bonds(&self) -> impl Iterator<Item = (BondIndex, &Bond)> {
        self.bonds
            .iter()
            .enumerate()
            .map(|(i, b)| (BondIndex(i as u32), b))
    }

    /// Indices of the bonds incident to an atom
    pub fn connected_bonds(&self, atom: AtomIndex) -> Vec<BondIndex> {
        self.bonds()
            .filter(|(_, b)| b.involves(atom))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of the atoms bonded to an atom
    pub fn neighbors(&self, atom: AtomIndex) -> Vec<AtomIndex> {
        self.bonds
            .iter()
            .filter_map(|b| b.other(atom))
            .collect()
    }

    /// Number of bonds incident to an atom
    pub fn degree(&self, atom: AtomIndex) -> usize {
        self.bonds.iter().filter(|b| b.involves(atom)).count()
    }

    /// Whether both endpoints of a bond have 2D coordinates
    pub fn bond_has_coords(&self, bond: &Bond) -> bool {
        self.coord(bond.atom1).is_some() && self.coord(bond.atom2).is_some()
    }

    /// The bond's segment in molecule space, `None` when a coordinate is missing
    pub fn bond_line(&self, bond: &Bond) -> Option<Line> {
        Some(Line::new(self.coord(bond.atom1)?, self.coord(bond.atom2)?))
    }

    /// Tight bounding box of the atom coordinates
    ///
    /// `None` when no atom has a coordinate.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.coords.iter().copied().flatten())
    }

    /// The atom closest to a point in molecule space
    pub fn closest_atom(&self, p: Point2) -> Option<AtomIndex> {
        self.atoms()
            .filter_map(|(i, _)| self.coord(i).map(|c| (i, c.distance(p))))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// The bond whose midpoint is closest to a point in molecule space
    pub fn closest_bond(&self, p: Point2) -> Option<BondIndex> {
        self.bonds()
            .filter_map(|(i, b)| {
                self.bond_line(b)
                    .map(|line| (i, line.midpoint().distance(p)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

/// Builder for molecules with a fluent interface
///
/// Panics are unacceptable in the render path, so the builder is the one
/// place where invalid bonds are simply ignored; inputs coming from a real
/// parser go through [`Molecule::add_bond`] instead.
#[derive(Debug)]
pub struct MoleculeBuilder {
    molecule: Molecule,
}

impl MoleculeBuilder {
    /// Start building a molecule
    pub fn new(name: impl Into<String>) -> Self {
        MoleculeBuilder {
            molecule: Molecule::new(name),
        }
    }

    /// Add an atom at a position
    pub fn atom(mut self, atom: Atom, x: f64, y: f64) -> Self {
        let _ = self.molecule.add_atom_at(atom, Point2::new(x, y));
        self
    }

    /// Add a bond between two atoms; invalid bonds are dropped
    pub fn bond(mut self, a1: u32, a2: u32, order: BondOrder) -> Self {
        let _ = self
            .molecule
            .add_bond(AtomIndex(a1), AtomIndex(a2), order);
        self
    }

    /// Build the molecule
    pub fn build(self) -> Molecule {
        self.molecule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn two_atoms() -> Molecule {
        MoleculeBuilder::new("test")
            .atom(Atom::new(Element::Carbon), 0.0, 0.0)
            .atom(Atom::new(Element::Oxygen), 1.5, 0.0)
            .bond(0, 1, BondOrder::Single)
            .build()
    }

    #[test]
    fn test_counts_and_lookup() {
        let mol = two_atoms();
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 1);
        assert_eq!(mol.atom(AtomIndex(1)).unwrap().element, Element::Oxygen);
        assert!(mol.atom(AtomIndex(2)).is_none());
    }

    #[test]
    fn test_connectivity() {
        let mol = two_atoms();
        assert_eq!(mol.degree(AtomIndex(0)), 1);
        assert_eq!(mol.neighbors(AtomIndex(0)), vec![AtomIndex(1)]);
        assert_eq!(mol.connected_bonds(AtomIndex(1)), vec![BondIndex(0)]);
    }

    #[test]
    fn test_invalid_bonds_rejected() {
        let mut mol = two_atoms();
        assert_eq!(
            mol.add_bond(AtomIndex(0), AtomIndex(0), BondOrder::Single),
            Err(MolError::InvalidBond(0, 0))
        );
        assert_eq!(
            mol.add_bond(AtomIndex(1), AtomIndex(0), BondOrder::Single),
            Err(MolError::DuplicateBond(1, 0))
        );
        assert!(matches!(
            mol.add_bond(AtomIndex(0), AtomIndex(9), BondOrder::Single),
            Err(MolError::AtomIndexOutOfBounds(9, 2))
        ));
    }

    #[test]
    fn test_bounds() {
        let mol = two_atoms();
        let bounds = mol.bounds().unwrap();
        assert_eq!(bounds.width(), 1.5);
        assert_eq!(bounds.height(), 0.0);
        assert!(Molecule::new("empty").bounds().is_none());
    }

    #[test]
    fn test_missing_coordinate() {
        let mut mol = two_atoms();
        let n = mol.add_atom(Atom::new(Element::Nitrogen));
        assert!(mol.coord(n).is_none());
        let bond = mol.add_bond(AtomIndex(0), n, BondOrder::Single).unwrap();
        let bond = mol.bond(bond).unwrap().clone();
        assert!(!mol.bond_has_coords(&bond));
    }

    #[test]
    fn test_closest_queries() {
        let mol = two_atoms();
        assert_eq!(mol.closest_atom(Point2::new(1.4, 0.1)), Some(AtomIndex(1)));
        assert_eq!(mol.closest_bond(Point2::new(0.7, 0.0)), Some(BondIndex(0)));
    }
}
