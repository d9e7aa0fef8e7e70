//! Rings and the per-bond ring lookup
//!
//! Ring perception (SSSR) happens outside this crate; the depiction engine
//! receives the rings as plain atom/bond index cycles and only needs two
//! things from them: the most specific ring containing a given bond, and
//! per-ring geometry (centroid, bounding box) for inner bonds and aromatic
//! annuli.

use ahash::AHashMap;
use mol2d_geom::{centroid, Point2, Rect};

use crate::index::{AtomIndex, BondIndex, RingIndex};
use crate::molecule::Molecule;

/// One SSSR member: an ordered cycle of atoms and the bonds closing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    /// Atoms of the cycle, in ring order
    pub atoms: Vec<AtomIndex>,
    /// Bonds of the cycle
    pub bonds: Vec<BondIndex>,
}

impl Ring {
    /// Create a ring from its atom and bond cycles
    pub fn new(atoms: Vec<AtomIndex>, bonds: Vec<BondIndex>) -> Self {
        Ring { atoms, bonds }
    }

    /// Ring size (atom count)
    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the ring has no atoms
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Check if a bond belongs to this ring
    pub fn contains_bond(&self, bond: BondIndex) -> bool {
        self.bonds.contains(&bond)
    }

    /// Positions of the ring atoms that have coordinates
    fn positions(&self, molecule: &Molecule) -> Vec<Point2> {
        self.atoms
            .iter()
            .filter_map(|&a| molecule.coord(a))
            .collect()
    }

    /// Geometric center of the ring, `None` when no atom has coordinates
    pub fn center(&self, molecule: &Molecule) -> Option<Point2> {
        centroid(&self.positions(molecule))
    }

    /// Bounding box of the ring atoms, `None` when no atom has coordinates
    pub fn bounds(&self, molecule: &Molecule) -> Option<Rect> {
        Rect::from_points(self.positions(molecule))
    }

    /// A ring is aromatic when all its atoms are aromatic, or all its
    /// bonds are aromatic
    pub fn is_aromatic(&self, molecule: &Molecule) -> bool {
        let all_atoms = self
            .atoms
            .iter()
            .all(|&a| molecule.atom(a).is_some_and(|atom| atom.aromatic));
        if all_atoms {
            return true;
        }
        !self.bonds.is_empty()
            && self
                .bonds
                .iter()
                .all(|&b| molecule.bond(b).is_some_and(|bond| bond.aromatic))
    }
}

/// Per-bond lookup of the most specific containing ring
///
/// When a bond is shared between rings (fused systems), the ring with the
/// fewest atoms wins; ties resolve to the earliest ring in the input
/// order, which is deterministic for a given SSSR result.
#[derive(Debug, Clone, Default)]
pub struct RingLookup {
    rings: Vec<Ring>,
    by_bond: AHashMap<BondIndex, RingIndex>,
}

impl RingLookup {
    /// Build the lookup from an SSSR ring list
    pub fn new(rings: Vec<Ring>) -> Self {
        let mut by_bond: AHashMap<BondIndex, RingIndex> = AHashMap::new();
        for (i, ring) in rings.iter().enumerate() {
            let index = RingIndex(i as u32);
            for &bond in &ring.bonds {
                match by_bond.get(&bond) {
                    Some(&existing) if rings[existing.as_usize()].len() <= ring.len() => {}
                    _ => {
                        by_bond.insert(bond, index);
                    }
                }
            }
        }
        RingLookup { rings, by_bond }
    }

    /// An empty lookup, used when ring perception failed upstream
    pub fn empty() -> Self {
        RingLookup::default()
    }

    /// Number of rings
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Get a ring by index
    pub fn ring(&self, index: RingIndex) -> Option<&Ring> {
        self.rings.get(index.as_usize())
    }

    /// The most specific ring containing a bond, if any
    pub fn ring_of(&self, bond: BondIndex) -> Option<(RingIndex, &Ring)> {
        let index = *self.by_bond.get(&bond)?;
        self.rings.get(index.as_usize()).map(|r| (index, r))
    }
}
