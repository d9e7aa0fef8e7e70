//! Molecular data model for 2D depiction
//!
//! Provides the chemistry-side types the depiction engine consumes: atoms,
//! bonds, molecules with 2D coordinates, and externally perceived rings.
//! The crate holds no rendering logic and no file-format parsing; it is the
//! stable boundary between host chemistry code and the renderer.

pub mod atom;
pub mod bond;
pub mod element;
pub mod error;
pub mod index;
pub mod molecule;
pub mod ring;

pub use atom::{Atom, AtomBuilder, AtomKind};
pub use bond::{Bond, BondOrder, BondStereo};
pub use element::Element;
pub use error::{MolError, MolResult};
pub use index::{AtomIndex, BondIndex, RingIndex};
pub use molecule::{Molecule, MoleculeBuilder};
pub use ring::{Ring, RingLookup};

#[cfg(test)]
mod tests {
    use super::*;
    use mol2d_geom::Point2;

    #[test]
    fn test_end_to_end_benzene() {
        let mut builder = MoleculeBuilder::new("benzene");
        for i in 0..6 {
            let angle = std::f64::consts::PI / 3.0 * i as f64;
            builder = builder.atom(
                AtomBuilder::new(Element::Carbon).aromatic(true).build(),
                angle.cos(),
                angle.sin(),
            );
        }
        for i in 0..6u32 {
            let order = if i % 2 == 0 {
                BondOrder::Double
            } else {
                BondOrder::Single
            };
            builder = builder.bond(i, (i + 1) % 6, order);
        }
        let mol = builder.build();

        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 6);
        assert_eq!(mol.degree(AtomIndex(0)), 2);

        let ring = Ring::new(
            (0..6).map(AtomIndex).collect(),
            (0..6).map(BondIndex).collect(),
        );
        assert!(ring.is_aromatic(&mol));

        let lookup = RingLookup::new(vec![ring]);
        for i in 0..6 {
            assert!(lookup.ring_of(BondIndex(i)).is_some());
        }

        let center = lookup
            .ring(RingIndex(0))
            .and_then(|r| r.center(&mol))
            .unwrap();
        assert!(center.distance(Point2::new(0.0, 0.0)) < 1e-9);
    }
}
