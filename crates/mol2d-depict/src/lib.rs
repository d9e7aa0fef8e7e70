//! 2D chemical structure depiction engine
//!
//! Turns a molecular graph with assigned 2D coordinates into a
//! device-independent scene of paths and styled shapes: atom symbols with
//! hydrogen/charge/isotope annotations, bond geometry for single, double,
//! triple, stereo-wedge and aromatic bonds (ring-aware), and the affine
//! fit transform into a view rectangle.
//!
//! The engine renders; it does not lay out coordinates, perceive rings,
//! or rasterize fonts. Those arrive through the seams: coordinates on the
//! [`mol2d_mol::Molecule`], rings as a [`mol2d_mol::RingLookup`], glyphs
//! behind the [`GlyphOutliner`] trait, and colors behind
//! [`mol2d_color::AtomColorer`].
//!
//! ```
//! use mol2d_color::Cpk2dColors;
//! use mol2d_depict::{BoxGlyphs, Depiction, DepictionModel};
//! use mol2d_mol::{Atom, BondOrder, Element, MoleculeBuilder, RingLookup};
//!
//! let molecule = MoleculeBuilder::new("methanol")
//!     .atom(Atom::new(Element::Carbon), 0.0, 0.0)
//!     .atom(Atom::new(Element::Oxygen), 1.0, 0.0)
//!     .bond(0, 1, BondOrder::Single)
//!     .build();
//!
//! let model = DepictionModel::default();
//! let engine = Depiction::new(&model, &Cpk2dColors, &BoxGlyphs);
//! let scene = engine.generate(&molecule, &RingLookup::empty()).unwrap();
//! assert_eq!(scene.symbols().len(), 1); // only the oxygen gets a symbol
//! ```

pub mod bond;
pub mod depiction;
pub mod error;
pub mod font;
pub mod hydrogen;
pub mod label;
pub mod model;
pub mod symbol;
pub mod transform;
pub mod visibility;

pub use bond::BondPass;
pub use depiction::Depiction;
pub use error::{DepictError, DepictResult};
pub use font::{BoxGlyphs, GlyphOutliner, TextExtents};
pub use hydrogen::{HydrogenPosition, LabelAlignment};
pub use label::{place_label, AuxKind, AuxLabel, LabelPlacement};
pub use model::{DepictionModel, FontSpec, FontStyle};
pub use symbol::symbol_shapes;
pub use transform::{fit_transform, view_to_molecule};
pub use visibility::symbol_visible;
