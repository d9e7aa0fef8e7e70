//! Bond data structure

use crate::index::AtomIndex;

/// Bond order
///
/// [`BondOrder::Any`] is the molfile "any" query order; the renderer draws
/// it as a best-effort dashed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    /// Unknown/unsupported order (drawn as a single line with a warning)
    Unknown = 0,
    /// Single bond
    #[default]
    Single = 1,
    /// Double bond
    Double = 2,
    /// Triple bond
    Triple = 3,
    /// "Any" query bond
    Any = 8,
}

impl BondOrder {
    /// Create from the raw molfile order value
    pub fn from_raw(value: u8) -> Self {
        match value {
            1 => BondOrder::Single,
            2 => BondOrder::Double,
            3 => BondOrder::Triple,
            8 => BondOrder::Any,
            _ => BondOrder::Unknown,
        }
    }
}

impl std::fmt::Display for BondOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BondOrder::Unknown => write!(f, "?"),
            BondOrder::Single => write!(f, "-"),
            BondOrder::Double => write!(f, "="),
            BondOrder::Triple => write!(f, "#"),
            BondOrder::Any => write!(f, "~"),
        }
    }
}

/// Wedge stereochemistry of a bond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondStereo {
    /// No stereo information
    #[default]
    None,
    /// Stereo explicitly undefined (wavy)
    Undefined,
    /// Solid wedge: narrow end at the first atom
    Up,
    /// Dashed wedge: narrow end at the second atom
    Down,
}

impl BondStereo {
    /// Check if this stereo flag selects a wedge rendering
    #[inline]
    pub fn is_wedge(&self) -> bool {
        matches!(self, BondStereo::Up | BondStereo::Down)
    }
}

/// A bond between two atoms
///
/// An exclusive two-endpoint relation; the bond references atoms by index
/// and owns nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    /// First atom (the stereo origin for wedge bonds)
    pub atom1: AtomIndex,
    /// Second atom
    pub atom2: AtomIndex,
    /// Bond order
    pub order: BondOrder,
    /// Wedge stereochemistry
    pub stereo: BondStereo,
    /// Aromaticity flag assigned by the external perception step
    pub aromatic: bool,
    /// Hover/selection highlight flag
    pub highlighted: bool,
}

impl Bond {
    /// Create a new bond
    pub fn new(atom1: AtomIndex, atom2: AtomIndex, order: BondOrder) -> Self {
        Bond {
            atom1,
            atom2,
            order,
            stereo: BondStereo::None,
            aromatic: false,
            highlighted: false,
        }
    }

    /// Check if this bond involves the given atom
    #[inline]
    pub fn involves(&self, atom: AtomIndex) -> bool {
        self.atom1 == atom || self.atom2 == atom
    }

    /// Get the other endpoint, or `None` if `atom` is not an endpoint
    #[inline]
    pub fn other(&self, atom: AtomIndex) -> Option<AtomIndex> {
        if self.atom1 == atom {
            Some(self.atom2)
        } else if self.atom2 == atom {
            Some(self.atom1)
        } else {
            None
        }
    }
}
