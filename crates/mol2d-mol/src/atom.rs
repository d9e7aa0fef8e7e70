//! Atom data structure
//!
//! Deliberately narrow: only the fields the 2D depiction engine reads.
//! Anything else the host application knows about an atom stays on the
//! host's side of the interface.

use crate::element::Element;

/// Distinguishes real atoms from pseudo atoms (R-groups, attachment
/// points, "*" queries)
///
/// The tag is resolved once at input-conversion time; the symbol and bond
/// renderers only operate on [`AtomKind::Normal`] atoms and skip pseudo
/// atoms, whose labelling is handled by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AtomKind {
    /// A regular element atom
    #[default]
    Normal,
    /// A pseudo atom with a free-form label (e.g. "R1")
    Pseudo(String),
}

impl AtomKind {
    /// Check if this is a pseudo atom
    #[inline]
    pub fn is_pseudo(&self) -> bool {
        matches!(self, AtomKind::Pseudo(_))
    }
}

/// Atom data read by the depiction engine
///
/// Immutable during a render pass. The 2D coordinate lives on the
/// [`Molecule`](crate::Molecule), not here, so coordinate-less inputs can
/// be represented without poisoning every atom field with `Option`.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Chemical element
    pub element: Element,
    /// Normal atom or pseudo atom
    pub kind: AtomKind,
    /// Formal charge (signed)
    pub charge: i8,
    /// Mass number; 0 means natural abundance (no isotope label)
    pub mass_number: u16,
    /// Implicit hydrogen count; `None` means unknown
    pub hydrogen_count: Option<u8>,
    /// Number of connected single electrons (radical)
    pub radical_electrons: u8,
    /// Aromaticity flag assigned by the external perception step
    pub aromatic: bool,
    /// Set by validation when the atom has a structural problem
    pub error_marker: bool,
}

impl Atom {
    /// Create a normal atom of the given element
    pub fn new(element: Element) -> Self {
        Atom {
            element,
            kind: AtomKind::Normal,
            charge: 0,
            mass_number: 0,
            hydrogen_count: None,
            radical_electrons: 0,
            aromatic: false,
            error_marker: false,
        }
    }

    /// Create a pseudo atom with the given label
    pub fn pseudo(label: impl Into<String>) -> Self {
        Atom {
            kind: AtomKind::Pseudo(label.into()),
            ..Atom::new(Element::Unknown)
        }
    }

    /// Check if this is a radical (has connected single electrons)
    #[inline]
    pub fn is_radical(&self) -> bool {
        self.radical_electrons > 0
    }

    /// Implicit hydrogen count, treating unknown as zero
    #[inline]
    pub fn hydrogens(&self) -> u8 {
        self.hydrogen_count.unwrap_or(0)
    }
}

impl Default for Atom {
    fn default() -> Self {
        Atom::new(Element::Carbon)
    }
}

/// Builder for atoms with a fluent interface
#[derive(Debug, Default)]
pub struct AtomBuilder {
    atom: Atom,
}

impl AtomBuilder {
    /// Start building an atom of the given element
    pub fn new(element: Element) -> Self {
        AtomBuilder {
            atom: Atom::new(element),
        }
    }

    /// Set the formal charge
    pub fn charge(mut self, charge: i8) -> Self {
        self.atom.charge = charge;
        self
    }

    /// Set the mass number (isotope label)
    pub fn mass_number(mut self, mass: u16) -> Self {
        self.atom.mass_number = mass;
        self
    }

    /// Set the implicit hydrogen count
    pub fn hydrogens(mut self, count: u8) -> Self {
        self.atom.hydrogen_count = Some(count);
        self
    }

    /// Set the radical electron count
    pub fn radical_electrons(mut self, count: u8) -> Self {
        self.atom.radical_electrons = count;
        self
    }

    /// Mark the atom as aromatic
    pub fn aromatic(mut self, aromatic: bool) -> Self {
        self.atom.aromatic = aromatic;
        self
    }

    /// Set the validation error marker
    pub fn error_marker(mut self, marker: bool) -> Self {
        self.atom.error_marker = marker;
        self
    }

    /// Build the atom
    pub fn build(self) -> Atom {
        self.atom
    }
}
