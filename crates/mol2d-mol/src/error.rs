//! Error types for molecular data operations

use thiserror::Error;

/// Errors that can occur when building or querying molecular data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MolError {
    /// Atom index is out of bounds
    #[error("atom index {0} is out of bounds (atom count: {1})")]
    AtomIndexOutOfBounds(u32, usize),

    /// Bond index is out of bounds
    #[error("bond index {0} is out of bounds (bond count: {1})")]
    BondIndexOutOfBounds(u32, usize),

    /// Bond endpoints are invalid (self loop)
    #[error("invalid bond: atom1={0}, atom2={1}")]
    InvalidBond(u32, u32),

    /// A bond between these atoms already exists
    #[error("duplicate bond between atoms {0} and {1}")]
    DuplicateBond(u32, u32),

    /// Element symbol could not be parsed
    #[error("invalid element symbol: {0}")]
    InvalidElement(String),
}

/// Result type for molecular data operations
pub type MolResult<T> = Result<T, MolError>;
