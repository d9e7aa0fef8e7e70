//! Error types for the depiction engine
//!
//! Only one condition aborts a render call: a symbol that must be placed
//! on an atom with no 2D coordinate. Everything else degrades and is
//! logged at the point of failure.

use thiserror::Error;

use mol2d_mol::AtomIndex;

/// Errors that abort a render call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepictError {
    /// An atom whose symbol must be drawn has no 2D coordinate
    #[error("atom {0} requires a symbol but has no 2D coordinate")]
    MissingCoordinates(AtomIndex),
}

/// Result type for depiction operations
pub type DepictResult<T> = Result<T, DepictError>;
