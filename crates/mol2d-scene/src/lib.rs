//! Backend-agnostic 2D scene graph
//!
//! Paths, styled shapes and assembled scenes. This crate knows nothing
//! about chemistry: the depiction engine builds scenes out of these types
//! and any drawing backend consumes them.

pub mod path;
pub mod scene;
pub mod shape;

pub use path::{Path, PathElement};
pub use scene::{Scene, SymbolGroup};
pub use shape::{RenderedShape, ShapeStyle};
