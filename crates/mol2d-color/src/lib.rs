//! Color types and atom coloring schemes for 2D depiction

pub mod color;
pub mod colorer;

pub use color::Color;
pub use colorer::{AtomColorer, Cpk2dColors, UniformColors};
