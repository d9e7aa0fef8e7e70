//! 2D geometry primitives for molecular depiction
//!
//! This crate provides the small amount of computational geometry the
//! depiction engine needs:
//!
//! - [`Point2`] / [`Vec2`] - points and vectors in molecule space (f64)
//! - [`Line`] - a segment with parallel-offset construction for multiple bonds
//! - [`Rect`] - axis-aligned bounding boxes with union/inclusion accumulation
//! - [`Transform2`] - affine transforms mapping molecule space to view space
//! - [`centroid`] - center of a set of points (ring centers)
//!
//! Everything here is stateless value math and safe to share across
//! concurrent render calls.

mod line;
mod point;
mod rect;
mod transform;

pub use line::Line;
pub use point::{centroid, Point2, Vec2};
pub use rect::Rect;
pub use transform::Transform2;
