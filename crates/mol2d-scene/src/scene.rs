//! Scene assembly
//!
//! The renderer's output: styled shapes grouped into atom symbols and bond
//! drawings, plus the overall molecule bounds. The scene carries no
//! backend state; SVG, canvas or GPU backends all walk the same structure.

use serde::{Deserialize, Serialize};

use mol2d_geom::Rect;

use crate::shape::RenderedShape;

/// The shapes of one atom symbol (backgrounds, glyphs, annotations)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolGroup {
    shapes: Vec<RenderedShape>,
}

impl SymbolGroup {
    /// Create an empty group
    pub fn new() -> Self {
        SymbolGroup::default()
    }

    /// Create a group from shapes
    pub fn from_shapes(shapes: Vec<RenderedShape>) -> Self {
        SymbolGroup { shapes }
    }

    /// Add a shape to the group
    pub fn push(&mut self, shape: RenderedShape) {
        self.shapes.push(shape);
    }

    /// The shapes in paint order
    pub fn shapes(&self) -> &[RenderedShape] {
        &self.shapes
    }

    /// Bounding box over all shapes
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .filter_map(|s| s.bounds())
            .reduce(|a, b| a.union(b))
    }
}

/// A complete 2D depiction ready for a drawing backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    symbols: Vec<SymbolGroup>,
    bonds: Vec<RenderedShape>,
    bounds: Option<Rect>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Scene::default()
    }

    /// Add an atom symbol group
    pub fn add_symbol(&mut self, group: SymbolGroup) {
        self.symbols.push(group);
    }

    /// Add a bond shape
    pub fn add_bond(&mut self, shape: RenderedShape) {
        self.bonds.push(shape);
    }

    /// Set the molecule bounds in scene space
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// The atom symbol groups
    pub fn symbols(&self) -> &[SymbolGroup] {
        &self.symbols
    }

    /// The bond shapes
    pub fn bonds(&self) -> &[RenderedShape] {
        &self.bonds
    }

    /// The molecule bounds, if set
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Total number of shapes across symbols and bonds
    pub fn shape_count(&self) -> usize {
        self.symbols.iter().map(|g| g.shapes().len()).sum::<usize>() + self.bonds.len()
    }

    /// Whether the scene draws nothing
    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use mol2d_color::Color;
    use mol2d_geom::Point2;

    #[test]
    fn test_scene_accumulation() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        let mut group = SymbolGroup::new();
        group.push(RenderedShape::fill(
            Path::rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
            Color::BLACK,
        ));
        scene.add_symbol(group);
        scene.add_bond(RenderedShape::stroke(
            Path::line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
            Color::BLACK,
            0.03,
        ));

        assert_eq!(scene.symbols().len(), 1);
        assert_eq!(scene.bonds().len(), 1);
        assert_eq!(scene.shape_count(), 2);
    }

    #[test]
    fn test_group_bounds() {
        let mut group = SymbolGroup::new();
        group.push(RenderedShape::fill(
            Path::rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
            Color::BLACK,
        ));
        group.push(RenderedShape::fill(
            Path::rect(Rect::new(2.0, 0.0, 3.0, 2.0)),
            Color::BLACK,
        ));
        let bounds = group.bounds().unwrap();
        assert_eq!(bounds.width(), 3.0);
        assert_eq!(bounds.height(), 2.0);
    }
}
