//! Symbol-to-scene conversion
//!
//! Turns a placed label into shapes: one background fill per label box
//! (so bonds passing behind the symbol are covered) followed by the glyph
//! outlines. Background fills come first in the group so backends that
//! paint in order get the occlusion right.

use mol2d_color::Color;
use mol2d_scene::{Path, RenderedShape, SymbolGroup};

use crate::font::GlyphOutliner;
use crate::label::LabelPlacement;
use crate::model::DepictionModel;

/// Convert one placed label into its shape group
///
/// The primary symbol is painted in `atom_color`; annotations use the
/// model foreground.
pub fn symbol_shapes(
    placement: &LabelPlacement,
    atom_color: Color,
    model: &DepictionModel,
    fonts: &dyn GlyphOutliner,
) -> SymbolGroup {
    let mut group = SymbolGroup::new();

    group.push(RenderedShape::fill(Path::rect(placement.rect), model.background));
    for aux in &placement.aux {
        group.push(RenderedShape::fill(Path::rect(aux.rect), model.background));
    }

    let size = model.font_world_size();
    group.push(RenderedShape::fill(
        fonts.outline(
            &placement.text,
            size,
            LabelPlacement::glyph_origin(&placement.rect),
        ),
        atom_color,
    ));

    let small = model.small_font_world_size();
    for aux in &placement.aux {
        let glyph_size = if aux.kind.is_small() { small } else { size };
        group.push(RenderedShape::fill(
            fonts.outline(&aux.text, glyph_size, LabelPlacement::glyph_origin(&aux.rect)),
            model.foreground,
        ));
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BoxGlyphs;
    use crate::hydrogen::HydrogenPosition;
    use crate::label::place_label;
    use mol2d_geom::Point2;
    use mol2d_mol::{AtomBuilder, Element};
    use mol2d_scene::ShapeStyle;

    #[test]
    fn test_backgrounds_precede_glyphs() {
        let model = DepictionModel::default();
        let atom = AtomBuilder::new(Element::Oxygen).hydrogens(1).build();
        let placement = place_label(
            &atom,
            Point2::new(0.0, 0.0),
            HydrogenPosition::Right,
            1,
            &model,
            &BoxGlyphs,
        );
        let group = symbol_shapes(&placement, Color::RED, &model, &BoxGlyphs);

        // one background + one outline per box (main + H)
        assert_eq!(group.shapes().len(), 4);
        assert_eq!(group.shapes()[0].style, ShapeStyle::Fill(model.background));
        assert_eq!(group.shapes()[1].style, ShapeStyle::Fill(model.background));
        assert_eq!(group.shapes()[2].style, ShapeStyle::Fill(Color::RED));
        assert_eq!(group.shapes()[3].style, ShapeStyle::Fill(model.foreground));
    }

    #[test]
    fn test_glyphs_inside_group_bounds() {
        let model = DepictionModel::default();
        let atom = AtomBuilder::new(Element::Nitrogen)
            .charge(1)
            .hydrogens(4)
            .build();
        let placement = place_label(
            &atom,
            Point2::new(1.0, -2.0),
            HydrogenPosition::Right,
            1,
            &model,
            &BoxGlyphs,
        );
        let group = symbol_shapes(&placement, model.foreground, &model, &BoxGlyphs);
        let bounds = group.bounds().unwrap();
        for shape in group.shapes() {
            for p in shape.path.points() {
                assert!(bounds.contains(p));
            }
        }
    }
}
