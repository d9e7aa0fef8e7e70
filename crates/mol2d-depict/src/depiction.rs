//! Scene assembly
//!
//! One [`Depiction::generate`] call per molecule: visibility, label
//! placement, symbol conversion and the bond pass run in sequence and
//! merge into a single scene with its aggregate bounding box. No state
//! survives the call, so depictions are safe to share across threads.

use log::debug;

use mol2d_color::AtomColorer;
use mol2d_geom::Rect;
use mol2d_mol::{Atom, Element, Molecule, RingLookup};
use mol2d_scene::{RenderedShape, Scene};

use crate::bond::BondPass;
use crate::error::{DepictError, DepictResult};
use crate::font::GlyphOutliner;
use crate::hydrogen::HydrogenPosition;
use crate::label::place_label;
use crate::model::{DepictionModel, BOUNDS_MARGIN};
use crate::symbol::symbol_shapes;
use crate::visibility::symbol_visible;

/// The depiction engine: configuration plus collaborator seams
pub struct Depiction<'a> {
    model: &'a DepictionModel,
    colorer: &'a dyn AtomColorer,
    fonts: &'a dyn GlyphOutliner,
}

impl<'a> Depiction<'a> {
    /// Create an engine over a configuration and its collaborators
    pub fn new(
        model: &'a DepictionModel,
        colorer: &'a dyn AtomColorer,
        fonts: &'a dyn GlyphOutliner,
    ) -> Self {
        Depiction {
            model,
            colorer,
            fonts,
        }
    }

    /// Render one molecule into a scene
    ///
    /// Fails only when a visible symbol sits on an atom without a 2D
    /// coordinate; every other defect degrades with a log entry.
    pub fn generate(&self, molecule: &Molecule, rings: &RingLookup) -> DepictResult<Scene> {
        let mut scene = Scene::new();
        if molecule.atom_count() == 0 {
            return Ok(scene);
        }

        // bond lines take the color the palette assigns to plain carbon
        let foreground = self.colorer.color_of(&Atom::new(Element::Carbon));

        for (index, atom) in molecule.atoms() {
            if atom.kind.is_pseudo() {
                debug!("atom {index} is a pseudo atom; label left to the host");
                continue;
            }
            let degree = molecule.degree(index);
            if !symbol_visible(atom, degree, self.model) {
                continue;
            }
            let center = molecule
                .coord(index)
                .ok_or(DepictError::MissingCoordinates(index))?;
            let position = HydrogenPosition::of(molecule, index);
            let placement =
                place_label(atom, center, position, degree, self.model, self.fonts);
            scene.add_symbol(symbol_shapes(
                &placement,
                self.colorer.color_of(atom),
                self.model,
                self.fonts,
            ));
        }

        BondPass::new(self.model, foreground).render(molecule, rings, &mut scene);

        scene.set_bounds(self.aggregate_bounds(molecule, &scene));
        Ok(scene)
    }

    /// Bounding box over atom coordinates and every emitted control point,
    /// padded so hull labels are not clipped
    fn aggregate_bounds(&self, molecule: &Molecule, scene: &Scene) -> Option<Rect> {
        let mut bounds = molecule.bounds();
        let mut include = |shape: &RenderedShape| {
            for p in shape.path.points() {
                bounds = Some(match bounds {
                    Some(r) => r.include(p),
                    None => Rect::at(p),
                });
            }
        };
        for group in scene.symbols() {
            for shape in group.shapes() {
                include(shape);
            }
        }
        for shape in scene.bonds() {
            include(shape);
        }
        bounds.map(|b| b.expand(BOUNDS_MARGIN))
    }
}
