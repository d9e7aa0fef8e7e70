//! Bond rendering state machine
//!
//! Classifies each bond and emits its geometry. Resolution order: stereo
//! wedges first, then aromatic-ring annulus treatment, then ring-aware
//! double bonds, then the plain order-based constructions, with dashed
//! and single-line fallbacks for "any" and unknown orders.
//!
//! The only state is the set of rings whose annulus has already been
//! drawn; it lives for one render call and is discarded with the pass.

use ahash::AHashSet;
use log::{debug, warn};

use mol2d_color::Color;
use mol2d_geom::{Line, Point2, Rect, Vec2};
use mol2d_mol::{Bond, BondIndex, BondOrder, BondStereo, Molecule, Ring, RingIndex, RingLookup};
use mol2d_scene::{Path, RenderedShape, Scene};

use crate::model::{
    DepictionModel, ANNULUS_SCALE, ANNULUS_WIDTH_FRACTION, ATOM_MARK_SIZE, DOUBLE_BOND_OFFSET,
    INNER_BOND_INSET,
};

/// Dash period numerator for "any"-order bonds, in world units
const ANY_BOND_DASH: f64 = 0.1;

/// One bond-rendering pass over a molecule
pub struct BondPass<'a> {
    model: &'a DepictionModel,
    /// Line color for unhighlighted bonds (the canonical carbon color)
    foreground: Color,
    painted_rings: AHashSet<RingIndex>,
}

impl<'a> BondPass<'a> {
    /// Start a fresh pass; the painted-ring set is never reused
    pub fn new(model: &'a DepictionModel, foreground: Color) -> Self {
        BondPass {
            model,
            foreground,
            painted_rings: AHashSet::new(),
        }
    }

    /// Render every bond of the molecule into the scene
    pub fn render(&mut self, molecule: &Molecule, rings: &RingLookup, scene: &mut Scene) {
        for (index, bond) in molecule.bonds() {
            self.render_bond(molecule, rings, index, bond, scene);
        }
    }

    fn render_bond(
        &mut self,
        molecule: &Molecule,
        rings: &RingLookup,
        index: BondIndex,
        bond: &Bond,
        scene: &mut Scene,
    ) {
        if !self.model.show_explicit_hydrogens && touches_hydrogen(molecule, bond) {
            debug!("bond {index} touches a hidden hydrogen; skipped");
            return;
        }
        let Some(line) = molecule.bond_line(bond) else {
            debug!("bond {index} has no coordinates; skipped");
            return;
        };

        let color = if bond.highlighted {
            self.atom_marks(&line, scene);
            self.model.hover
        } else {
            self.foreground
        };

        if bond.stereo.is_wedge() {
            self.wedge(line, bond.stereo, color, scene);
            return;
        }

        if let Some((ring_index, ring)) = rings.ring_of(index) {
            if self.model.aromatic_annuli() && ring.is_aromatic(molecule) {
                if self.painted_rings.insert(ring_index) {
                    self.annulus(molecule, ring, color, scene);
                }
                self.single(line, color, scene);
                return;
            }
            match bond.order {
                BondOrder::Single => self.single(line, color, scene),
                BondOrder::Double => {
                    self.single(line, color, scene);
                    self.inner_bond(molecule, ring, line, color, scene);
                }
                BondOrder::Triple => self.triple(line, color, scene),
                order => {
                    warn!("bond {index} has unsupported in-ring order {order}; drawing single");
                    self.single(line, color, scene);
                }
            }
            return;
        }

        match bond.order {
            BondOrder::Single => self.single(line, color, scene),
            BondOrder::Double => self.double(line, color, scene),
            BondOrder::Triple => self.triple(line, color, scene),
            BondOrder::Any => self.dashed(line, color, scene),
            BondOrder::Unknown => {
                warn!("bond {index} has unknown order; drawing single");
                self.single(line, color, scene);
            }
        }
    }

    fn stroke(&self, line: Line, color: Color, scene: &mut Scene) {
        scene.add_bond(RenderedShape::stroke(
            Path::line(line.from, line.to),
            color,
            self.model.stroke_width(),
        ));
    }

    fn single(&self, line: Line, color: Color, scene: &mut Scene) {
        self.stroke(line, color, scene);
    }

    fn double(&self, line: Line, color: Color, scene: &mut Scene) {
        let (a, b) = line.parallels(DOUBLE_BOND_OFFSET);
        self.stroke(a, color, scene);
        self.stroke(b, color, scene);
    }

    fn triple(&self, line: Line, color: Color, scene: &mut Scene) {
        self.stroke(line, color, scene);
        let (a, b) = line.parallels(self.model.triple_bond_offset());
        self.stroke(a, color, scene);
        self.stroke(b, color, scene);
    }

    /// In-ring second line of a double bond, inset toward the ring center
    fn inner_bond(
        &self,
        molecule: &Molecule,
        ring: &Ring,
        line: Line,
        color: Color,
        scene: &mut Scene,
    ) {
        let Some(center) = ring.center(molecule) else {
            debug!("ring has no positioned atoms; inner bond skipped");
            return;
        };
        let inset = |p: Point2| {
            (center - p)
                .normalized()
                .map(|dir| p + dir * INNER_BOND_INSET)
        };
        let (Some(from), Some(to)) = (inset(line.from), inset(line.to)) else {
            debug!("bond endpoint coincides with ring center; inner bond skipped");
            return;
        };
        self.stroke(Line::new(from, to), color, scene);
    }

    /// Solid or dashed wedge triangle
    ///
    /// `Up` keeps the bond's atom order (narrow end at the first atom);
    /// `Down` swaps the endpoints and renders as tick lines.
    fn wedge(&self, line: Line, stereo: BondStereo, color: Color, scene: &mut Scene) {
        let (line, dashed) = match stereo {
            BondStereo::Down => (Line::new(line.to, line.from), true),
            _ => (line, false),
        };
        let Some(perp) = line.unit_perpendicular() else {
            // zero-length wedge; nothing sensible to widen
            self.single(line, color, scene);
            return;
        };
        let spread = perp * self.model.wedge_width();

        if dashed {
            self.dashed_wedge(line, spread, color, scene);
        } else {
            scene.add_bond(RenderedShape::fill(
                Path::polygon(&[line.from, line.to + spread, line.to - spread]),
                color,
            ));
        }
    }

    /// The wedge envelope as evenly spaced perpendicular ticks
    fn dashed_wedge(&self, line: Line, spread: Vec2, color: Color, scene: &mut Scene) {
        let length = line.length();
        let count = (length / self.model.dash_width() / 2.0).floor() as usize;
        if count < 2 {
            self.single(line, color, scene);
            return;
        }
        for i in 1..count {
            let t = i as f64 / count as f64;
            let on_axis = line.from.lerp(line.to, t);
            self.stroke(
                Line::new(on_axis + spread * t, on_axis - spread * t),
                color,
                scene,
            );
        }
    }

    /// Best-effort dashed line for "any"-order bonds
    fn dashed(&self, line: Line, color: Color, scene: &mut Scene) {
        let length = line.length();
        let periods = (length / (2.0 * ANY_BOND_DASH)).floor() as usize;
        if periods == 0 {
            self.single(line, color, scene);
            return;
        }
        for i in 0..periods {
            let t0 = (2 * i) as f64 * ANY_BOND_DASH / length;
            let t1 = t0 + ANY_BOND_DASH / length;
            self.stroke(
                Line::new(line.from.lerp(line.to, t0), line.from.lerp(line.to, t1)),
                color,
                scene,
            );
        }
    }

    /// Filled annulus marking an aromatic ring, one per ring per scene
    fn annulus(&self, molecule: &Molecule, ring: &Ring, color: Color, scene: &mut Scene) {
        let (Some(bounds), Some(center)) = (ring.bounds(molecule), ring.center(molecule)) else {
            debug!("ring has no positioned atoms; annulus skipped");
            return;
        };
        // clamped to a circle so elongated rings keep a round annulus
        let outer = bounds.width().min(bounds.height()) * ANNULUS_SCALE;
        let thickness = bounds.width().max(bounds.height()) * ANNULUS_WIDTH_FRACTION;
        let inner = outer - 2.0 * thickness;

        let square = |side: f64| {
            Rect::from_origin(center.x - side / 2.0, center.y - side / 2.0, side, side)
        };
        let mut path = Path::ellipse(square(outer));
        if inner > 0.0 {
            path.append(&Path::ellipse(square(inner)));
        }
        scene.add_bond(RenderedShape::fill(path, color));
    }

    /// Square marks behind both endpoints of a highlighted bond
    fn atom_marks(&self, line: &Line, scene: &mut Scene) {
        for p in [line.from, line.to] {
            let half = ATOM_MARK_SIZE / 2.0;
            let path = Path::rect(Rect::from_origin(
                p.x - half,
                p.y - half,
                ATOM_MARK_SIZE,
                ATOM_MARK_SIZE,
            ));
            let shape = if self.model.compact {
                RenderedShape::stroke(path, self.model.hover, self.model.stroke_width())
            } else {
                RenderedShape::fill(path, self.model.hover)
            };
            scene.add_bond(shape);
        }
    }
}

fn touches_hydrogen(molecule: &Molecule, bond: &Bond) -> bool {
    [bond.atom1, bond.atom2].iter().any(|&a| {
        molecule
            .atom(a)
            .is_some_and(|atom| atom.element.is_hydrogen())
    })
}
