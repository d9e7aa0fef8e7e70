//! Molecule-to-view fit transform
//!
//! Maps the molecule's bounding box into a view rectangle: uniform
//! (aspect-preserving) scale with zoom and margin applied, a Y flip
//! (molecule space is Y-up, device space Y-down), and centering. The
//! inverse mapping supports view-space picking.

use mol2d_geom::{Point2, Rect, Transform2};

use crate::model::DepictionModel;

/// Build the molecule-to-view transform
///
/// Degenerate molecule extents never divide by zero: a zero dimension
/// borrows the other dimension's extent, and a point molecule uses a
/// unit extent.
pub fn fit_transform(molecule: Rect, view: Rect, model: &DepictionModel) -> Transform2 {
    let mut mol_w = molecule.width();
    let mut mol_h = molecule.height();
    if mol_w == 0.0 && mol_h == 0.0 {
        mol_w = 1.0;
        mol_h = 1.0;
    } else if mol_w == 0.0 {
        mol_w = mol_h;
    } else if mol_h == 0.0 {
        mol_h = mol_w;
    }

    let scale = model.zoom
        * (1.0 - 2.0 * model.margin)
        * (view.width() / mol_w).min(view.height() / mol_h);

    let mol_center = molecule.center();
    let view_center = view.center();
    Transform2 {
        a: scale,
        b: 0.0,
        c: 0.0,
        d: -scale,
        e: view_center.x - scale * mol_center.x,
        f: view_center.y + scale * mol_center.y,
    }
}

/// Map a view-space point back to molecule space, for picking
///
/// `None` when the transform is singular (zero-area view).
pub fn view_to_molecule(transform: &Transform2, p: Point2) -> Option<Point2> {
    transform.inverse().map(|inv| inv.apply(p))
}
