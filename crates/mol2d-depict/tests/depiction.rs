//! Scenario tests driving the full depiction pipeline

use mol2d_color::Cpk2dColors;
use mol2d_depict::{fit_transform, BoxGlyphs, DepictError, Depiction, DepictionModel};
use mol2d_geom::Rect;
use mol2d_mol::{
    Atom, AtomBuilder, AtomIndex, BondIndex, BondOrder, Element, Molecule, MoleculeBuilder, Ring,
    RingLookup,
};
use mol2d_scene::Scene;

fn depict(molecule: &Molecule, rings: &RingLookup, model: &DepictionModel) -> Scene {
    Depiction::new(model, &Cpk2dColors, &BoxGlyphs)
        .generate(molecule, rings)
        .expect("render should succeed")
}

fn stroke_count(scene: &Scene) -> usize {
    scene.bonds().iter().filter(|s| !s.style.is_fill()).count()
}

fn annulus_count(scene: &Scene) -> usize {
    scene.bonds().iter().filter(|s| s.style.is_fill()).count()
}

fn benzene() -> (Molecule, RingLookup) {
    let mut builder = MoleculeBuilder::new("benzene");
    for i in 0..6 {
        let angle = std::f64::consts::PI / 3.0 * i as f64;
        builder = builder.atom(
            AtomBuilder::new(Element::Carbon).aromatic(true).build(),
            angle.cos(),
            angle.sin(),
        );
    }
    for i in 0..6u32 {
        let order = if i % 2 == 0 {
            BondOrder::Double
        } else {
            BondOrder::Single
        };
        builder = builder.bond(i, (i + 1) % 6, order);
    }
    let ring = Ring::new(
        (0..6).map(AtomIndex).collect(),
        (0..6).map(BondIndex).collect(),
    );
    (builder.build(), RingLookup::new(vec![ring]))
}

#[test]
fn test_ethanol_heavy_atom_skeleton() {
    // C-C-O with implicit hydrogens suppressed: only the oxygen symbol
    let molecule = MoleculeBuilder::new("ethanol")
        .atom(Atom::new(Element::Carbon), 0.0, 0.0)
        .atom(Atom::new(Element::Carbon), 1.0, 0.5)
        .atom(AtomBuilder::new(Element::Oxygen).hydrogens(1).build(), 2.0, 0.0)
        .bond(0, 1, BondOrder::Single)
        .bond(1, 2, BondOrder::Single)
        .build();
    let scene = depict(&molecule, &RingLookup::empty(), &DepictionModel::default());

    assert_eq!(scene.symbols().len(), 1);
    assert_eq!(stroke_count(&scene), 2);
    assert_eq!(annulus_count(&scene), 0);
}

#[test]
fn test_benzene_aromatic_annulus() {
    let (molecule, rings) = benzene();
    let scene = depict(&molecule, &rings, &DepictionModel::default());

    // six member bonds as single lines, exactly one annulus
    assert_eq!(scene.symbols().len(), 0);
    assert_eq!(stroke_count(&scene), 6);
    assert_eq!(annulus_count(&scene), 1);
    let annulus = scene.bonds().iter().find(|s| s.style.is_fill()).unwrap();
    assert_eq!(annulus.path.subpath_count(), 2);
}

#[test]
fn test_benzene_without_aromaticity_display() {
    let (molecule, rings) = benzene();
    let mut model = DepictionModel::default();
    model.show_aromaticity = false;
    let scene = depict(&molecule, &rings, &model);

    // three doubles (outer + inset inner) plus three singles, no annuli
    assert_eq!(stroke_count(&scene), 9);
    assert_eq!(annulus_count(&scene), 0);
}

#[test]
fn test_charged_nitrogen_plus_glyph() {
    let molecule = MoleculeBuilder::new("ammonium-like")
        .atom(AtomBuilder::new(Element::Nitrogen).charge(1).build(), 0.0, 0.0)
        .build();
    let scene = depict(&molecule, &RingLookup::empty(), &DepictionModel::default());

    assert_eq!(scene.symbols().len(), 1);
    let group = &scene.symbols()[0];
    // two boxes (N + "+"), each a background and an outline
    assert_eq!(group.shapes().len(), 4);
    // the charge glyph extends above and right of the atom point
    let bounds = group.bounds().unwrap();
    assert!(bounds.max_x > group.shapes()[0].bounds().unwrap().max_x);
    assert!(bounds.max_y > group.shapes()[0].bounds().unwrap().max_y);
}

#[test]
fn test_single_atom_degenerate_transform() {
    let molecule = MoleculeBuilder::new("methane")
        .atom(AtomBuilder::new(Element::Carbon).hydrogens(4).build(), 3.0, -2.0)
        .build();
    let model = DepictionModel::default();
    let scene = depict(&molecule, &RingLookup::empty(), &model);

    // atom hull has zero area; the fit transform must stay finite
    let atom_bounds = molecule.bounds().unwrap();
    assert_eq!(atom_bounds.width(), 0.0);
    let view = Rect::new(0.0, 0.0, 200.0, 200.0);
    let t = fit_transform(atom_bounds, view, &model);
    assert!(t.scale_x().is_finite() && !t.scale_x().is_nan());
    assert!(t.scale_y().is_finite() && !t.scale_y().is_nan());

    // the scene carries the padded label bounds
    assert!(scene.bounds().is_some());
}

#[test]
fn test_idempotent_render() {
    let (molecule, rings) = benzene();
    let model = DepictionModel::default();
    let first = depict(&molecule, &rings, &model);
    let second = depict(&molecule, &rings, &model);

    assert_eq!(first.shape_count(), second.shape_count());
    let (a, b) = (first.bounds().unwrap(), second.bounds().unwrap());
    assert!((a.min_x - b.min_x).abs() < 1e-9);
    assert!((a.min_y - b.min_y).abs() < 1e-9);
    assert!((a.max_x - b.max_x).abs() < 1e-9);
    assert!((a.max_y - b.max_y).abs() < 1e-9);
}

#[test]
fn test_bounds_contain_every_control_point() {
    let molecule = MoleculeBuilder::new("mixed")
        .atom(AtomBuilder::new(Element::Oxygen).hydrogens(1).charge(-1).build(), 0.0, 0.0)
        .atom(Atom::new(Element::Carbon), 1.5, 0.0)
        .atom(AtomBuilder::new(Element::Nitrogen).hydrogens(2).build(), 3.0, 1.0)
        .bond(0, 1, BondOrder::Single)
        .bond(1, 2, BondOrder::Double)
        .build();
    let scene = depict(&molecule, &RingLookup::empty(), &DepictionModel::default());
    let bounds = scene.bounds().unwrap();

    for group in scene.symbols() {
        for shape in group.shapes() {
            for p in shape.path.points() {
                assert!(bounds.contains(p), "symbol point {p:?} outside {bounds:?}");
            }
        }
    }
    for shape in scene.bonds() {
        for p in shape.path.points() {
            assert!(bounds.contains(p), "bond point {p:?} outside {bounds:?}");
        }
    }
}

#[test]
fn test_missing_coordinate_is_fatal() {
    let mut molecule = Molecule::new("broken");
    molecule.add_atom(Atom::new(Element::Oxygen));
    let model = DepictionModel::default();
    let err = Depiction::new(&model, &Cpk2dColors, &BoxGlyphs)
        .generate(&molecule, &RingLookup::empty())
        .unwrap_err();
    assert_eq!(err, DepictError::MissingCoordinates(AtomIndex(0)));
}

#[test]
fn test_empty_molecule_yields_empty_scene() {
    let molecule = Molecule::new("empty");
    let scene = depict(&molecule, &RingLookup::empty(), &DepictionModel::default());
    assert!(scene.is_empty());
    assert!(scene.bounds().is_none());
}

#[test]
fn test_pseudo_atom_skipped() {
    let molecule = MoleculeBuilder::new("r-group")
        .atom(Atom::pseudo("R1"), 0.0, 0.0)
        .atom(Atom::new(Element::Oxygen), 1.0, 0.0)
        .bond(0, 1, BondOrder::Single)
        .build();
    let scene = depict(&molecule, &RingLookup::empty(), &DepictionModel::default());
    // the pseudo atom gets no symbol; its bond still draws
    assert_eq!(scene.symbols().len(), 1);
    assert_eq!(stroke_count(&scene), 1);
}
