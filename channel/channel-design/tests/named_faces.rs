//! Boundary names and design hand-off for the reference devices.

#![allow(clippy::unwrap_used)]

use channel_design::{
    BoundaryKind, DesignError, DesignInterface, RecordingInterface, SvgExportParams,
    exclude_points, export_lattice_svg, named_faces,
};
use channel_lattice::{Lattice, create_lattice};

fn two_inlet() -> Lattice {
    create_lattice(&[2, 1, 2, 3, 2, 1, 2, 3, 2, 1, 1], 5.0, 0.5).unwrap()
}

fn three_inlet() -> Lattice {
    create_lattice(&[3, 1, 1, 2, 3, 2, 1, 2, 3, 2, 1, 1], 5.0, 0.5).unwrap()
}

fn names(lattice: &Lattice) -> Vec<String> {
    named_faces(lattice)
        .unwrap()
        .iter()
        .map(|face| face.name())
        .collect()
}

#[test]
fn two_inlet_names() {
    assert_eq!(
        names(&two_inlet()),
        ["aqueous_inlet_1", "organic_inlet", "outlet"]
    );
}

#[test]
fn three_inlet_names() {
    assert_eq!(
        names(&three_inlet()),
        ["aqueous_inlet_1", "organic_inlet", "aqueous_inlet_2", "outlet"]
    );
}

#[test]
fn exclude_points_keeps_duplicates() {
    assert_eq!(exclude_points(&two_inlet()).unwrap().len(), 6);
    assert_eq!(exclude_points(&three_inlet()).unwrap().len(), 8);
}

#[test]
fn outlet_is_top_of_last_layer() {
    let lattice = three_inlet();
    let faces = named_faces(&lattice).unwrap();
    let outlet = faces.last().unwrap();

    assert_eq!(outlet.boundary, BoundaryKind::Outlet);
    for point in outlet.line.points() {
        assert!((point.y() - 27.5).abs() < 1e-9);
    }
    assert!(faces[..faces.len() - 1].iter().all(|f| f.boundary.is_inlet()));
}

#[test]
fn backend_receives_whole_lattice() {
    let lattice = two_inlet();
    let mut backend = RecordingInterface::new();
    backend.create_geometry(&lattice, 0.1).unwrap();

    assert_eq!(backend.points.len(), lattice.point_set().len());
    assert_eq!(backend.lines.len(), lattice.lines().count());
    assert_eq!(backend.named_faces, named_faces(&lattice).unwrap());
}

#[test]
fn backend_rejects_flat_extrusion() {
    let mut backend = RecordingInterface::new();
    assert_eq!(
        backend.create_geometry(&two_inlet(), 0.0).unwrap_err(),
        DesignError::InvalidExtrusionHeight(0.0)
    );
}

#[test]
fn svg_marks_every_face() {
    let svg = export_lattice_svg(&three_inlet(), &SvgExportParams::default()).unwrap();
    for name in ["aqueous_inlet_1", "organic_inlet", "aqueous_inlet_2", "outlet"] {
        assert!(svg.contains(&format!("<title>{name}</title>")), "missing {name}");
    }
}
