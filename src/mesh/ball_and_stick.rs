//! Ball-and-stick mesh for a whole molecule.
//!
//! Atoms become spheres sized by element, bonds become one to three
//! cylinders depending on order. Multi-bond cylinders are spread along a
//! perpendicular to the bond so they stay visible from most angles.

use glam::DVec3;

use super::Mesh;
use crate::molecule::{canonical_bonds, BondOrder, Molecule};
use crate::options::{ExportOptions, GeometryOptions};
use crate::util::vector::{normalize_or, perpendicular};

/// Radius of the single cylinder drawn for a single bond.
pub const SINGLE_BOND_RADIUS: f64 = 0.08;

/// Radius of each cylinder of a double or triple bond.
pub const MULTI_BOND_RADIUS: f64 = 0.04;

/// Perpendicular offset of the two double-bond cylinders.
pub const DOUBLE_BOND_OFFSET: f64 = 0.10;

/// Perpendicular offset of the two outer triple-bond cylinders.
pub const TRIPLE_BOND_OFFSET: f64 = 0.12;

/// Cylinder radius and signed perpendicular offsets for one bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondLayout {
    /// Radius shared by every cylinder of the bond.
    pub radius: f64,
    offsets: [f64; 3],
    count: usize,
}

impl BondLayout {
    /// Layout for `order` under the given geometry settings.
    ///
    /// - single: one thick cylinder on the bond axis
    /// - double: two thin cylinders at ±offset, nothing on the axis
    /// - triple: one thin cylinder on the axis plus two at ±offset
    #[must_use]
    pub fn for_order(order: BondOrder, geometry: &GeometryOptions) -> Self {
        match order {
            BondOrder::Single => Self {
                radius: geometry.single_bond_radius,
                offsets: [0.0; 3],
                count: 1,
            },
            BondOrder::Double => {
                let d = geometry.double_bond_offset;
                Self {
                    radius: geometry.multi_bond_radius,
                    offsets: [d, -d, 0.0],
                    count: 2,
                }
            }
            BondOrder::Triple => {
                let d = geometry.triple_bond_offset;
                Self {
                    radius: geometry.multi_bond_radius,
                    offsets: [0.0, d, -d],
                    count: 3,
                }
            }
        }
    }

    /// Signed offsets along the bond perpendicular, one per cylinder.
    #[must_use]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets[..self.count]
    }

    /// Number of cylinders.
    #[must_use]
    pub fn cylinder_count(&self) -> usize {
        self.count
    }
}

/// One cylinder to draw for a bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCylinder {
    /// Start point (offset from the first atom).
    pub start: DVec3,
    /// End point (offset from the second atom).
    pub end: DVec3,
    /// Cylinder radius.
    pub radius: f64,
    /// Offset vector applied to both endpoints.
    pub offset: DVec3,
}

/// Cylinders representing a bond of `order` between two atom centers.
///
/// The offset direction is [`perpendicular`] to the bond; a zero-length
/// bond uses +X as its direction so nothing becomes NaN.
#[must_use]
pub fn bond_cylinders(
    start: DVec3,
    end: DVec3,
    order: BondOrder,
    geometry: &GeometryOptions,
) -> Vec<BondCylinder> {
    let unit = normalize_or(end - start, DVec3::X);
    let perp = perpendicular(unit);
    let layout = BondLayout::for_order(order, geometry);

    layout
        .offsets()
        .iter()
        .map(|&d| {
            let offset = perp * d;
            BondCylinder {
                start: start + offset,
                end: end + offset,
                radius: layout.radius,
                offset,
            }
        })
        .collect()
}

/// Build the full ball-and-stick mesh of `molecule`.
///
/// Spheres for visible atoms come first, in atom order, followed by the
/// cylinders of each canonical bond in canonical order.
#[must_use]
pub fn build_mesh(molecule: &Molecule, options: &ExportOptions) -> Mesh {
    let show_hydrogens = options.display.show_hydrogens;
    let geometry = &options.geometry;
    let mut mesh = Mesh::new();

    for (_, atom) in molecule.visible_atoms(show_hydrogens) {
        mesh.push_sphere(
            atom.position(),
            atom.element_kind().render_radius(),
            geometry.sphere_lat_bands,
            geometry.sphere_long_bands,
        );
    }

    let bonds = canonical_bonds(molecule, show_hydrogens);
    for bond in &bonds {
        let a = molecule.atoms[bond.atom_a].position();
        let b = molecule.atoms[bond.atom_b].position();
        for cyl in bond_cylinders(a, b, bond.order, geometry) {
            mesh.push_cylinder(
                cyl.start,
                cyl.end,
                cyl.radius,
                geometry.cylinder_segments,
            );
        }
    }

    log::debug!(
        "built mesh: {} vertices, {} faces from {} atoms and {} bonds",
        mesh.vertex_count(),
        mesh.face_count(),
        molecule.len(),
        bonds.len()
    );
    mesh
}
