//! X3D ball-and-stick scene.
//!
//! Atoms are translated spheres. Each bond is one Transform placed at the
//! bond midpoint and rotated so local +Y runs along the bond; its one to
//! three cylinders are offset along local X inside it.

use glam::DVec3;

use super::scene::{write_document, Material, Primitive, SceneNode};
use crate::mesh::ball_and_stick::BondLayout;
use crate::molecule::element::unpack_rgb;
use crate::molecule::{canonical_bonds, Atom, Bond, BondOrder, Molecule};
use crate::options::{ColorOptions, ExportOptions};
use crate::util::vector::AxisAngle;

const ATOM_SHININESS: f32 = 0.3;
const ATOM_AMBIENT_INTENSITY: f32 = 0.3;
const SINGLE_BOND_SHININESS: f32 = 0.2;

fn atom_node(number: usize, atom: &Atom, colors: &ColorOptions) -> [SceneNode; 2] {
    // A packed 0 is the host's "unset" value, not black.
    let diffuse = atom
        .color
        .filter(|&packed| packed != 0)
        .map_or_else(|| atom.element_kind().display_color(), unpack_rgb);
    let comment = format!(
        "Atom {number}: {} at ({:.3}, {:.3}, {:.3})",
        atom.element, atom.x, atom.y, atom.z
    );
    let shape = SceneNode::Shape {
        primitive: Primitive::Sphere {
            radius: atom.element_kind().render_radius(),
        },
        material: Material {
            diffuse,
            specular: Some(colors.atom_specular),
            shininess: Some(ATOM_SHININESS),
            ambient_intensity: Some(ATOM_AMBIENT_INTENSITY),
        },
    };
    [
        SceneNode::Comment(comment),
        SceneNode::translate(atom.position(), vec![shape]),
    ]
}

fn bond_label(bond: &Bond) -> String {
    let kind = match bond.order {
        BondOrder::Single => "Bond",
        BondOrder::Double => "Double Bond",
        BondOrder::Triple => "Triple Bond",
    };
    format!("{kind} {}-{}", bond.id_a, bond.id_b)
}

fn bond_node(
    bond: &Bond,
    molecule: &Molecule,
    options: &ExportOptions,
) -> [SceneNode; 2] {
    let a = molecule.atoms[bond.atom_a].position();
    let b = molecule.atoms[bond.atom_b].position();
    let axis = b - a;
    let layout = BondLayout::for_order(bond.order, &options.geometry);

    let material = if bond.order == BondOrder::Single {
        Material {
            specular: Some(options.colors.bond_specular),
            shininess: Some(SINGLE_BOND_SHININESS),
            ..Material::diffuse(options.colors.bond)
        }
    } else {
        Material::diffuse(options.colors.bond)
    };
    let shape = SceneNode::Shape {
        primitive: Primitive::Cylinder {
            radius: layout.radius,
            height: axis.length(),
        },
        material,
    };

    let children = layout
        .offsets()
        .iter()
        .map(|&offset| {
            if offset == 0.0 {
                shape.clone()
            } else {
                SceneNode::translate(DVec3::X * offset, vec![shape.clone()])
            }
        })
        .collect();

    [
        SceneNode::Comment(bond_label(bond)),
        SceneNode::Transform {
            translation: (a + b) * 0.5,
            rotation: Some(AxisAngle::align_y_to(axis)),
            children,
        },
    ]
}

/// Scene nodes for `molecule`: count comment, background, atoms, bonds.
#[must_use]
pub fn build_scene(molecule: &Molecule, options: &ExportOptions) -> Vec<SceneNode> {
    let show_hydrogens = options.display.show_hydrogens;
    let atoms: Vec<&Atom> = molecule
        .visible_atoms(show_hydrogens)
        .map(|(_, atom)| atom)
        .collect();
    let bonds = canonical_bonds(molecule, show_hydrogens);

    let mut nodes = Vec::with_capacity(2 + 2 * (atoms.len() + bonds.len()));
    nodes.push(SceneNode::Comment(format!(
        "Molecular Structure: {} atoms",
        atoms.len()
    )));
    nodes.push(SceneNode::Background {
        sky_color: options.colors.background,
    });
    for (i, atom) in atoms.iter().enumerate() {
        nodes.extend(atom_node(i + 1, atom, &options.colors));
    }
    for bond in &bonds {
        nodes.extend(bond_node(bond, molecule, options));
    }
    nodes
}

/// Render `molecule` as an X3D 3.0 document.
#[must_use]
pub fn to_x3d_string(molecule: &Molecule, options: &ExportOptions) -> String {
    let nodes = build_scene(molecule, options);
    let mut out = String::new();
    // Formatting into a String is infallible.
    let _ = write_document(&mut out, &nodes);
    out
}
