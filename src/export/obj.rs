//! Wavefront OBJ writer for a [`Mesh`].

use std::fmt::{self, Write};

use super::Fixed;
use crate::mesh::Mesh;
use crate::options::OutputOptions;

/// Write `mesh` as OBJ text into `out`.
///
/// Layout: a three-line comment header, a blank line, the `v` records, a
/// blank line, the `g` group line and the `f` records. With
/// `options.obj_normals` the `vn` records follow the `v` records and faces
/// reference both (`i//i`).
pub fn write_obj<W: Write>(
    out: &mut W,
    mesh: &Mesh,
    options: &OutputOptions,
) -> fmt::Result {
    writeln!(out, "# {} OBJ export", options.obj_title)?;
    writeln!(out, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(out, "# Faces: {}", mesh.face_count())?;
    writeln!(out)?;

    for v in &mesh.vertices {
        writeln!(
            out,
            "v {} {} {}",
            Fixed::fixed4(v.x),
            Fixed::fixed4(v.y),
            Fixed::fixed4(v.z)
        )?;
    }
    if options.obj_normals {
        for n in &mesh.normals {
            writeln!(
                out,
                "vn {} {} {}",
                Fixed::fixed4(n.x),
                Fixed::fixed4(n.y),
                Fixed::fixed4(n.z)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "g {}", options.obj_group)?;
    for [a, b, c] in &mesh.faces {
        if options.obj_normals {
            writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
        } else {
            writeln!(out, "f {a} {b} {c}")?;
        }
    }
    Ok(())
}

/// Render `mesh` as an OBJ string.
#[must_use]
pub fn to_obj_string(mesh: &Mesh, options: &OutputOptions) -> String {
    // ~40 bytes per vertex line, ~16 per face line.
    let mut out =
        String::with_capacity(64 + mesh.vertex_count() * 40 + mesh.face_count() * 16);
    // Formatting into a String is infallible.
    let _ = write_obj(&mut out, mesh, options);
    out
}
