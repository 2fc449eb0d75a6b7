//! Triangle mesh generation for ball-and-stick molecule exports.
//!
//! [`Mesh`] is a single indexed buffer that sphere and cylinder generators
//! append into ([`primitives`]). [`ball_and_stick::build_mesh`] walks a
//! [`Molecule`](crate::molecule::Molecule) and emits one sphere per visible
//! atom followed by the cylinders of every canonical bond.
//!
//! Face indices are 1-based, matching the export formats, and always refer
//! to vertices of the same mesh.

pub mod ball_and_stick;
pub mod primitives;

use glam::DVec3;

pub use ball_and_stick::build_mesh;

/// Accumulated vertices, per-vertex normals and triangles for one export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<DVec3>,
    /// Unit normal for each vertex, aligned with `vertices`.
    pub normals: Vec<DVec3>,
    /// Triangles as 1-based vertex indices.
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 1-based index the next pushed vertex will get.
    fn next_index(&self) -> usize {
        self.vertices.len() + 1
    }

    fn push_vertex(&mut self, position: DVec3, normal: DVec3) {
        self.vertices.push(position);
        self.normals.push(normal);
    }

    /// Append another mesh, shifting its face indices past the vertices
    /// already present.
    pub fn append(&mut self, other: &Mesh) {
        let offset = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| [f[0] + offset, f[1] + offset, f[2] + offset]),
        );
    }
}
