use serde::{Deserialize, Serialize};

/// Scene-graph colors that are not tied to an element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB sky color of the X3D background.
    pub background: [f32; 3],
    /// RGB diffuse color of bond cylinders.
    pub bond: [f32; 3],
    /// RGB specular color of atom spheres.
    pub atom_specular: [f32; 3],
    /// RGB specular color of single-bond cylinders.
    pub bond_specular: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0],
            bond: [0.7, 0.7, 0.7],
            atom_specular: [0.5, 0.5, 0.5],
            bond_specular: [0.3, 0.3, 0.3],
        }
    }
}
