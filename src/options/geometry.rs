use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mesh::ball_and_stick::{
    DOUBLE_BOND_OFFSET, MULTI_BOND_RADIUS, SINGLE_BOND_RADIUS,
    TRIPLE_BOND_OFFSET,
};
use crate::mesh::primitives::{
    CYLINDER_SEGMENTS, SPHERE_LAT_BANDS, SPHERE_LONG_BANDS,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Tessellation and bond-stick dimensions, in angstroms where applicable.
pub struct GeometryOptions {
    /// Latitude bands per atom sphere.
    #[schemars(title = "Sphere Latitude Bands", range(min = 1, max = 64))]
    pub sphere_lat_bands: u32,
    /// Longitude bands per atom sphere.
    #[schemars(title = "Sphere Longitude Bands", range(min = 3, max = 64))]
    pub sphere_long_bands: u32,
    /// Radial segments per bond cylinder.
    #[schemars(title = "Cylinder Segments", range(min = 3, max = 64))]
    pub cylinder_segments: u32,
    /// Radius of a single-bond stick.
    #[schemars(title = "Single Bond Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub single_bond_radius: f64,
    /// Radius of each stick of a double or triple bond.
    #[schemars(title = "Multi Bond Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub multi_bond_radius: f64,
    /// Perpendicular offset of double-bond sticks.
    #[schemars(skip)]
    pub double_bond_offset: f64,
    /// Perpendicular offset of the outer triple-bond sticks.
    #[schemars(skip)]
    pub triple_bond_offset: f64,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            sphere_lat_bands: SPHERE_LAT_BANDS,
            sphere_long_bands: SPHERE_LONG_BANDS,
            cylinder_segments: CYLINDER_SEGMENTS,
            single_bond_radius: SINGLE_BOND_RADIUS,
            multi_bond_radius: MULTI_BOND_RADIUS,
            double_bond_offset: DOUBLE_BOND_OFFSET,
            triple_bond_offset: TRIPLE_BOND_OFFSET,
        }
    }
}
