use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Comment placed on the second line of XYZ exports by default.
pub const DEFAULT_XYZ_COMMENT: &str = "Molecule exported by molexport";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Output", inline)]
#[serde(default)]
/// Free text and optional sections of the text formats.
pub struct OutputOptions {
    /// Name in the OBJ header comment (`# <title> OBJ export`).
    #[schemars(title = "OBJ Title")]
    pub obj_title: String,
    /// OBJ group name preceding the faces.
    #[schemars(title = "OBJ Group")]
    pub obj_group: String,
    /// Emit `vn` lines and `v//vn` face references in OBJ output.
    #[schemars(title = "OBJ Normals")]
    pub obj_normals: bool,
    /// Comment line of XYZ output.
    #[schemars(title = "XYZ Comment")]
    pub xyz_comment: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            obj_title: "molexport".to_owned(),
            obj_group: "MoleculeMesh".to_owned(),
            obj_normals: false,
            xyz_comment: DEFAULT_XYZ_COMMENT.to_owned(),
        }
    }
}
