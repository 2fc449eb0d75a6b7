//! Text serializers for the three export formats.
//!
//! - [`xyz`]: atom list (element + coordinates)
//! - [`obj`]: triangulated ball-and-stick mesh
//! - [`x3d`]: XML scene graph built from [`scene`] nodes
//!
//! Every writer is a pure function from a borrowed [`Molecule`] and
//! [`ExportOptions`] to an owned `String`. The host correlates calls with
//! results through [`ExportRequest`]/[`ExportArtifact`].

pub mod obj;
pub mod scene;
pub mod x3d;
pub mod xyz;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ExportError;
use crate::mesh::build_mesh;
use crate::molecule::Molecule;
use crate::options::ExportOptions;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Plain XYZ atom list.
    Xyz,
    /// Wavefront OBJ mesh.
    Obj,
    /// X3D 3.0 scene.
    X3d,
}

impl ExportFormat {
    /// Every supported format.
    pub const ALL: [Self; 3] = [Self::Xyz, Self::Obj, Self::X3d];

    /// File extension without the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Obj => "obj",
            Self::X3d => "x3d",
        }
    }

    /// MIME type for downloads.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Xyz => "chemical/x-xyz",
            Self::Obj => "model/obj",
            Self::X3d => "model/x3d+xml",
        }
    }

    /// `molecule.<ext>`
    #[must_use]
    pub fn default_file_name(self) -> String {
        format!("molecule.{}", self.extension())
    }

    /// Format implied by a path's extension, if any.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(name))
            .ok_or_else(|| ExportError::UnknownFormat(s.to_owned()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Fixed-point display of an `f64` that never prints a negative zero.
///
/// `Fixed(-0.00001, 4)` renders as `0.0000`, not `-0.0000`.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64, pub usize);

impl Fixed {
    /// Four decimals (coordinates, lengths, axes, angles).
    #[must_use]
    pub fn fixed4(value: f64) -> Self {
        Self(value, 4)
    }

    /// Three decimals (colors).
    #[must_use]
    pub fn fixed3(value: f64) -> Self {
        Self(value, 3)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.*}", self.1, self.0);
        match text.strip_prefix('-') {
            Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => {
                f.write_str(rest)
            }
            _ => f.write_str(&text),
        }
    }
}

/// Serialize `molecule` in `format`.
#[must_use]
pub fn export_molecule(
    format: ExportFormat,
    molecule: &Molecule,
    options: &ExportOptions,
) -> String {
    match format {
        ExportFormat::Xyz => xyz::write_from_molecule(
            molecule,
            options.display.show_hydrogens,
            &options.output.xyz_comment,
        ),
        ExportFormat::Obj => {
            obj::to_obj_string(&build_mesh(molecule, options), &options.output)
        }
        ExportFormat::X3d => x3d::to_x3d_string(molecule, options),
    }
}

/// One export call, tagged with a caller-chosen token.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    /// Echoed back on the artifact so callers can match results to calls.
    pub token: u64,
    /// Requested format.
    pub format: ExportFormat,
    /// Structure to export.
    pub molecule: &'a Molecule,
}

/// The finished export of one [`ExportRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Token of the originating request.
    pub token: u64,
    /// Format of `body`.
    pub format: ExportFormat,
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of `body`.
    pub mime_type: &'static str,
    /// Serialized text.
    pub body: String,
}

impl ExportRequest<'_> {
    /// Run the export.
    #[must_use]
    pub fn run(&self, options: &ExportOptions) -> ExportArtifact {
        let body = export_molecule(self.format, self.molecule, options);
        log::info!(
            "export #{} produced {} bytes of {}",
            self.token,
            body.len(),
            self.format
        );
        ExportArtifact {
            token: self.token,
            format: self.format,
            file_name: self.format.default_file_name(),
            mime_type: self.format.mime_type(),
            body,
        }
    }
}
