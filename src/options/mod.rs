//! Export options with TOML preset support.
//!
//! Everything tweakable about an export (hydrogen policy, tessellation,
//! bond-stick dimensions, scene colors, free-text header lines) lives here.
//! Options serialize to/from TOML so a preset file can be handed to the
//! command-line tool with `--options`.

mod colors;
mod display;
mod geometry;
mod output;

use std::path::Path;

pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use geometry::GeometryOptions;
pub use output::{OutputOptions, DEFAULT_XYZ_COMMENT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[geometry]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ExportOptions {
    /// Atom visibility.
    pub display: DisplayOptions,
    /// Tessellation and bond dimensions.
    pub geometry: GeometryOptions,
    /// Scene-graph colors.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Header text and optional output sections.
    pub output: OutputOptions,
}

impl ExportOptions {
    /// Default options with the given hydrogen policy.
    #[must_use]
    pub fn with_hydrogens(show_hydrogens: bool) -> Self {
        let mut options = Self::default();
        options.display.show_hydrogens = show_hydrogens;
        options
    }

    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ExportOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path).map_err(ExportError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ExportError> {
        toml::from_str(content)
            .map_err(|e| ExportError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ExportError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ExportError::Io)?;
        }
        std::fs::write(path, content).map_err(ExportError::Io)
    }

    /// Preset names (TOML file stems) in `dir`, sorted. An unreadable
    /// directory yields no presets.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
            })
            .collect();
        names.sort();
        names
    }
}
