//! Crate-level error types.
//!
//! The exporters themselves never fail; errors only come from loading
//! structures and option presets, and from choosing a format by name.

use std::fmt;

/// Errors produced by the molexport crate.
#[derive(Debug)]
pub enum ExportError {
    /// Failed to load a molecular structure (molfile or JSON).
    StructureLoad(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Export format name not recognized.
    UnknownFormat(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructureLoad(msg) => {
                write!(f, "structure load error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownFormat(name) => {
                write!(f, "unknown export format: {name:?}")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
