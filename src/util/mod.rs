//! Shared utilities.
//!
//! Vector math used by the mesh builder and the scene-graph writer.

pub mod vector;
