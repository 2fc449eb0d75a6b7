// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Ball-and-stick export of small molecules to XYZ, OBJ and X3D.
//!
//! molexport takes an atom list with per-atom neighbor lists (as produced by
//! a molecule editor or read from a V2000 molfile or PDB file), collapses the adjacency
//! into canonical bonds, and serializes the result as plain text.
//!
//! # Key entry points
//!
//! - [`molecule::Molecule`] - atoms, neighbor lists and bond orders
//! - [`molecule::molfile::read_molfile`] - V2000 molfile/SDF reader
//! - [`molecule::pdb::read_pdb`] - PDB ATOM/HETATM + CONECT reader
//! - [`mesh::build_mesh`] - sphere + cylinder triangle mesh
//! - [`export::ExportRequest`] - token-tagged export producing an
//!   [`export::ExportArtifact`]
//! - [`options::ExportOptions`] - hydrogen policy, tessellation, colors and
//!   header text, loadable from TOML presets
//!
//! # Pipeline
//!
//! ```text
//! Molecule ──canonical_bonds──▶ [Bond] ──build_mesh──▶ Mesh ──▶ OBJ
//!     │                            └──────build_scene──▶ [SceneNode] ──▶ X3D
//!     └──────────────────────────────────────────────────────────────▶ XYZ
//! ```
//!
//! All exporters are pure functions of their inputs. Hiding hydrogens drops
//! both their spheres and every bond touching them.

pub mod error;
pub mod export;
pub mod mesh;
pub mod molecule;
pub mod options;
pub mod util;

pub use error::ExportError;
pub use export::{ExportArtifact, ExportFormat, ExportRequest};
pub use molecule::{Atom, BondOrder, Molecule};
pub use options::ExportOptions;
