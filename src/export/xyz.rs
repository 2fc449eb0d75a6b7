//! XYZ atom-list writer.
//!
//! ```text
//! <atom count>
//! <comment>
//! <element> <x> <y> <z>
//! ```
//!
//! Coordinates use the shortest round-trip `f64` formatting.

use std::fmt::{self, Write};

use crate::molecule::molfile::{parse_atom_line, parse_counts, END_MARKER};
use crate::molecule::Molecule;

/// Shortest round-trip display of a coordinate, with `-0` printed as `0`.
struct Plain(f64);

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn write_xyz<'a>(
    comment: &str,
    atoms: impl ExactSizeIterator<Item = (&'a str, [f64; 3])>,
) -> String {
    let mut out = format!("{}\n{comment}\n", atoms.len());
    for (element, [x, y, z]) in atoms {
        // Formatting into a String is infallible.
        let _ = writeln!(out, "{element} {} {} {}", Plain(x), Plain(y), Plain(z));
    }
    out
}

fn empty_block(comment: &str) -> String {
    format!("0\n{comment}\n")
}

/// Convert a molfile atom block to XYZ.
///
/// The counts line is the first line that reads as two unsigned integers,
/// either in the fixed 3-wide V2000 columns or as whitespace tokens. The
/// declared number of atom lines follow it; reading stops at
/// `M  END`. A missing counts line, an atom line that does not parse, or a
/// block that ends before the declared count yields an empty (`0`) result.
#[must_use]
pub fn write_from_molfile(text: &str, comment: &str) -> String {
    let mut lines = text.lines();
    let Some(atom_count) =
        lines.by_ref().find_map(|line| parse_counts(line).map(|(n, _)| n))
    else {
        log::warn!("xyz export: no counts line found");
        return empty_block(comment);
    };

    let mut atoms = Vec::new();
    for line in lines.take_while(|l| !l.contains(END_MARKER)).take(atom_count) {
        let Some(atom) = parse_atom_line(line) else {
            log::warn!("xyz export: malformed atom line {line:?}");
            return empty_block(comment);
        };
        atoms.push(atom);
    }
    if atoms.len() < atom_count {
        log::warn!(
            "xyz export: block declares {atom_count} atoms but holds {}",
            atoms.len()
        );
        return empty_block(comment);
    }

    write_xyz(
        comment,
        atoms.iter().map(|(element, xyz)| (element.as_str(), *xyz)),
    )
}

/// Dump the visible atoms of `molecule` as XYZ.
#[must_use]
pub fn write_from_molecule(
    molecule: &Molecule,
    show_hydrogens: bool,
    comment: &str,
) -> String {
    let atoms: Vec<_> = molecule
        .visible_atoms(show_hydrogens)
        .map(|(_, atom)| (atom.element.as_str(), [atom.x, atom.y, atom.z]))
        .collect();
    write_xyz(comment, atoms.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::test_fixtures::{
        carbon_ring_molfile, formaldehyde, FORMALDEHYDE_MOLFILE,
    };
    use crate::options::DEFAULT_XYZ_COMMENT;

    #[test]
    fn molfile_block_is_converted() {
        let xyz = write_from_molfile(FORMALDEHYDE_MOLFILE, DEFAULT_XYZ_COMMENT);
        let lines: Vec<&str> = xyz.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "4");
        assert_eq!(lines[1], DEFAULT_XYZ_COMMENT);
        assert_eq!(lines[2], "C 0 0 0");
        assert_eq!(lines[3], "O 1.21 0 0");
        assert_eq!(lines[4], "H -0.55 0.94 0");
        assert_eq!(lines[5], "H -0.55 -0.94 0");
    }

    #[test]
    fn whitespace_atom_lines_are_accepted() {
        let text = "\n\n\n2 1\n0.0 0.0 0.0 C\n1.2 0.0 0.0 O\nM  END\n";
        let xyz = write_from_molfile(text, "co");
        assert_eq!(xyz, "2\nco\nC 0 0 0\nO 1.2 0 0\n");
    }

    #[test]
    fn missing_counts_line_is_empty() {
        let xyz = write_from_molfile("no molfile here\nat all\n", "c");
        assert_eq!(xyz, "0\nc\n");
        assert_eq!(write_from_molfile("", "c"), "0\nc\n");
    }

    #[test]
    fn truncated_block_is_empty() {
        let text = "\n\n\n  3  0\n0.0 0.0 0.0 C\nM  END\n1.0 0.0 0.0 O\n";
        assert_eq!(write_from_molfile(text, "c"), "0\nc\n");
    }

    #[test]
    fn oversized_count_is_empty() {
        let text = "\n\n\n999999999999 0\n0 0 0 C\n";
        assert_eq!(write_from_molfile(text, "c"), "0\nc\n");
        let text = format!("\n\n\n1 {}\n0 0 0 C\n", usize::MAX);
        assert_eq!(write_from_molfile(&text, "c"), "1\nc\nC 0 0 0\n");
    }

    #[test]
    fn three_digit_counts_keep_every_atom() {
        let xyz = write_from_molfile(&carbon_ring_molfile(100), "ring");
        let lines: Vec<&str> = xyz.lines().collect();
        assert_eq!(lines[0], "100");
        assert_eq!(lines.len(), 102);
        assert_eq!(lines[101], "C 148.5 0 0");
    }

    #[test]
    fn malformed_atom_line_is_empty() {
        let text = "\n\n\n  2  0\n0.0 0.0 0.0 C\nnot an atom\nM  END\n";
        assert_eq!(write_from_molfile(text, "c"), "0\nc\n");
    }

    #[test]
    fn molecule_respects_hydrogen_policy() {
        let mol = formaldehyde();
        let hidden = write_from_molecule(&mol, false, "m");
        let shown = write_from_molecule(&mol, true, "m");
        assert!(hidden.starts_with("2\nm\n"));
        assert!(shown.starts_with("4\nm\n"));
        assert!(!hidden.contains("\nH "));
        assert_eq!(shown.lines().filter(|l| l.starts_with("H ")).count(), 2);
    }

    #[test]
    fn molecule_and_molfile_agree() {
        assert_eq!(
            write_from_molecule(&formaldehyde(), true, "m"),
            write_from_molfile(FORMALDEHYDE_MOLFILE, "m")
        );
    }
}
