//! Minimal MDL molfile (V2000) block reader.
//!
//! Only the counts line, the atom block and the bond block are read; the
//! property block and any further SDF records are ignored. This is enough to
//! turn an editor's molfile into a [`Molecule`] for export.

use super::{Atom, BondOrder, Molecule};
use crate::error::ExportError;

/// Marker that closes a molfile's property block.
pub const END_MARKER: &str = "M  END";

/// Marker separating SDF records.
const RECORD_SEPARATOR: &str = "$$$$";

/// Parse a counts line into `(atom count, bond count)`.
///
/// Tries the fixed V2000 columns first (two 3-wide fields, so `100100`
/// reads as 100 atoms and 100 bonds), then falls back to the first two
/// whitespace-separated tokens.
pub(crate) fn parse_counts(line: &str) -> Option<(usize, usize)> {
    parse_counts_columns(line).or_else(|| {
        let mut tokens = line.split_whitespace();
        let atoms = tokens.next()?.parse().ok()?;
        let bonds = tokens.next()?.parse().ok()?;
        Some((atoms, bonds))
    })
}

fn parse_counts_columns(line: &str) -> Option<(usize, usize)> {
    let atoms = line.get(0..3)?.trim().parse().ok()?;
    let bonds = line.get(3..6)?.trim().parse().ok()?;
    Some((atoms, bonds))
}

/// Parse one atom line into `(element, [x, y, z])`.
///
/// Tries the fixed V2000 columns first (x, y, z in 10-wide fields, symbol at
/// columns 32–34) and falls back to whitespace-separated `x y z symbol`.
pub(crate) fn parse_atom_line(line: &str) -> Option<(String, [f64; 3])> {
    parse_atom_columns(line).or_else(|| parse_atom_tokens(line))
}

fn parse_atom_columns(line: &str) -> Option<(String, [f64; 3])> {
    let field = |start: usize, end: usize| line.get(start..end.min(line.len()));
    let x = field(0, 10)?.trim().parse().ok()?;
    let y = field(10, 20)?.trim().parse().ok()?;
    let z = field(20, 30)?.trim().parse().ok()?;
    let symbol = field(31, 34)?.trim();
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((symbol.to_owned(), [x, y, z]))
}

fn parse_atom_tokens(line: &str) -> Option<(String, [f64; 3])> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    let symbol = tokens.next()?;
    Some((symbol.to_owned(), [x, y, z]))
}

/// Read the first record of a V2000 molfile or SDF into a [`Molecule`].
///
/// Atoms get explicit identities `0..n` in file order and every bond record
/// is written onto both endpoints with the same order.
pub fn read_molfile(text: &str) -> Result<Molecule, ExportError> {
    let lines: Vec<&str> = text
        .lines()
        .take_while(|l| l.trim() != RECORD_SEPARATOR)
        .collect();

    let counts_line = lines.get(3).ok_or_else(|| {
        ExportError::StructureLoad(
            "molfile must contain a header block and a counts line".to_owned(),
        )
    })?;
    if counts_line.contains("V3000") {
        return Err(ExportError::StructureLoad(
            "V3000 molfiles are not supported".to_owned(),
        ));
    }
    let (atom_count, bond_count) = parse_counts(counts_line).ok_or_else(|| {
        ExportError::StructureLoad(format!(
            "line 4: invalid counts line {counts_line:?}"
        ))
    })?;

    let atom_start: usize = 4;
    let block_end = atom_start
        .checked_add(atom_count)
        .and_then(|bond_start| Some((bond_start, bond_start.checked_add(bond_count)?)))
        .filter(|&(_, end)| end <= lines.len());
    let Some((bond_start, bond_end)) = block_end else {
        return Err(ExportError::StructureLoad(format!(
            "molfile declares {atom_count} atoms and {bond_count} bonds but \
             ends after {} lines",
            lines.len()
        )));
    };

    let mut atoms = Vec::with_capacity(atom_count);
    for (i, line) in lines[atom_start..bond_start].iter().enumerate() {
        let (symbol, position) = parse_atom_line(line).ok_or_else(|| {
            ExportError::StructureLoad(format!(
                "line {}: invalid atom line",
                atom_start + i + 1
            ))
        })?;
        atoms.push(Atom::new(symbol, position).with_index(i));
    }

    let mut molecule = Molecule::new(atoms);
    for (i, line) in lines[bond_start..bond_end].iter().enumerate()
    {
        let line_no = bond_start + i + 1;
        let (a, b, order) = parse_bond_line(line, atom_count).ok_or_else(|| {
            ExportError::StructureLoad(format!(
                "line {line_no}: invalid bond line"
            ))
        })?;
        molecule.add_bond(a, b, order);
    }

    log::debug!(
        "read molfile with {atom_count} atoms and {bond_count} bonds"
    );
    Ok(molecule)
}

/// Parse `a b order …` with 1-based atom numbers into 0-based positions.
fn parse_bond_line(
    line: &str,
    atom_count: usize,
) -> Option<(usize, usize, BondOrder)> {
    let (a, b, order) = parse_bond_columns(line)
        .or_else(|| {
            let mut tokens = line.split_whitespace();
            Some((
                tokens.next()?.parse().ok()?,
                tokens.next()?.parse().ok()?,
                tokens.next()?.parse().ok()?,
            ))
        })?;
    let in_range = |n: usize| (1..=atom_count).contains(&n);
    (in_range(a) && in_range(b))
        .then(|| (a - 1, b - 1, BondOrder::from_raw(order)))
}

/// Fixed V2000 bond columns: two 3-wide atom numbers and a 3-wide order.
/// Needed when atom numbers above 99 run together (`100101  1`).
fn parse_bond_columns(line: &str) -> Option<(usize, usize, u8)> {
    let a = line.get(0..3)?.trim().parse().ok()?;
    let b = line.get(3..6)?.trim().parse().ok()?;
    let order = line.get(6..9)?.trim().parse().ok()?;
    Some((a, b, order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::canonical_bonds;
    use crate::molecule::test_fixtures::{
        carbon_ring_molfile, FORMALDEHYDE_MOLFILE as FORMALDEHYDE,
    };

    #[test]
    fn reads_atoms_and_bonds() {
        let mol = read_molfile(FORMALDEHYDE).unwrap();
        assert_eq!(mol.len(), 4);
        assert_eq!(mol.atoms[1].element, "O");
        assert_eq!(mol.atoms[2].position().y, 0.94);
        assert_eq!(mol.atoms[0].bonds, vec![1, 2, 3]);
        assert_eq!(mol.atoms[0].bond_orders, vec![2, 1, 1]);
        assert_eq!(mol.atoms[1].bonds, vec![0]);
        assert_eq!(canonical_bonds(&mol, true).len(), 3);
    }

    #[test]
    fn counts_line_detection() {
        assert_eq!(
            parse_counts("  4  3  0  0  0  0  0  0  0  0999 V2000"),
            Some((4, 3))
        );
        assert_eq!(parse_counts("    0.0000    0.0000"), None);
        assert_eq!(parse_counts("12"), None);
        assert_eq!(parse_counts("2 1"), Some((2, 1)));
        assert_eq!(
            parse_counts("100100  0  0  0  0  0  0  0  0999 V2000"),
            Some((100, 100))
        );
        assert_eq!(parse_counts(""), None);
    }

    #[test]
    fn atom_line_falls_back_to_tokens() {
        assert_eq!(
            parse_atom_line("1.5 -2.25 3 Cl"),
            Some(("Cl".to_owned(), [1.5, -2.25, 3.0]))
        );
        assert_eq!(parse_atom_line("M  END"), None);
    }

    #[test]
    fn wide_atom_numbers_use_fixed_columns() {
        assert_eq!(
            parse_bond_line("100101  2  0", 120),
            Some((99, 100, BondOrder::Double))
        );
    }

    #[test]
    fn truncated_block_is_an_error() {
        let truncated: String =
            FORMALDEHYDE.lines().take(6).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            read_molfile(&truncated),
            Err(ExportError::StructureLoad(_))
        ));
    }

    #[test]
    fn out_of_range_bond_is_an_error() {
        let bad = FORMALDEHYDE.replace("  1  4  1", "  1  9  1");
        assert!(read_molfile(&bad).is_err());
    }

    #[test]
    fn v3000_is_rejected() {
        let v3000 = "x\n\n\n  0  0  0     0  0            999 V3000\nM  END\n";
        assert!(read_molfile(v3000).is_err());
    }

    #[test]
    fn three_digit_counts_are_read() {
        let mol = read_molfile(&carbon_ring_molfile(100)).unwrap();
        assert_eq!(mol.len(), 100);
        assert_eq!(canonical_bonds(&mol, true).len(), 100);
        assert_eq!(mol.atoms[99].bonds, vec![98, 0]);
    }

    #[test]
    fn huge_counts_are_an_error() {
        let text = format!("x\n\n\n1 {}\n0 0 0 C\n", usize::MAX);
        assert!(matches!(
            read_molfile(&text),
            Err(ExportError::StructureLoad(_))
        ));
        assert!(read_molfile("x\n\n\n999999999999 0\n0 0 0 C\n").is_err());
    }
}
