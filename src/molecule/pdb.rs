//! Minimal PDB reader: ATOM/HETATM coordinates and CONECT connectivity.
//!
//! Only the first model is read. Elements come from columns 77–78, or from
//! the atom name when those columns are blank. CONECT records become
//! symmetric neighbor lists; listing the same partner more than once marks
//! a double or triple bond.

use rustc_hash::FxHashMap;

use super::{Atom, BondOrder, Molecule};
use crate::error::ExportError;

/// Partner columns of a CONECT record (bonded atom serials).
const CONECT_PARTNERS: [(usize, usize); 4] = [(11, 16), (16, 21), (21, 26), (26, 31)];

fn column(line: &str, start: usize, end: usize) -> Option<&str> {
    line.get(start..end.min(line.len())).map(str::trim)
}

fn record_name(line: &str) -> &str {
    line.get(0..6).unwrap_or(line).trim_end()
}

/// Upper-case first letter, lower-case rest (`CL` → `Cl`).
fn normalize_symbol(symbol: &str) -> Option<String> {
    let mut chars = symbol.chars().filter(char::is_ascii_alphabetic);
    let first = chars.next()?.to_ascii_uppercase();
    Some(
        std::iter::once(first)
            .chain(chars.map(|c| c.to_ascii_lowercase()))
            .collect(),
    )
}

/// Element from the atom name field (columns 13–16). A blank or digit in
/// column 13 means a one-letter element in column 14.
fn element_from_name(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let lead = chars.next()?;
    if lead == ' ' || lead.is_ascii_digit() {
        let symbol = chars.next().filter(char::is_ascii_alphabetic)?;
        return normalize_symbol(&symbol.to_string());
    }
    normalize_symbol(name.get(0..2).unwrap_or(name))
}

/// Parse one ATOM/HETATM line into `(serial, element, [x, y, z])`.
fn parse_atom_record(line: &str) -> Option<(usize, String, [f64; 3])> {
    let serial = column(line, 6, 11)?.parse().ok()?;
    let x = column(line, 30, 38)?.parse().ok()?;
    let y = column(line, 38, 46)?.parse().ok()?;
    let z = column(line, 46, 54)?.parse().ok()?;
    let element = column(line, 76, 78)
        .filter(|s| !s.is_empty())
        .and_then(normalize_symbol)
        .or_else(|| element_from_name(line.get(12..16)?))?;
    Some((serial, element, [x, y, z]))
}

/// Parse a CONECT line into the source serial and its listed partners.
fn parse_conect(line: &str) -> Option<(usize, Vec<usize>)> {
    let source = column(line, 6, 11)?.parse().ok()?;
    let partners = CONECT_PARTNERS
        .iter()
        .filter_map(|&(start, end)| column(line, start, end)?.parse().ok())
        .collect();
    Some((source, partners))
}

/// CONECT listings per direction, and each unordered pair in first-seen
/// order.
#[derive(Default)]
struct Connectivity {
    listings: FxHashMap<(usize, usize), u8>,
    pairs: Vec<(usize, usize)>,
}

impl Connectivity {
    fn record(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        if !self.listings.contains_key(&(a, b))
            && !self.listings.contains_key(&(b, a))
        {
            self.pairs.push((a.min(b), a.max(b)));
        }
        let count = self.listings.entry((a, b)).or_insert(0);
        *count = count.saturating_add(1);
    }

    fn order(&self, a: usize, b: usize) -> BondOrder {
        let listed = |key: (usize, usize)| self.listings.get(&key).copied().unwrap_or(0);
        BondOrder::from_raw(listed((a, b)).max(listed((b, a))).min(3))
    }
}

/// Read ATOM/HETATM records and CONECT bonds into a [`Molecule`].
///
/// Atoms get identities `0..n` in file order. A pair's bond order is the
/// larger of the two directions' repeat counts, capped at triple. CONECT
/// entries naming an unknown serial are skipped.
pub fn read_pdb(text: &str) -> Result<Molecule, ExportError> {
    let mut atoms = Vec::new();
    let mut positions: FxHashMap<usize, usize> = FxHashMap::default();
    let mut connectivity = Connectivity::default();
    let mut in_first_model = true;

    for (line_no, line) in text.lines().enumerate() {
        match record_name(line) {
            "ATOM" | "HETATM" if in_first_model => {
                let (serial, element, position) = parse_atom_record(line)
                    .ok_or_else(|| {
                        ExportError::StructureLoad(format!(
                            "line {}: invalid atom record",
                            line_no + 1
                        ))
                    })?;
                let at = atoms.len();
                if positions.insert(serial, at).is_some() {
                    log::warn!("pdb: duplicate atom serial {serial}, keeping the last");
                }
                atoms.push(Atom::new(element, position).with_index(at));
            }
            "ENDMDL" => in_first_model = false,
            "CONECT" => {
                let Some((source, partners)) = parse_conect(line) else {
                    log::debug!("pdb: skipping malformed CONECT on line {}", line_no + 1);
                    continue;
                };
                let Some(&a) = positions.get(&source) else {
                    log::debug!("pdb: CONECT names unknown serial {source}");
                    continue;
                };
                for partner in partners {
                    let Some(&b) = positions.get(&partner) else {
                        log::debug!("pdb: CONECT names unknown serial {partner}");
                        continue;
                    };
                    connectivity.record(a, b);
                }
            }
            "END" => break,
            _ => {}
        }
    }

    if atoms.is_empty() {
        return Err(ExportError::StructureLoad(
            "PDB text contains no ATOM or HETATM records".to_owned(),
        ));
    }

    let mut molecule = Molecule::new(atoms);
    for &(a, b) in &connectivity.pairs {
        molecule.add_bond(a, b, connectivity.order(a, b));
    }

    log::debug!(
        "read PDB with {} atoms and {} bonds",
        molecule.len(),
        connectivity.pairs.len()
    );
    Ok(molecule)
}
