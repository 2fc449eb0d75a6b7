//! Collapse per-atom neighbor lists into a set of undirected bonds.

use rustc_hash::FxHashSet;

use super::{BondOrder, Molecule, Resolution};

/// An undirected bond between two atoms.
///
/// `id_a < id_b` always holds. `atom_a`/`atom_b` are the matching positions
/// in [`Molecule::atoms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Lower atom identity.
    pub id_a: usize,
    /// Higher atom identity.
    pub id_b: usize,
    /// Position of the `id_a` atom.
    pub atom_a: usize,
    /// Position of the `id_b` atom.
    pub atom_b: usize,
    /// Bond multiplicity.
    pub order: BondOrder,
}

impl Bond {
    /// Canonical identity pair, lower first.
    #[must_use]
    pub fn key(&self) -> (usize, usize) {
        (self.id_a, self.id_b)
    }

    /// Whether `position` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, position: usize) -> bool {
        self.atom_a == position || self.atom_b == position
    }
}

/// Deduplicate the molecule's neighbor lists into canonical bonds.
///
/// Atoms are visited in order and each atom's neighbors in list order, so
/// the output is deterministic for a given input; callers should still
/// treat it as a set. When both endpoints list the bond with different
/// orders, the side visited first wins. Self-references, unresolvable
/// neighbors and (with `show_hydrogens == false`) bonds touching a hydrogen
/// are dropped.
#[must_use]
pub fn canonical_bonds(molecule: &Molecule, show_hydrogens: bool) -> Vec<Bond> {
    let resolver = molecule.resolver();
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut bonds = Vec::new();

    for (position, atom) in molecule.atoms.iter().enumerate() {
        let Some(id) = resolver.id_of(position) else {
            continue;
        };
        for (neighbor, order) in atom.neighbors() {
            let Some(resolution) = resolver.resolve(neighbor) else {
                log::debug!(
                    "atom {id} lists neighbor {neighbor}, which does not \
                     exist; skipping"
                );
                continue;
            };
            if let Resolution::Positional(p) = resolution {
                log::warn!(
                    "neighbor {neighbor} of atom {id} matched no atom \
                     identity; falling back to the atom at position {p}"
                );
            }

            let other_position = resolution.position();
            let Some(other_id) = resolver.id_of(other_position) else {
                continue;
            };
            if other_id == id {
                continue;
            }

            let other = &molecule.atoms[other_position];
            if !show_hydrogens && (atom.is_hydrogen() || other.is_hydrogen()) {
                continue;
            }

            let bond = if id < other_id {
                Bond {
                    id_a: id,
                    id_b: other_id,
                    atom_a: position,
                    atom_b: other_position,
                    order,
                }
            } else {
                Bond {
                    id_a: other_id,
                    id_b: id,
                    atom_a: other_position,
                    atom_b: position,
                    order,
                }
            };
            if seen.insert(bond.key()) {
                bonds.push(bond);
            }
        }
    }

    log::debug!(
        "canonicalized {} bonds over {} atoms",
        bonds.len(),
        molecule.len()
    );
    bonds
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::molecule::test_fixtures::{
        carbon_monoxide, formaldehyde, random_molecule,
    };
    use crate::molecule::Atom;

    fn as_set(bonds: &[Bond]) -> BTreeSet<(usize, usize, u8)> {
        bonds
            .iter()
            .map(|b| (b.id_a, b.id_b, b.order.multiplicity()))
            .collect()
    }

    #[test]
    fn doubly_listed_bond_appears_once() {
        let bonds = canonical_bonds(&carbon_monoxide(), false);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].key(), (0, 1));
        assert_eq!(bonds[0].order, BondOrder::Single);
    }

    #[test]
    fn pairs_are_lower_first() {
        let mut mol = Molecule::new(vec![
            Atom::new("C", [0.0; 3]),
            Atom::new("C", [1.5, 0.0, 0.0]),
            Atom::new("C", [3.0, 0.0, 0.0]),
        ]);
        // Listed only from the higher side.
        mol.atoms[2].bonds = vec![0];
        mol.atoms[2].bond_orders = vec![1];
        let bonds = canonical_bonds(&mol, true);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].key(), (0, 2));
        assert_eq!((bonds[0].atom_a, bonds[0].atom_b), (0, 2));
    }

    #[test]
    fn direction_of_encoding_does_not_matter() {
        let base = || {
            Molecule::new(vec![
                Atom::new("C", [0.0; 3]),
                Atom::new("N", [1.1, 0.0, 0.0]),
            ])
        };
        let mut forward = base();
        forward.atoms[0].bonds = vec![1];
        forward.atoms[0].bond_orders = vec![3];
        let mut backward = base();
        backward.atoms[1].bonds = vec![0];
        backward.atoms[1].bond_orders = vec![3];

        assert_eq!(
            as_set(&canonical_bonds(&forward, true)),
            as_set(&canonical_bonds(&backward, true))
        );
    }

    #[test]
    fn first_visited_side_wins_on_conflict() {
        let mut mol = Molecule::new(vec![
            Atom::new("C", [0.0; 3]),
            Atom::new("C", [1.3, 0.0, 0.0]),
        ]);
        mol.atoms[0].bonds = vec![1];
        mol.atoms[0].bond_orders = vec![2];
        mol.atoms[1].bonds = vec![0];
        mol.atoms[1].bond_orders = vec![1];
        let bonds = canonical_bonds(&mol, true);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].order, BondOrder::Double);
    }

    #[test]
    fn self_references_and_dangling_neighbors_are_absorbed() {
        let mut mol = Molecule::new(vec![
            Atom::new("C", [0.0; 3]),
            Atom::new("O", [1.2, 0.0, 0.0]),
        ]);
        mol.atoms[0].bonds = vec![0, 1, 1, 42];
        mol.atoms[0].bond_orders = vec![1, 2, 2, 1];
        let bonds = canonical_bonds(&mol, true);
        assert_eq!(as_set(&bonds), BTreeSet::from([(0, 1, 2)]));
    }

    #[test]
    fn hidden_hydrogens_drop_their_bonds() {
        let mol = formaldehyde();
        let hidden = canonical_bonds(&mol, false);
        let shown = canonical_bonds(&mol, true);
        assert_eq!(hidden.len(), 1);
        assert_eq!(shown.len(), 3);
        assert!(hidden
            .iter()
            .all(|b| !mol.atoms[b.atom_a].is_hydrogen()
                && !mol.atoms[b.atom_b].is_hydrogen()));
    }

    #[test]
    fn explicit_identities_resolve_neighbors() {
        let mut mol = Molecule::new(vec![
            Atom::new("O", [1.2, 0.0, 0.0]).with_index(7),
            Atom::new("C", [0.0; 3]).with_index(3),
        ]);
        mol.add_bond(0, 1, BondOrder::Double);
        let bonds = canonical_bonds(&mol, true);
        assert_eq!(bonds.len(), 1);
        let b = bonds[0];
        assert_eq!(b.key(), (3, 7));
        assert_eq!((b.atom_a, b.atom_b), (1, 0));
    }

    #[test]
    fn positional_fallback_when_identity_absent() {
        let mut mol = Molecule::new(vec![
            Atom::new("C", [0.0; 3]).with_index(100),
            Atom::new("C", [1.5, 0.0, 0.0]).with_index(200),
        ]);
        // Neighbor written as a raw position instead of an identity.
        mol.atoms[0].bonds = vec![1];
        mol.atoms[0].bond_orders = vec![1];
        let bonds = canonical_bonds(&mol, true);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].key(), (100, 200));
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let mut rng = crate::molecule::test_fixtures::seeded_rng(7);
        for _ in 0..20 {
            let mol = random_molecule(&mut rng, 30);
            let first = canonical_bonds(&mol, true);
            let second = canonical_bonds(&mol, true);
            assert_eq!(first, second);

            // Rebuilding a molecule from the canonical set reproduces it.
            let mut rebuilt = Molecule::new(
                mol.atoms
                    .iter()
                    .map(|a| Atom {
                        bonds: Vec::new(),
                        bond_orders: Vec::new(),
                        ..a.clone()
                    })
                    .collect(),
            );
            for b in &first {
                rebuilt.add_bond(b.atom_a, b.atom_b, b.order);
            }
            assert_eq!(
                as_set(&canonical_bonds(&rebuilt, true)),
                as_set(&first)
            );
        }
    }

    #[test]
    fn no_pair_appears_twice() {
        let mut rng = crate::molecule::test_fixtures::seeded_rng(11);
        for _ in 0..20 {
            let mol = random_molecule(&mut rng, 50);
            let bonds = canonical_bonds(&mol, true);
            let keys: BTreeSet<_> = bonds.iter().map(Bond::key).collect();
            assert_eq!(keys.len(), bonds.len());
            assert!(bonds.iter().all(|b| b.id_a < b.id_b));
        }
    }
}
