//! Small molecules shared by unit tests across the crate.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Atom, BondOrder, Molecule};

/// Formaldehyde as a V2000 SDF record, matching [`formaldehyde`].
pub(crate) const FORMALDEHYDE_MOLFILE: &str = "\
formaldehyde
  molexport  3D

  4  3  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.2100    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
   -0.5500    0.9400    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.5500   -0.9400    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  2  0  0  0  0
  1  3  1  0  0  0  0
  1  4  1  0  0  0  0
M  END
$$$$
";

/// `count` carbons in a ring of single bonds.
pub(crate) fn carbon_ring_molfile(count: usize) -> String {
    let mut text = format!(
        "ring\n  molexport  3D\n\n{count:>3}{count:>3}  0  0  0  0  0  0  0  0999 V2000\n"
    );
    for i in 0..count {
        text.push_str(&format!(
            "{:>10.4}{:>10.4}{:>10.4} C   0  0  0  0  0  0  0  0  0  0  0  0\n",
            i as f64 * 1.5,
            0.0,
            0.0
        ));
    }
    for i in 0..count {
        let a = i + 1;
        let b = (i + 1) % count + 1;
        text.push_str(&format!("{a:>3}{b:>3}  1  0  0  0  0\n"));
    }
    text.push_str("M  END\n$$$$\n");
    text
}

/// C at the origin, O at (1.2, 0, 0), single bond.
pub(crate) fn carbon_monoxide() -> Molecule {
    let mut mol = Molecule::new(vec![
        Atom::new("C", [0.0, 0.0, 0.0]).with_index(0),
        Atom::new("O", [1.2, 0.0, 0.0]).with_index(1),
    ]);
    mol.add_bond(0, 1, BondOrder::Single);
    mol
}

/// Two atoms joined by a bond of the given order along +X.
pub(crate) fn diatomic(order: BondOrder) -> Molecule {
    let mut mol = Molecule::new(vec![
        Atom::new("C", [0.0, 0.0, 0.0]).with_index(0),
        Atom::new("C", [1.3, 0.0, 0.0]).with_index(1),
    ]);
    mol.add_bond(0, 1, order);
    mol
}

/// H2C=O in the XY plane with explicit hydrogens.
pub(crate) fn formaldehyde() -> Molecule {
    let mut mol = Molecule::new(vec![
        Atom::new("C", [0.0, 0.0, 0.0]).with_index(0),
        Atom::new("O", [1.21, 0.0, 0.0]).with_index(1),
        Atom::new("H", [-0.55, 0.94, 0.0]).with_index(2),
        Atom::new("H", [-0.55, -0.94, 0.0]).with_index(3),
    ]);
    mol.add_bond(0, 1, BondOrder::Double);
    mol.add_bond(0, 2, BondOrder::Single);
    mol.add_bond(0, 3, BondOrder::Single);
    mol
}

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random molecule with 1..=`max_atoms` atoms, random elements (including
/// hydrogens and unknown symbols), random symmetric bonding of order 1–3,
/// and either no explicit identities or a shuffled identity permutation.
pub(crate) fn random_molecule(rng: &mut StdRng, max_atoms: usize) -> Molecule {
    const SYMBOLS: [&str; 7] = ["C", "N", "O", "H", "S", "Cl", "Xe"];

    let n = rng.random_range(1..=max_atoms);
    let mut ids: Vec<usize> = (0..n).collect();
    let explicit = rng.random_bool(0.5);
    if explicit {
        ids.shuffle(rng);
    }

    let atoms = (0..n)
        .map(|i| {
            let symbol = SYMBOLS[rng.random_range(0..SYMBOLS.len())];
            let position = [
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            ];
            let atom = Atom::new(symbol, position);
            if explicit {
                atom.with_index(ids[i])
            } else {
                atom
            }
        })
        .collect();

    let mut mol = Molecule::new(atoms);
    if n > 1 {
        for _ in 0..rng.random_range(0..=2 * n) {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            let order = BondOrder::from_raw(rng.random_range(1..=3));
            mol.add_bond(a, b, order);
        }
    }
    mol
}
