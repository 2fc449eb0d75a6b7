//! In-memory molecule snapshot handed to the exporters.
//!
//! A [`Molecule`] is an ordered list of [`Atom`]s, each carrying its own
//! bonded-neighbor list with a parallel bond-order list. Neighbor lists are
//! normally symmetric (if A lists B, B lists A); [`bonds::canonical_bonds`]
//! collapses them into one undirected [`bonds::Bond`] per pair.
//!
//! # Atom identity
//!
//! Neighbor lists refer to atoms by identity. An atom's identity is its
//! explicit [`Atom::index`] when set, otherwise its position in
//! [`Molecule::atoms`]. [`AtomResolver`] resolves identities with that
//! precedence and only falls back to a raw positional lookup when no atom
//! carries the requested identity.

pub mod bonds;
pub mod element;
pub mod molfile;
pub mod pdb;

#[cfg(test)]
pub(crate) mod test_fixtures;

use glam::DVec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use bonds::{canonical_bonds, Bond};
pub use element::Element;

use crate::error::ExportError;

/// Multiplicity of a chemical bond.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum BondOrder {
    /// Single bond.
    #[default]
    Single,
    /// Double bond.
    Double,
    /// Triple bond.
    Triple,
}

impl BondOrder {
    /// Interpret a raw order code. `2` and `3` map to double and triple;
    /// everything else (including `0`, aromatic `4`, and query codes)
    /// renders as a single bond.
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            2 => Self::Double,
            3 => Self::Triple,
            _ => Self::Single,
        }
    }

    /// Integer multiplicity (1, 2 or 3).
    #[must_use]
    pub fn multiplicity(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// One atom of a [`Molecule`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Atom {
    /// Stable identity assigned at parse time. When absent the atom's
    /// position in [`Molecule::atoms`] is its identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Element symbol as it appeared in the source.
    #[serde(rename = "elem")]
    pub element: String,
    /// X coordinate in angstroms.
    pub x: f64,
    /// Y coordinate in angstroms.
    pub y: f64,
    /// Z coordinate in angstroms.
    pub z: f64,
    /// Identities of bonded neighbors.
    #[serde(default)]
    pub bonds: Vec<usize>,
    /// Bond order for each entry of `bonds`, aligned by position.
    #[serde(default, rename = "bondOrder")]
    pub bond_orders: Vec<u8>,
    /// Optional `0xRRGGBB` display color overriding the element color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

impl Atom {
    /// Create an unbonded atom without an explicit identity.
    #[must_use]
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        let [x, y, z] = position;
        Self {
            element: element.into(),
            x,
            y,
            z,
            ..Self::default()
        }
    }

    /// Set the stable identity.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Set a packed `0xRRGGBB` color override.
    #[must_use]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Parsed element, [`Element::Unknown`] for unstyled symbols.
    #[must_use]
    pub fn element_kind(&self) -> Element {
        Element::from_symbol(&self.element)
    }

    /// Whether this atom is a hydrogen.
    #[must_use]
    pub fn is_hydrogen(&self) -> bool {
        self.element_kind() == Element::H
    }

    /// Whether the atom is drawn under the given hydrogen policy.
    #[must_use]
    pub fn is_visible(&self, show_hydrogens: bool) -> bool {
        show_hydrogens || !self.is_hydrogen()
    }

    /// Neighbor identities paired with their bond orders. A missing order
    /// entry reads as single.
    pub fn neighbors(&self) -> impl Iterator<Item = (usize, BondOrder)> + '_ {
        self.bonds.iter().enumerate().map(|(slot, &neighbor)| {
            let order = self
                .bond_orders
                .get(slot)
                .copied()
                .map_or(BondOrder::Single, BondOrder::from_raw);
            (neighbor, order)
        })
    }
}

/// Ordered atom list with per-atom adjacency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Molecule {
    /// Atoms in source order.
    pub atoms: Vec<Atom>,
}

impl Molecule {
    /// Wrap an atom list.
    #[must_use]
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Parse a molecule from its JSON form
    /// (`{"atoms": [{"elem": "C", "x": 0, …, "bonds": [1], "bondOrder": [2]}]}`).
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json)
            .map_err(|e| ExportError::StructureLoad(e.to_string()))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::StructureLoad(e.to_string()))
    }

    /// Number of atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the molecule has no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Identity of the atom at `position`.
    #[must_use]
    pub fn atom_id(&self, position: usize) -> Option<usize> {
        self.atoms
            .get(position)
            .map(|atom| atom.index.unwrap_or(position))
    }

    /// Record a bond between the atoms at positions `a` and `b` on both
    /// endpoints, with the same order on each side. Out-of-range positions
    /// are ignored.
    pub fn add_bond(&mut self, a: usize, b: usize, order: BondOrder) {
        let (Some(id_a), Some(id_b)) = (self.atom_id(a), self.atom_id(b))
        else {
            return;
        };
        for (at, neighbor) in [(a, id_b), (b, id_a)] {
            let atom = &mut self.atoms[at];
            atom.bonds.push(neighbor);
            atom.bond_orders.push(order.multiplicity());
        }
    }

    /// Atoms drawn under the hydrogen policy, with their positions.
    pub fn visible_atoms(
        &self,
        show_hydrogens: bool,
    ) -> impl Iterator<Item = (usize, &Atom)> + '_ {
        self.atoms
            .iter()
            .enumerate()
            .filter(move |(_, atom)| atom.is_visible(show_hydrogens))
    }

    /// Build an identity resolver over this molecule.
    #[must_use]
    pub fn resolver(&self) -> AtomResolver<'_> {
        AtomResolver::new(self)
    }
}

/// How a neighbor identity was matched to an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Matched by stable identity.
    Identity(usize),
    /// No atom carries the identity; treated as a raw position.
    Positional(usize),
}

impl Resolution {
    /// Position of the resolved atom in [`Molecule::atoms`].
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Identity(p) | Self::Positional(p) => p,
        }
    }
}

/// Identity → position lookup for one molecule.
pub struct AtomResolver<'a> {
    molecule: &'a Molecule,
    by_id: FxHashMap<usize, usize>,
}

impl<'a> AtomResolver<'a> {
    fn new(molecule: &'a Molecule) -> Self {
        let mut by_id = FxHashMap::default();
        by_id.reserve(molecule.len());
        for (position, atom) in molecule.atoms.iter().enumerate() {
            let id = atom.index.unwrap_or(position);
            if by_id.contains_key(&id) {
                log::warn!(
                    "atom identity {id} is used more than once; keeping the \
                     first atom"
                );
                continue;
            }
            let _ = by_id.insert(id, position);
        }
        Self { molecule, by_id }
    }

    /// Resolve a neighbor identity. Stable identity wins; a raw position is
    /// only tried when no atom carries `id`.
    #[must_use]
    pub fn resolve(&self, id: usize) -> Option<Resolution> {
        if let Some(&position) = self.by_id.get(&id) {
            return Some(Resolution::Identity(position));
        }
        (id < self.molecule.len()).then_some(Resolution::Positional(id))
    }

    /// Identity of the atom at `position`, as used for canonical pairs.
    #[must_use]
    pub fn id_of(&self, position: usize) -> Option<usize> {
        self.molecule.atom_id(position)
    }
}
