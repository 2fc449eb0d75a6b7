//! Element table: symbol parsing, ball radius and display color.
//!
//! Radii are the ball-and-stick scale factors of the interactive viewer
//! (H 0.20 through I 0.36); colors are the Jmol scheme.

use serde::{Deserialize, Serialize};

/// Chemical elements with dedicated render styling.
///
/// Anything else parses to [`Element::Unknown`], which renders with a
/// default radius and neutral gray.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Sulfur.
    S,
    /// Phosphorus.
    P,
    /// Fluorine.
    F,
    /// Chlorine.
    Cl,
    /// Bromine.
    Br,
    /// Iodine.
    I,
    /// Any symbol without dedicated styling.
    #[default]
    Unknown,
}

/// Render radius for elements without a table entry.
pub const DEFAULT_RADIUS: f64 = 0.25;

/// Display color for elements without a table entry.
pub const DEFAULT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

impl Element {
    /// Parse an element from its symbol (trimmed, case-insensitive).
    #[must_use]
    pub fn from_symbol(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Self::H,
            "C" => Self::C,
            "N" => Self::N,
            "O" => Self::O,
            "S" => Self::S,
            "P" => Self::P,
            "F" => Self::F,
            "CL" => Self::Cl,
            "BR" => Self::Br,
            "I" => Self::I,
            _ => Self::Unknown,
        }
    }

    /// Canonical symbol, `"X"` for unknown elements.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::S => "S",
            Self::P => "P",
            Self::F => "F",
            Self::Cl => "Cl",
            Self::Br => "Br",
            Self::I => "I",
            Self::Unknown => "X",
        }
    }

    /// Ball radius in angstroms: a scaled van der Waals radius, used both
    /// for mesh spheres and as the absolute X3D sphere radius.
    #[must_use]
    pub fn render_radius(self) -> f64 {
        match self {
            Self::H => 0.20,
            Self::C => 0.28,
            Self::N => 0.27,
            Self::O => 0.26,
            Self::S | Self::P => 0.32,
            Self::F => 0.25,
            Self::Cl => 0.30,
            Self::Br => 0.34,
            Self::I => 0.36,
            Self::Unknown => DEFAULT_RADIUS,
        }
    }

    /// Jmol-style display color as linear RGB in `[0, 1]`.
    #[must_use]
    pub fn display_color(self) -> [f32; 3] {
        match self {
            Self::H => [1.0, 1.0, 1.0],     // White
            Self::C => [0.6, 0.6, 0.6],     // Gray
            Self::N => [0.2, 0.2, 1.0],     // Blue
            Self::O => [1.0, 0.05, 0.05],   // Red
            Self::S => [1.0, 1.0, 0.2],     // Yellow
            Self::P => [1.0, 0.5, 0.0],     // Orange
            Self::F => [0.7, 1.0, 1.0],     // Pale cyan
            Self::Cl => [0.1, 1.0, 0.1],    // Green
            Self::Br => [0.6, 0.2, 0.2],    // Dark red
            Self::I => [0.58, 0.0, 0.58],   // Purple
            Self::Unknown => DEFAULT_COLOR, // Neutral gray
        }
    }
}

/// Unpack a `0xRRGGBB` color into RGB components in `[0, 1]`.
#[must_use]
pub fn unpack_rgb(packed: u32) -> [f32; 3] {
    let channel = |shift: u32| f32::from(((packed >> shift) & 0xFF) as u8) / 255.0;
    [channel(16), channel(8), channel(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_case_insensitively() {
        assert_eq!(Element::from_symbol("Cl"), Element::Cl);
        assert_eq!(Element::from_symbol("CL"), Element::Cl);
        assert_eq!(Element::from_symbol(" br "), Element::Br);
        assert_eq!(Element::from_symbol("h"), Element::H);
    }

    #[test]
    fn unknown_elements_fail_soft() {
        let xe = Element::from_symbol("Xe");
        assert_eq!(xe, Element::Unknown);
        assert_eq!(xe.render_radius(), DEFAULT_RADIUS);
        assert_eq!(xe.display_color(), DEFAULT_COLOR);
        assert_eq!(Element::from_symbol("").render_radius(), 0.25);
    }

    #[test]
    fn table_values() {
        assert_eq!(Element::C.render_radius(), 0.28);
        assert_eq!(Element::H.render_radius(), 0.20);
        assert_eq!(Element::O.display_color(), [1.0, 0.05, 0.05]);
        assert_eq!(Element::N.display_color(), [0.2, 0.2, 1.0]);
    }

    #[test]
    fn halogen_table_values() {
        assert_eq!(Element::F.render_radius(), 0.25);
        assert_eq!(Element::Cl.render_radius(), 0.30);
        assert_eq!(Element::Br.render_radius(), 0.34);
        assert_eq!(Element::I.render_radius(), 0.36);
        assert_eq!(Element::Br.display_color(), [0.6, 0.2, 0.2]);
        assert_eq!(Element::I.display_color(), [0.58, 0.0, 0.58]);
    }

    #[test]
    fn symbol_round_trips() {
        for e in [
            Element::H,
            Element::C,
            Element::N,
            Element::O,
            Element::S,
            Element::P,
            Element::F,
            Element::Cl,
            Element::Br,
            Element::I,
        ] {
            assert_eq!(Element::from_symbol(e.symbol()), e);
        }
    }

    #[test]
    fn unpack_packed_color() {
        assert_eq!(unpack_rgb(0xFF_00_00), [1.0, 0.0, 0.0]);
        assert_eq!(unpack_rgb(0x00_FF_00), [0.0, 1.0, 0.0]);
        let [r, g, b] = unpack_rgb(0x80_40_20);
        assert!((r - 128.0 / 255.0).abs() < 1e-6);
        assert!((g - 64.0 / 255.0).abs() < 1e-6);
        assert!((b - 32.0 / 255.0).abs() < 1e-6);
    }
}
