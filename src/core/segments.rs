//! Seven-segment decoder
//!
//! Maps a digit to the seven segment states using the logic-minimized
//! decoder formulas over the digit's 4-bit encoding.
//!
//! Segment layout as drawn by the renderer:
//!
//! ```text
//!  aaaa
//! b    c
//! b    c
//!  dddd
//! e    f
//! e    f
//!  gggg
//! ```

use serde::{Deserialize, Serialize};

use super::digits::Digit;

/// Segment names in mask order (most significant bit first)
pub const SEGMENT_NAMES: [char; 7] = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];

/// Lit/unlit state of the seven segments of one digit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segments {
    /// Top bar
    pub a: bool,
    /// Upper left vertical
    pub b: bool,
    /// Upper right vertical
    pub c: bool,
    /// Middle bar
    pub d: bool,
    /// Lower left vertical
    pub e: bool,
    /// Lower right vertical
    pub f: bool,
    /// Bottom bar
    pub g: bool,
}

impl Segments {
    /// Decode a digit into its segment states
    #[allow(non_snake_case, clippy::nonminimal_bool)]
    pub fn for_digit(digit: Digit) -> Self {
        let (A, B, C, D) = digit.bits();
        Self {
            a: A || C || (B && D) || (!B && !D),
            b: A || (!C && !D) || (B && !C) || (B && !D),
            c: (!A && !B) || (!C && !D) || (A && D) || (C && D),
            d: A || (B && !(C && D)) || (!B && C),
            e: (!B && !D) || (C && !D) || (A && !D),
            f: B || D || !C,
            g: A || (C && !D) || (B && !C && D) || (!B && C) || (!B && !D),
        }
    }

    /// Pack into a 7-bit mask, `a` in bit 6 down to `g` in bit 0
    pub fn mask(&self) -> u8 {
        self.as_array()
            .iter()
            .fold(0, |mask, &lit| (mask << 1) | lit as u8)
    }

    /// Unpack a 7-bit mask produced by [`Segments::mask`]
    pub fn from_mask(mask: u8) -> Self {
        let bit = |n: u8| mask & (1 << n) != 0;
        Self {
            a: bit(6),
            b: bit(5),
            c: bit(4),
            d: bit(3),
            e: bit(2),
            f: bit(1),
            g: bit(0),
        }
    }

    /// States in `a..g` order
    pub fn as_array(&self) -> [bool; 7] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g]
    }

    /// Names of the lit segments, in `a..g` order
    pub fn lit(&self) -> impl Iterator<Item = char> {
        let states = self.as_array();
        SEGMENT_NAMES
            .into_iter()
            .zip(states)
            .filter_map(|(name, lit)| lit.then_some(name))
    }

    /// Number of lit segments
    pub fn count(&self) -> usize {
        self.as_array().iter().filter(|&&lit| lit).count()
    }
}

impl From<Digit> for Segments {
    fn from(digit: Digit) -> Self {
        Self::for_digit(digit)
    }
}
