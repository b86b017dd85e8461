use core::fmt;

use serde::{Deserialize, Serialize};

/// A DNA nucleotide base.
///
/// The discriminant is the 2-bit code used by every codec in this crate
/// (A=00, C=01, G=10, T=11). Only uppercase symbols are part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0b00,
    C = 0b01,
    G = 0b10,
    T = 0b11,
}

/// Inverse table: 2-bit code to nucleotide.
const BY_CODE: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

/// Forward table: nucleotide code to its textual bit pair.
const BIT_STRINGS: [&str; 4] = ["00", "01", "10", "11"];

/// Mask selecting one 2-bit group.
pub const CODE_MASK: u8 = 0b11;

/// Bits used per nucleotide in every packed form.
pub const BITS_PER_BASE: u32 = 2;

impl Nucleotide {
    /// All nucleotides in code order.
    pub const ALL: [Nucleotide; 4] = BY_CODE;

    /// Convert from a 2-bit code. Returns `None` for values above 3.
    #[inline(always)]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code <= CODE_MASK {
            Some(BY_CODE[code as usize])
        } else {
            None
        }
    }

    /// The nucleotide held in the two least-significant bits of `byte`.
    #[inline(always)]
    pub const fn from_low_bits(byte: u8) -> Self {
        BY_CODE[(byte & CODE_MASK) as usize]
    }

    /// The 2-bit code of this nucleotide.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Convert from a symbol. Returns `None` for anything outside {A,C,G,T}.
    #[inline]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert from a textual bit pair (`"00"`, `"01"`, `"10"`, `"11"`).
    #[inline]
    pub fn from_bits(bits: &str) -> Option<Self> {
        match bits {
            "00" => Some(Self::A),
            "01" => Some(Self::C),
            "10" => Some(Self::G),
            "11" => Some(Self::T),
            _ => None,
        }
    }

    /// The textual bit pair of this nucleotide.
    #[inline(always)]
    pub const fn bits(self) -> &'static str {
        BIT_STRINGS[self as usize]
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_char(symbol).ok_or(symbol)
    }
}

impl From<Nucleotide> for u8 {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> u8 {
        nuc.code()
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
