//! Strategy-tagged encoded values and their textual rendering.

use std::fmt;

use crate::error::{CodecError, Result};
use crate::strategies::PackedInt;
use crate::CodecStrategy;

/// An encoded sequence, tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Textual(String),
    PackedInteger(PackedInt),
    BitPacked(Vec<u8>),
}

impl Encoded {
    pub fn strategy(&self) -> CodecStrategy {
        match self {
            Self::Textual(_) => CodecStrategy::Textual,
            Self::PackedInteger(_) => CodecStrategy::PackedInteger,
            Self::BitPacked(_) => CodecStrategy::BitPacked,
        }
    }

    /// Parse the rendering produced by `Display` back into an encoded value.
    ///
    /// Packed integers accept decimal, `0b` binary or `0x` hex. Bit-packed
    /// payloads are hex.
    pub fn parse(strategy: CodecStrategy, text: &str) -> Result<Self> {
        let text = text.trim();
        match strategy {
            CodecStrategy::Textual => Ok(Self::Textual(text.to_string())),
            CodecStrategy::PackedInteger => {
                let (digits, radix) = if let Some(bin) = text.strip_prefix("0b") {
                    (bin, 2)
                } else if let Some(hex) = text.strip_prefix("0x") {
                    (hex, 16)
                } else {
                    (text, 10)
                };
                PackedInt::from_str_radix(digits, radix)
                    .map(Self::PackedInteger)
                    .map_err(|e| CodecError::Decode(format!("Invalid packed integer {text:?}: {e}")))
            }
            CodecStrategy::BitPacked => hex::decode(text)
                .map(Self::BitPacked)
                .map_err(|e| CodecError::Decode(format!("Invalid bit-packed hex: {e}"))),
        }
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Textual(bits) => write!(f, "{bits}"),
            Self::PackedInteger(value) => write!(f, "{value}"),
            Self::BitPacked(bytes) => write!(f, "{}", hex::encode(bytes)),
        }
    }
}
