//! Two-bit DNA encoding library.
//!
//! Maps each nucleotide of an `{A, C, G, T}` sequence to a 2-bit code
//! (A=00, C=01, G=10, T=11) and packs the codes in sequence order, first base
//! most significant. Three representations are provided:
//!
//! - [`TextualCodec`]: a string of `'0'`/`'1'` characters, two per base.
//! - [`PackedIntegerCodec`]: a single [`PackedInt`]; the caller keeps the
//!   sequence length to decode it.
//! - [`BitPackedCodec`]: a length-prefixed byte vector, four bases per byte.
//!
//! ```
//! use dnapack_codec::{PackedIntegerCodec, TextualCodec};
//!
//! let textual = TextualCodec::new("ATCCTG").unwrap();
//! assert_eq!(textual.encode().unwrap(), "001101011110");
//!
//! let packed = PackedIntegerCodec::new("ATCCTG").unwrap();
//! let value = packed.encode().unwrap();
//! assert_eq!(packed.decode(value, 6).unwrap(), "ATCCTG");
//! ```

mod config;
mod encoded;
mod error;
mod nucleotide;
mod strategies;
mod traits;

pub use config::{CodecConfig, Validation};
pub use encoded::Encoded;
pub use error::CodecError as Error;
pub use error::{CodecError, Result};
pub use nucleotide::{Nucleotide, BITS_PER_BASE};
pub use strategies::{
    bit_packed_len, BitPackedCodec, PackedInt, PackedIntegerCodec, TextualCodec, HEADER_LEN,
    PACKED_CAPACITY,
};
pub use traits::DnaCodec;

use serde::{Deserialize, Serialize};

/// Strategies for encoding sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodecStrategy {
    /// One `"00"`..`"11"` pair per base.
    #[default]
    Textual,
    /// Shift-and-or into a single integer; needs the length to decode.
    #[serde(rename = "packed-int")]
    PackedInteger,
    /// Length header + 4 bases/byte.
    BitPacked,
}

impl CodecStrategy {
    pub const ALL: [CodecStrategy; 3] = [Self::Textual, Self::PackedInteger, Self::BitPacked];

    /// Encode `dna` using the selected strategy.
    pub fn encode(&self, dna: &str, config: CodecConfig) -> Result<Encoded> {
        match self {
            CodecStrategy::Textual => TextualCodec::with_config(dna, config)?
                .encode()
                .map(Encoded::Textual),
            CodecStrategy::PackedInteger => PackedIntegerCodec::with_config(dna, config)?
                .encode()
                .map(Encoded::PackedInteger),
            CodecStrategy::BitPacked => BitPackedCodec::with_config(dna, config)?
                .encode()
                .map(Encoded::BitPacked),
        }
    }

    /// Decode `encoded` using the selected strategy.
    ///
    /// `length` is required by [`CodecStrategy::PackedInteger`] and ignored
    /// by the others.
    pub fn decode(
        &self,
        encoded: &Encoded,
        length: Option<usize>,
        config: CodecConfig,
    ) -> Result<String> {
        // Decoding never reads the source sequence; any non-empty
        // placeholder satisfies the constructors.
        const PLACEHOLDER: &str = "A";

        match (self, encoded) {
            (CodecStrategy::Textual, Encoded::Textual(bits)) => {
                TextualCodec::with_config(PLACEHOLDER, config)?.decode(bits)
            }
            (CodecStrategy::PackedInteger, Encoded::PackedInteger(value)) => {
                let length = length.ok_or_else(|| {
                    CodecError::InvalidInput(
                        "packed-int decoding requires the sequence length".into(),
                    )
                })?;
                PackedIntegerCodec::with_config(PLACEHOLDER, config)?.decode(*value, length)
            }
            (CodecStrategy::BitPacked, Encoded::BitPacked(bytes)) => {
                BitPackedCodec::with_config(PLACEHOLDER, config)?.decode(bytes)
            }
            (strategy, encoded) => Err(CodecError::InvalidInput(format!(
                "cannot decode {} data with the {strategy} strategy",
                encoded.strategy()
            ))),
        }
    }
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Textual => write!(f, "textual"),
            Self::PackedInteger => write!(f, "packed-int"),
            Self::BitPacked => write!(f, "bit-packed"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "textual" | "text" => Ok(Self::Textual),
            "packed-int" | "int" => Ok(Self::PackedInteger),
            "bit-packed" | "packed" => Ok(Self::BitPacked),
            _ => Err(format!(
                "Unknown codec strategy: {s}. Available: textual, packed-int, bit-packed"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_round_trip() {
        let dna = "ATCCTGAA";
        let config = CodecConfig::default();

        for strategy in CodecStrategy::ALL {
            let encoded = strategy.encode(dna, config).unwrap();
            assert_eq!(encoded.strategy(), strategy);
            let decoded = strategy.decode(&encoded, Some(dna.len()), config).unwrap();
            assert_eq!(decoded, dna, "{strategy}");
        }
    }

    #[test]
    fn test_strategy_empty_input() {
        for strategy in CodecStrategy::ALL {
            let result = strategy.encode("", CodecConfig::default());
            assert!(matches!(result, Err(CodecError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_packed_decode_requires_length() {
        let encoded = Encoded::PackedInteger(862);
        let result = CodecStrategy::PackedInteger.decode(&encoded, None, CodecConfig::default());
        assert!(matches!(result, Err(CodecError::InvalidInput(_))));
    }

    #[test]
    fn test_strategy_mismatch() {
        let encoded = Encoded::Textual("0011".into());
        let result = CodecStrategy::BitPacked.decode(&encoded, None, CodecConfig::default());
        assert!(matches!(result, Err(CodecError::InvalidInput(_))));
    }

    #[test]
    fn test_display_from_str() {
        for strategy in CodecStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<CodecStrategy>(), Ok(strategy));
        }
        assert_eq!("int".parse::<CodecStrategy>(), Ok(CodecStrategy::PackedInteger));
        assert!("zstd".parse::<CodecStrategy>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CodecStrategy::PackedInteger).unwrap();
        assert_eq!(json, "\"packed-int\"");
        let parsed: CodecStrategy = serde_json::from_str("\"bit-packed\"").unwrap();
        assert_eq!(parsed, CodecStrategy::BitPacked);
    }
}
