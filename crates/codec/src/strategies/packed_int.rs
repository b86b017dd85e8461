use tracing::{debug, warn};

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::nucleotide::{Nucleotide, BITS_PER_BASE, CODE_MASK};
use crate::traits::DnaCodec;

/// Integer type holding the packed form.
pub type PackedInt = u128;

/// Number of nucleotides a [`PackedInt`] can hold.
pub const PACKED_CAPACITY: usize = (PackedInt::BITS / BITS_PER_BASE) as usize;

/// Strategy: Packed integer (2 bits/base, first base most significant).
///
/// The packed value carries no length. Leading `A`s are zero bits and are
/// lost unless the caller keeps the sequence length alongside the value and
/// passes it back to [`PackedIntegerCodec::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedIntegerCodec {
    dna: String,
    config: CodecConfig,
}

impl PackedIntegerCodec {
    pub fn new(dna: impl Into<String>) -> Result<Self> {
        Self::with_config(dna, CodecConfig::default())
    }

    pub fn with_config(dna: impl Into<String>, config: CodecConfig) -> Result<Self> {
        let dna = dna.into();
        if dna.is_empty() {
            return Err(CodecError::empty_sequence());
        }
        Ok(Self { dna, config })
    }

    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Number of nucleotides in the source sequence.
    pub fn len(&self) -> usize {
        self.dna.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }

    /// Shift-and-or every nucleotide code into an accumulator starting at 0.
    ///
    /// Lenient mode maps unknown symbols to code 0 and lets bits beyond the
    /// integer width fall off the top.
    pub fn encode(&self) -> Result<PackedInt> {
        let len = self.len();
        let strict = self.config.validation.is_strict();
        debug!(len, "packed integer encode");

        if strict && len > PACKED_CAPACITY {
            return Err(CodecError::SequenceTooLong {
                len,
                max: PACKED_CAPACITY,
            });
        }

        let mut packed: PackedInt = 0;
        for (position, symbol) in self.dna.chars().enumerate() {
            let code = match Nucleotide::from_char(symbol) {
                Some(nuc) => nuc.code(),
                None if strict => {
                    return Err(CodecError::InvalidNucleotide { symbol, position });
                }
                None => {
                    warn!(%symbol, position, "unknown nucleotide packed as A");
                    Nucleotide::A.code()
                }
            };
            packed = (packed << BITS_PER_BASE) | PackedInt::from(code);
        }

        Ok(packed)
    }

    /// Unpack `length` nucleotides from the low bits of `encoded`.
    ///
    /// Bits are consumed least-significant first, so the buffer is reversed
    /// at the end. An oversized `length` pads with leading `A`s; strict mode
    /// rejects lengths beyond [`PACKED_CAPACITY`] with
    /// [`CodecError::SequenceTooLong`]. An undersized one keeps only the
    /// trailing nucleotides, which strict mode rejects with
    /// [`CodecError::LengthMismatch`].
    pub fn decode(&self, encoded: PackedInt, length: usize) -> Result<String> {
        unpack(encoded, length, self.config)
    }
}

fn unpack(encoded: PackedInt, length: usize, config: CodecConfig) -> Result<String> {
    if config.validation.is_strict() {
        // Every nucleotide past the integer width would be padding
        if length > PACKED_CAPACITY {
            return Err(CodecError::SequenceTooLong {
                len: length,
                max: PACKED_CAPACITY,
            });
        }
        let shift = length as u32 * BITS_PER_BASE;
        if encoded.checked_shr(shift).unwrap_or(0) != 0 {
            return Err(CodecError::LengthMismatch {
                length,
                bits: PackedInt::BITS - encoded.leading_zeros(),
            });
        }
    }

    let mut value = encoded;
    let mut decoded = Vec::with_capacity(length.min(PACKED_CAPACITY));
    for _ in 0..length {
        decoded.push(Nucleotide::from_low_bits((value & PackedInt::from(CODE_MASK)) as u8));
        value >>= BITS_PER_BASE;
    }
    decoded.reverse();

    debug!(length, "packed integer decode");
    Ok(decoded.into_iter().map(Nucleotide::to_char).collect())
}

impl DnaCodec for PackedIntegerCodec {
    type Encoded = PackedInt;

    fn sequence(&self) -> &str {
        &self.dna
    }

    fn encode(&self) -> Result<PackedInt> {
        PackedIntegerCodec::encode(self)
    }

    /// Decodes with the source sequence length as the sidecar.
    fn restore(&self, encoded: &PackedInt) -> Result<String> {
        self.decode(*encoded, self.len())
    }
}
