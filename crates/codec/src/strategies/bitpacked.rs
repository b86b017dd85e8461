use tracing::{debug, warn};

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::nucleotide::{Nucleotide, BITS_PER_BASE};
use crate::traits::DnaCodec;

/// Bytes used by the little-endian `u64` nucleotide count.
pub const HEADER_LEN: usize = 8;

const BASES_PER_BYTE: usize = 4;

/// Strategy: Bit-packed bytes (4 bases/byte) with a length header.
///
/// # Layout
///
/// * bytes `0..8`: nucleotide count as a little-endian `u64`
/// * then `ceil(count / 4)` bytes, the first base in the two most
///   significant bits of the first byte; unused low bits of the last byte
///   are zero
///
/// Unlike [`PackedIntegerCodec`](crate::PackedIntegerCodec) the form is
/// self-describing: leading `A`s survive and no sidecar length is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPackedCodec {
    dna: String,
    config: CodecConfig,
}

impl BitPackedCodec {
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

    pub fn encode(&self) -> Result<Vec<u8>> {
        let strict = self.config.validation.is_strict();
        let len = self.dna.chars().count();
        debug!(len, "bit-packed encode");

        let mut packed_data = Vec::with_capacity(encoded_len(len));
        packed_data.extend_from_slice(&(len as u64).to_le_bytes());

        let mut byte: u8 = 0;
        for (i, symbol) in self.dna.chars().enumerate() {
            let code = match Nucleotide::from_char(symbol) {
                Some(nuc) => nuc.code(),
                None if strict => {
                    return Err(CodecError::InvalidNucleotide {
                        symbol,
                        position: i,
                    });
                }
                None => {
                    warn!(%symbol, position = i, "unknown nucleotide packed as A");
                    Nucleotide::A.code()
                }
            };
            byte |= code << shift_for(i);
            if (i + 1) % BASES_PER_BYTE == 0 {
                packed_data.push(byte);
                byte = 0;
            }
        }
        if len % BASES_PER_BYTE != 0 {
            packed_data.push(byte);
        }

        Ok(packed_data)
    }

    /// Decode a payload produced by [`BitPackedCodec::encode`].
    ///
    /// Bytes past the packed nucleotides are ignored.
    pub fn decode(&self, data: &[u8]) -> Result<String> {
        unpack(data)
    }
}

/// Total encoded size for `len` nucleotides.
pub fn encoded_len(len: usize) -> usize {
    HEADER_LEN + len.div_ceil(BASES_PER_BYTE)
}

#[inline(always)]
fn shift_for(index: usize) -> u32 {
    BITS_PER_BASE * (BASES_PER_BYTE - 1 - index % BASES_PER_BYTE) as u32
}

fn unpack(data: &[u8]) -> Result<String> {
    if data.len() < HEADER_LEN {
        return Err(CodecError::Decode("Payload too short for header".into()));
    }
    let mut len_bytes = [0u8; HEADER_LEN];
    len_bytes.copy_from_slice(&data[..HEADER_LEN]);
    let original_len = usize::try_from(u64::from_le_bytes(len_bytes))
        .map_err(|_| CodecError::Decode("Length header does not fit in memory".into()))?;

    let payload = &data[HEADER_LEN..];
    let needed = original_len.div_ceil(BASES_PER_BYTE);
    if payload.len() < needed {
        return Err(CodecError::Decode(format!(
            "Payload holds {} bytes, expected {needed} for {original_len} nucleotides",
            payload.len()
        )));
    }

    let mut seq = String::with_capacity(original_len);
    for (b, &byte) in payload[..needed].iter().enumerate() {
        for i in 0..BASES_PER_BYTE {
            if b * BASES_PER_BYTE + i >= original_len {
                break;
            }
            seq.push(Nucleotide::from_low_bits(byte >> shift_for(i)).to_char());
        }
    }

    debug!(len = original_len, "bit-packed decode");
    Ok(seq)
}

impl DnaCodec for BitPackedCodec {
    type Encoded = Vec<u8>;

    fn sequence(&self) -> &str {
        &self.dna
    }

    fn encode(&self) -> Result<Vec<u8>> {
        BitPackedCodec::encode(self)
    }

    fn restore(&self, encoded: &Vec<u8>) -> Result<String> {
        self.decode(encoded)
    }
}
