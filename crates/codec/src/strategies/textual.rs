use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::nucleotide::Nucleotide;
use crate::traits::DnaCodec;

/// Two ASCII digits; non-overlapping matches are the encoded bit pairs.
static BIT_PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{2}").unwrap());

/// Strategy: Textual (each nucleotide becomes a literal `"0"`/`"1"` pair).
///
/// `ATCCTG` encodes to `"001101011110"`, twice the length of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextualCodec {
    dna: String,
    config: CodecConfig,
}

impl TextualCodec {
    /// Build a codec with the default (strict) configuration.
    pub fn new(dna: impl Into<String>) -> Result<Self> {
        Self::with_config(dna, CodecConfig::default())
    }

    /// Build a codec with an explicit configuration.
    ///
    /// Fails with [`CodecError::InvalidInput`] when `dna` is empty.
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

    /// Substitute every nucleotide with its bit pair, preserving order.
    ///
    /// In lenient mode symbols outside the alphabet are copied through
    /// unchanged.
    pub fn encode(&self) -> Result<String> {
        debug!(len = self.dna.len(), "textual encode");
        let strict = self.config.validation.is_strict();
        let mut encoded = String::with_capacity(self.dna.len() * 2);

        for (position, symbol) in self.dna.chars().enumerate() {
            match Nucleotide::from_char(symbol) {
                Some(nuc) => encoded.push_str(nuc.bits()),
                None if strict => {
                    return Err(CodecError::InvalidNucleotide { symbol, position });
                }
                None => {
                    warn!(%symbol, position, "unknown nucleotide passed through unchanged");
                    encoded.push(symbol);
                }
            }
        }

        Ok(encoded)
    }

    /// Decode every non-overlapping pair of digits in `encoded`.
    ///
    /// Anything between the pairs is ignored. Fails with
    /// [`CodecError::NoMatchFound`] when no pair is present.
    pub fn decode(&self, encoded: &str) -> Result<String> {
        decode_bit_pairs(encoded, self.config)
    }
}

fn decode_bit_pairs(encoded: &str, config: CodecConfig) -> Result<String> {
    let strict = config.validation.is_strict();
    let mut decoded = String::with_capacity(encoded.len() / 2);
    let mut groups = 0usize;

    for pair in BIT_PAIR.find_iter(encoded) {
        groups += 1;
        match Nucleotide::from_bits(pair.as_str()) {
            Some(nuc) => decoded.push(nuc.to_char()),
            None if strict => {
                return Err(CodecError::InvalidCode {
                    code: pair.as_str().to_string(),
                    position: pair.start(),
                });
            }
            None => {
                warn!(code = pair.as_str(), position = pair.start(), "unknown code dropped");
            }
        }
    }

    if groups == 0 {
        return Err(CodecError::NoMatchFound);
    }

    debug!(groups, len = decoded.len(), "textual decode");
    Ok(decoded)
}

impl DnaCodec for TextualCodec {
    type Encoded = String;

    fn sequence(&self) -> &str {
        &self.dna
    }

    fn encode(&self) -> Result<String> {
        TextualCodec::encode(self)
    }

    fn restore(&self, encoded: &String) -> Result<String> {
        self.decode(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn lenient(dna: &str) -> TextualCodec {
        TextualCodec::with_config(dna, CodecConfig::lenient()).expect("Construction failed")
    }

    #[test]
    fn test_new_empty_fails() {
        let result = TextualCodec::new("");
        assert!(matches!(result, Err(CodecError::InvalidInput(_))));
    }

    #[test]
    fn test_config_defaults_to_strict() {
        assert_eq!(TextualCodec::new("A").unwrap().config(), CodecConfig::strict());
        assert_eq!(lenient("A").config(), CodecConfig::lenient());
    }

    #[test]
    fn test_encode_known_sequence() {
        let codec = TextualCodec::new("ATCCTG").unwrap();
        assert_eq!(codec.encode().unwrap(), "001101011110");
    }

    #[test]
    fn test_decode_known_sequence() {
        let codec = TextualCodec::new("ATCCTG").unwrap();
        assert_eq!(codec.decode("001101011110").unwrap(), "ATCCTG");
    }

    #[test]
    fn test_single_base() {
        let codec = TextualCodec::new("A").unwrap();
        let encoded = codec.encode().unwrap();
        assert_eq!(encoded, "00");
        assert_eq!(codec.decode(&encoded).unwrap(), "A");
        assert_eq!(codec.decode("00").unwrap(), "A");
    }

    #[test]
    fn test_encode_doubles_length() {
        let codec = TextualCodec::new("GATTACA").unwrap();
        assert_eq!(codec.encode().unwrap().len(), 2 * "GATTACA".len());
    }

    #[test]
    fn test_decode_no_pairs() {
        let codec = TextualCodec::new("A").unwrap();
        assert_eq!(codec.decode("xyz"), Err(CodecError::NoMatchFound));
        assert_eq!(codec.decode(""), Err(CodecError::NoMatchFound));
        assert_eq!(codec.decode("1"), Err(CodecError::NoMatchFound));
    }

    #[test]
    fn test_decode_ignores_separators() {
        let codec = TextualCodec::new("A").unwrap();
        assert_eq!(codec.decode("00 11-01").unwrap(), "ATC");
        // A trailing odd digit never forms a pair
        assert_eq!(codec.decode("001").unwrap(), "A");
    }

    #[test]
    fn test_strict_encode_rejects_unknown_symbol() {
        let codec = TextualCodec::new("ACNGT").unwrap();
        assert_eq!(
            codec.encode(),
            Err(CodecError::InvalidNucleotide {
                symbol: 'N',
                position: 2
            })
        );
    }

    #[test]
    fn test_lenient_encode_passes_unknown_through() {
        assert_eq!(lenient("AXG").encode().unwrap(), "00X10");
        assert_eq!(lenient("acgt").encode().unwrap(), "acgt");
    }

    #[test]
    fn test_strict_decode_rejects_unknown_code() {
        let codec = TextualCodec::new("A").unwrap();
        assert_eq!(
            codec.decode("0022"),
            Err(CodecError::InvalidCode {
                code: "22".into(),
                position: 2
            })
        );
    }

    #[test]
    fn test_lenient_decode_drops_unknown_code() {
        assert_eq!(lenient("A").decode("0022").unwrap(), "A");
        // An unknown pair still counts as a match
        assert_eq!(lenient("A").decode("99").unwrap(), "");
    }

    #[test]
    fn test_trait_restore() {
        let codec = TextualCodec::new("CGTA").unwrap();
        let encoded = DnaCodec::encode(&codec).unwrap();
        assert_eq!(codec.restore(&encoded).unwrap(), codec.sequence());
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let len = rng.gen_range(1..1000);
            let input: String = (0..len)
                .map(|_| Nucleotide::ALL[rng.gen_range(0..4)].to_char())
                .collect();
            let codec = TextualCodec::new(input.clone()).unwrap();
            let encoded = codec.encode().expect("Encoding failed");
            let decoded = codec.decode(&encoded).expect("Decoding failed");
            assert_eq!(decoded, input);
        }
    }
}
