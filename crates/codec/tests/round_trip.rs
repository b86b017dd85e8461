//! Property tests for the codec laws.

use dnapack_codec::{
    bit_packed_len, BitPackedCodec, CodecConfig, CodecStrategy, PackedInt, PackedIntegerCodec,
    TextualCodec, PACKED_CAPACITY,
};
use proptest::prelude::*;

fn dna(max_len: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ACGT]{{1,{max_len}}}")).unwrap()
}

proptest! {
    #[test]
    fn textual_round_trip(seq in dna(512)) {
        let codec = TextualCodec::new(seq.as_str()).unwrap();
        let encoded = codec.encode().unwrap();
        prop_assert_eq!(encoded.len(), 2 * seq.len());
        prop_assert_eq!(codec.decode(&encoded).unwrap(), seq);
    }

    #[test]
    fn packed_integer_round_trip(seq in dna(PACKED_CAPACITY)) {
        let codec = PackedIntegerCodec::new(seq.as_str()).unwrap();
        let encoded = codec.encode().unwrap();
        prop_assert_eq!(codec.decode(encoded, seq.len()).unwrap(), seq);
    }

    #[test]
    fn packed_integer_fits_in_two_bits_per_base(seq in dna(PACKED_CAPACITY)) {
        let encoded = PackedIntegerCodec::new(seq.as_str()).unwrap().encode().unwrap();
        let width = (PackedInt::BITS - encoded.leading_zeros()) as usize;
        prop_assert!(width <= 2 * seq.len());
    }

    #[test]
    fn packed_integer_width_without_leading_a(seq in dna(PACKED_CAPACITY)) {
        prop_assume!(!seq.starts_with('A'));
        let encoded = PackedIntegerCodec::new(seq.as_str()).unwrap().encode().unwrap();
        let width = (PackedInt::BITS - encoded.leading_zeros()) as usize;
        prop_assert!(width <= 2 * seq.len());
        prop_assert!(width > 2 * (seq.len() - 1));
    }

    #[test]
    fn bit_packed_round_trip(seq in dna(2048)) {
        let codec = BitPackedCodec::new(seq.as_str()).unwrap();
        let encoded = codec.encode().unwrap();
        prop_assert_eq!(encoded.len(), bit_packed_len(seq.len()));
        prop_assert_eq!(codec.decode(&encoded).unwrap(), seq);
    }

    #[test]
    fn strategies_agree_on_lenient_round_trip(seq in dna(PACKED_CAPACITY)) {
        let config = CodecConfig::lenient();
        for strategy in CodecStrategy::ALL {
            let encoded = strategy.encode(&seq, config).unwrap();
            let decoded = strategy.decode(&encoded, Some(seq.len()), config).unwrap();
            prop_assert_eq!(&decoded, &seq);
        }
    }

    #[test]
    fn textual_decode_never_panics(input in ".{0,64}") {
        let codec = TextualCodec::with_config("A", CodecConfig::lenient()).unwrap();
        let _ = codec.decode(&input);
    }
}

#[test]
fn scenario_textual_demo() {
    let codec = TextualCodec::new("ATCCTG").unwrap();
    let encoded = codec.encode().unwrap();
    assert_eq!(encoded, "001101011110");
    assert_eq!(codec.decode(&encoded).unwrap(), "ATCCTG");
}

#[test]
fn scenario_packed_demo() {
    let codec = PackedIntegerCodec::new("ATCCTG").unwrap();
    let encoded = codec.encode().unwrap();
    assert_eq!(codec.decode(encoded, "ATCCTG".len()).unwrap(), "ATCCTG");
}
