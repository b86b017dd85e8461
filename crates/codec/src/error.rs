use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No bits were found in the encoded DNA string")]
    NoMatchFound,
    #[error("Invalid nucleotide {symbol:?} at position {position}")]
    InvalidNucleotide { symbol: char, position: usize },
    #[error("Invalid nucleotide code {code:?} at position {position}")]
    InvalidCode { code: String, position: usize },
    #[error("Sequence of {len} nucleotides exceeds packed capacity of {max}")]
    SequenceTooLong { len: usize, max: usize },
    #[error("Packed value uses {bits} bits, more than {length} nucleotides can hold")]
    LengthMismatch { length: usize, bits: u32 },
    #[error("Decoding error: {0}")]
    Decode(String),
}

/// Convenience alias used throughout the codec crate.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    pub(crate) fn empty_sequence() -> Self {
        Self::InvalidInput("you must pass a dna string".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::InvalidNucleotide {
            symbol: 'N',
            position: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains("'N'"));
        assert!(msg.contains('3'));

        let err = CodecError::SequenceTooLong { len: 65, max: 64 };
        assert_eq!(
            err.to_string(),
            "Sequence of 65 nucleotides exceeds packed capacity of 64"
        );
    }

    #[test]
    fn test_empty_sequence_is_invalid_input() {
        assert!(matches!(
            CodecError::empty_sequence(),
            CodecError::InvalidInput(_)
        ));
    }
}
