//! Codec configuration.

use serde::{Deserialize, Serialize};

/// How a codec treats symbols and codes outside the 4-letter alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Reject unknown symbols and codes with an error.
    #[default]
    Strict,
    /// Degrade silently: unknown symbols pass through or map to code 0,
    /// unknown codes are dropped, and packed lengths are not checked.
    Lenient,
}

impl Validation {
    #[inline]
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Options shared by every codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub validation: Validation,
}

impl CodecConfig {
    pub const fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            validation: Validation::Lenient,
        }
    }
}
