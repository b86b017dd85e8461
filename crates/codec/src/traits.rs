use crate::error::Result;

/// Core trait for DNA codecs.
///
/// This trait defines the "contract" every strategy follows. A codec owns an
/// immutable source sequence and must be able to:
/// 1.  `encode`: Turn that sequence into its encoded form.
/// 2.  `restore`: Turn an encoded form back into a DNA string, using whatever
///     sidecar information the codec itself holds.
pub trait DnaCodec {
    type Encoded;

    /// The source sequence the codec was constructed with.
    fn sequence(&self) -> &str;

    fn encode(&self) -> Result<Self::Encoded>;

    fn restore(&self, encoded: &Self::Encoded) -> Result<String>;
}
