use anyhow::{Context, Result};
use dnapack_codec::Encoded;
use tracing::debug;

use crate::args::CodecArgs;
use crate::printing::{emit, DecodeReport};

pub fn decode_sequence(encoded: &str, length: Option<usize>, args: &CodecArgs) -> Result<()> {
    debug!(strategy = %args.strategy, ?length, lenient = args.validation.lenient, "decode command");

    let parsed = Encoded::parse(args.strategy, encoded)
        .with_context(|| format!("Failed to parse {} input", args.strategy))?;
    let decoded = args
        .strategy
        .decode(&parsed, length, args.config())
        .with_context(|| format!("Failed to decode with the {} strategy", args.strategy))?;

    let report = DecodeReport {
        strategy: args.strategy,
        length: decoded.chars().count(),
        decoded,
    };
    emit(&report, args.json)
}
