use anyhow::{Context, Result};
use tracing::debug;

use crate::args::CodecArgs;
use crate::printing::{emit, EncodeReport};

pub fn encode_sequence(dna: &str, args: &CodecArgs) -> Result<()> {
    debug!(strategy = %args.strategy, lenient = args.validation.lenient, "encode command");

    let encoded = args
        .strategy
        .encode(dna, args.config())
        .with_context(|| format!("Failed to encode with the {} strategy", args.strategy))?;

    let report = EncodeReport {
        strategy: args.strategy,
        length: dna.chars().count(),
        encoded: encoded.to_string(),
    };
    emit(&report, args.json)
}
