use anyhow::Result;
use dnapack_codec::{CodecConfig, CodecStrategy};

use crate::printing::{emit, DemoReport, DemoRow};

/// Encode and decode `dna` with every strategy and print each outcome.
///
/// A strategy that fails is reported in its row; the command still succeeds.
pub fn run_demo(dna: &str, config: CodecConfig, json: bool) -> Result<()> {
    let length = dna.chars().count();
    let results = CodecStrategy::ALL
        .into_iter()
        .map(|strategy| {
            let outcome = strategy.encode(dna, config).and_then(|encoded| {
                let decoded = strategy.decode(&encoded, Some(length), config)?;
                Ok((encoded.to_string(), decoded))
            });
            match outcome {
                Ok((encoded, decoded)) => DemoRow {
                    strategy,
                    encoded: Some(encoded),
                    decoded: Some(decoded),
                    error: None,
                },
                Err(e) => DemoRow {
                    strategy,
                    encoded: None,
                    decoded: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    let report = DemoReport {
        sequence: dna.to_string(),
        length,
        results,
    };
    emit(&report, json)
}
