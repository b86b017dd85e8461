use std::fmt;

use anyhow::{Context, Result};
use dnapack_codec::CodecStrategy;
use serde::Serialize;

/// Result of `dnapack encode`.
#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub strategy: CodecStrategy,
    pub length: usize,
    pub encoded: String,
}

impl fmt::Display for EncodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

/// Result of `dnapack decode`.
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub strategy: CodecStrategy,
    pub length: usize,
    pub decoded: String,
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decoded)
    }
}

/// One strategy's outcome in `dnapack demo`.
#[derive(Debug, Serialize)]
pub struct DemoRow {
    pub strategy: CodecStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of `dnapack demo`.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub sequence: String,
    pub length: usize,
    pub results: Vec<DemoRow>,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🧬 Sequence: {} ({} bp)", self.sequence, self.length)?;
        for row in &self.results {
            match (&row.encoded, &row.decoded, &row.error) {
                (Some(encoded), Some(decoded), _) => {
                    let mark = if *decoded == self.sequence { "✓" } else { "✗" };
                    write!(f, "\n  {mark} {}: {encoded} -> {decoded}", row.strategy)?;
                }
                (_, _, Some(error)) => write!(f, "\n  ✗ {}: {error}", row.strategy)?,
                _ => write!(f, "\n  ✗ {}: no result", row.strategy)?,
            }
        }
        Ok(())
    }
}

/// Print `report` as plain text or pretty JSON.
pub fn emit<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(report).context("Failed to render JSON")?;
        println!("{rendered}");
    } else {
        println!("{report}");
    }
    Ok(())
}
