use clap::Args;
use dnapack_codec::{CodecConfig, CodecStrategy};

use crate::defaults;

/// Options shared by `encode` and `decode`.
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Codec strategy (textual, packed-int, bit-packed)
    #[arg(short, long, default_value = defaults::STRATEGY)]
    pub strategy: CodecStrategy,

    #[command(flatten)]
    pub validation: ValidationArgs,

    /// Print a JSON object instead of the bare value
    #[arg(long)]
    pub json: bool,
}

impl CodecArgs {
    pub fn config(&self) -> CodecConfig {
        self.validation.config()
    }
}

/// Validation switch shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidationArgs {
    /// Degrade silently on unknown symbols instead of failing
    ///
    /// Unknown nucleotides pass through (textual) or become A (packed forms),
    /// unknown bit pairs are dropped and packed lengths are not checked.
    #[arg(long)]
    pub lenient: bool,
}

impl ValidationArgs {
    pub fn config(&self) -> CodecConfig {
        if self.lenient {
            CodecConfig::lenient()
        } else {
            CodecConfig::strict()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        codec: CodecArgs,
    }

    #[test]
    fn test_defaults_to_strict() {
        let cli = TestCli::parse_from(["dnapack"]);
        assert_eq!(cli.codec.strategy, CodecStrategy::Textual);
        assert_eq!(cli.codec.config(), CodecConfig::strict());
        assert_eq!(ValidationArgs::default().config(), CodecConfig::strict());
    }

    #[test]
    fn test_lenient_flag() {
        let cli = TestCli::parse_from(["dnapack", "--lenient", "-s", "int"]);
        assert_eq!(cli.codec.strategy, CodecStrategy::PackedInteger);
        assert_eq!(cli.codec.config(), CodecConfig::lenient());
    }
}
