mod args;
mod commands;
pub mod defaults;
mod logging;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{CodecArgs, ValidationArgs};
use commands::{decode, demo, encode};

/// dnapack: 2-bit DNA encoder
///
/// Packs A/C/G/T sequences into two bits per base, as a binary string, a
/// single integer, or a length-prefixed byte payload, and unpacks them again.
#[derive(Parser, Debug)]
#[command(name = "dnapack")]
#[command(author, version, about = "Encodes DNA strings into 2-bit packed forms and back", long_about = None)]
struct Cli {
    /// Log codec activity at debug level (DNAPACK_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a DNA sequence.
    ///
    /// Prints the binary string (textual), the decimal integer (packed-int)
    /// or the hex payload (bit-packed).
    Encode {
        /// Sequence over A, C, G, T
        dna: String,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Decode an encoded sequence.
    Decode {
        /// Encoded value as printed by `encode`
        ///
        /// packed-int also accepts 0b/0x prefixed values.
        encoded: String,

        /// Number of nucleotides to recover (required for packed-int)
        #[arg(short, long)]
        length: Option<usize>,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Encode and decode a sequence with every strategy.
    Demo {
        /// Sequence over A, C, G, T
        #[arg(default_value = defaults::DEMO_SEQUENCE)]
        dna: String,

        #[command(flatten)]
        validation: ValidationArgs,

        /// Print a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode { dna, codec } => {
            encode::encode_sequence(&dna, &codec)?;
        }
        Commands::Decode {
            encoded,
            length,
            codec,
        } => {
            decode::decode_sequence(&encoded, length, &codec)?;
        }
        Commands::Demo {
            dna,
            validation,
            json,
        } => {
            demo::run_demo(&dna, validation.config(), json)?;
        }
    }

    Ok(())
}
