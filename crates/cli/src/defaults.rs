//! Shared default values for the command-line interface.

/// Strategy used when `--strategy` is not given.
pub const STRATEGY: &str = "textual";

/// Sequence encoded by `dnapack demo` when none is given.
pub const DEMO_SEQUENCE: &str = "ATCCTG";

/// Environment variable holding a `tracing_subscriber::EnvFilter` directive.
pub const LOG_ENV: &str = "DNAPACK_LOG";

pub const LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "warn,dnapack=debug,dnapack_codec=debug";
