//! Tracing initialization.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::defaults;

static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// `DNAPACK_LOG` takes precedence; otherwise `verbose` selects between the
/// quiet and debug filters. Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            defaults::VERBOSE_LOG_FILTER
        } else {
            defaults::LOG_FILTER
        };
        let filter =
            EnvFilter::try_from_env(defaults::LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(verbose),
            )
            .with(filter)
            .init();
    });
}
