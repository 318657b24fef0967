//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str =
    "info,folio_core=debug,folio_content=debug,folio_notion=debug,folio_cli=debug";

/// The filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { "info" }
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `verbose`.
///
/// `log` records from the content crates are bridged into the subscriber.
/// Calling this twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
