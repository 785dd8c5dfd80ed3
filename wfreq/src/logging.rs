// src/logging.rs
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a default filter directive.
#[inline]
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber so the report on stdout stays clean.
///
/// `RUST_LOG` takes precedence over `verbosity` when it is set. Calling
/// this more than once keeps the first subscriber and returns `false`.
#[inline]
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    if !installed {
        debug!(verbosity, "subscriber already installed, keeping it");
    }
    installed
}
