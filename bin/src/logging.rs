//! Console logging setup.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Maps `-v` counts and `-q` to a console level.
pub(crate) const fn console_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` overrides the level chosen by `-v`, but not `-q`.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let level = console_level(verbose, quiet);
    let filter = if quiet {
        EnvFilter::new(level.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
