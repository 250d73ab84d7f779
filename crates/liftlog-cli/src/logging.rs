//! Subscriber setup for the `liftlog` binary.

use std::env;
use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `level` when set. Initializing twice is a no-op.
pub fn init(level: &str) {
    let env_filter = env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(level),
        |directive| EnvFilter::new(&directive),
    );

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init();
}
