//! Bounded LRU - A capacity-bounded in-memory cache
//!
//! Runs a command session over stdin, printing one JSON reply per line.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_lru::{Config, Session};

/// Main entry point for the cache session.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the session and its cache
/// 4. Execute commands from stdin until EOF, one JSON reply per line
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, policy={}",
        config.capacity, config.policy
    );

    let mut session = Session::from_config(&config);

    let replies = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("session I/O failed")?;

    info!(
        "Session finished after {} replies with {} entries",
        replies,
        session.cache().len()
    );
    Ok(())
}
