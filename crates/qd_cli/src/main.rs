//! Referee-protocol front end
//!
//! Binds the engine to the real streams: referee frames on stdin, action
//! lines on stdout. All diagnostics go to stderr; stdout carries nothing
//! but the protocol.

use std::io;

use anyhow::Result;

use qd_core::DecisionConfig;

fn main() -> Result<()> {
    init_tracing();

    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let config = DecisionConfig::default();
    qd_core::run(stdin.lock(), io::BufWriter::new(stdout.lock()), &config)?;
    Ok(())
}

/// Initialize tracing/logging on stderr.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
