//! Monty Hall Simulator
//!
//! A Terminal UI tool for playing and simulating the Monty Hall three-door
//! probability puzzle.
//!
//! This library provides functionality for:
//! - Playing single rounds through a phase-checked state machine
//! - Aggregating switch/stay win statistics
//! - Running non-interactive Monte-Carlo batches
//! - Injecting seeded or scripted randomness for reproducible results
//! - Rendering the game and a win-rate chart in an interactive TUI

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod tui;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level.
///
/// Logs go to `file` when given, stderr otherwise. `RUST_LOG` overrides
/// `level`.
pub fn init_logging(level: &str, file: Option<&std::path::Path>) -> Result<()> {
    use std::sync::Mutex;
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match file {
        Some(path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(log_file)),
            )
        }
        None => None,
    };
    let stderr_layer = file_layer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::custom(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
