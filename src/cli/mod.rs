//! cli
//!
//! Command-line interface layer for gitbind.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install logging
//! - Dispatch to command handlers, which drive the host builtins
//!
//! # Architecture
//!
//! The CLI layer is thin. Every command goes through [`crate::host::Host`]
//! exactly as a scripting runtime would, so the binary exercises the same
//! builtins, argument validation, and error taxonomy.

pub mod args;
pub mod commands;

pub use args::{BlobField, Cli, Command, Shell};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::host::{Host, HostOptions};
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(cli.debug, &config);
    if let Some(path) = config.path() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let ctx = commands::Context {
        host: Host::new(HostOptions::from(&config)),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins; otherwise `--debug`, then the configured filter, then
/// `warn`.
fn init_tracing(debug: bool, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if debug {
            "debug"
        } else {
            config.log_filter().unwrap_or("warn")
        };
        EnvFilter::new(directive)
    });

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
