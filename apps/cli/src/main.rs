//! # Cemention CLI
//!
//! Command-line storefront for the Cemention cement marketplace.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Parse arguments (clap)                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  2. Load ClientConfig (client.toml + CEMENTION_* env)                   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  3. Initialize tracing (RUST_LOG, else config.log_level)                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  4. Run the subcommand against the storefront backend                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod commands;
mod render;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cemention_client::{ClientConfig, ClientError};

use crate::cli::Cli;
use crate::commands::Context;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::load(cli.config.clone()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(2);
        }
    };

    init_tracing(&config.log_level);

    let ctx = match Context::new(config, cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(error) => {
            eprintln!("error: {error:#}");
            process::exit(2);
        }
    };

    if let Err(error) = commands::run(cli.command, &ctx).await {
        eprintln!("error: {error:#}");
        if let Some(client_error) = error.downcast_ref::<ClientError>() {
            if client_error.is_auth_error() {
                eprintln!("hint: run `cemention login` to start a new session");
            }
        }
        process::exit(1);
    }
}

/// Initializes logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise the config's `log_level` applies.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,cemention_cli={0},cemention_client={0}",
            default_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
