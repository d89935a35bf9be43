//! quake - CLI tool for browsing recent earthquakes.
//!
//! This is a thin front end over `quake-core` and `quake-http`: it reads
//! the stored settings, builds the USGS query, runs one background load
//! and prints the result.

mod cli;
mod commands;
mod output;
mod settings;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{list, settings as settings_cmd};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::List(args) => list::run(args).await,
        Commands::Settings(cmd) => settings_cmd::handle(cmd),
    }
}

/// Logs always go to stderr; stdout is reserved for command output.
fn init_logging(verbosity: u8, json: bool) {
    let default_level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer().with_writer(std::io::stderr);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.with_target(false)).init();
    }
}
