//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::list::ListArgs;
use crate::commands::settings::SettingsCommand;

/// Browse recent earthquakes reported by the USGS.
#[derive(Parser, Debug)]
#[command(name = "quake")]
#[command(author, version = env!("QUAKE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recent earthquakes
    List(ListArgs),

    /// Show or change the stored query settings
    Settings(SettingsCommand),
}
