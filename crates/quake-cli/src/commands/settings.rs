//! Settings subcommand implementations.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};

use quake_core::{MinMagnitude, OrderBy};

use crate::output;
use crate::settings::{Settings, storage};

#[derive(Args, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsSubcommand {
    /// Display the stored settings
    Show(ShowArgs),

    /// Change one or more settings
    Set(SetArgs),

    /// Restore the default settings
    Reset,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output settings as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Minimum magnitude
    #[arg(long)]
    pub min_magnitude: Option<MinMagnitude>,

    /// Sort order: time, time-asc, magnitude or magnitude-asc
    #[arg(long)]
    pub order_by: Option<OrderBy>,

    /// Maximum number of earthquakes to request
    #[arg(long)]
    pub limit: Option<u32>,

    /// Event query endpoint
    #[arg(long)]
    pub base_url: Option<String>,
}

pub fn handle(cmd: SettingsCommand) -> Result<()> {
    match cmd.command {
        SettingsSubcommand::Show(args) => show(args),
        SettingsSubcommand::Set(args) => set(args),
        SettingsSubcommand::Reset => reset(),
    }
}

fn show(args: ShowArgs) -> Result<()> {
    let settings = storage::load_settings().context("Failed to load settings")?;

    if args.json {
        return output::json_pretty(&settings);
    }

    print_settings(&settings)
}

fn set(args: SetArgs) -> Result<()> {
    let mut settings = storage::load_settings().context("Failed to load settings")?;

    if !apply(&mut settings, args) {
        bail!("Nothing to change. Pass at least one of --min-magnitude, --order-by, --limit or --base-url.");
    }

    // Reject values that would not produce a usable query.
    settings.to_query()?;

    storage::save_settings(&settings).context("Failed to save settings")?;

    output::success("Settings saved");
    println!();
    print_settings(&settings)
}

fn reset() -> Result<()> {
    storage::clear_settings().context("Failed to reset settings")?;
    output::success("Settings reset to defaults");
    Ok(())
}

/// Copy the given values into `settings`. Returns false if none were given.
fn apply(settings: &mut Settings, args: SetArgs) -> bool {
    let mut changed = false;

    if let Some(min_magnitude) = args.min_magnitude {
        settings.min_magnitude = min_magnitude;
        changed = true;
    }
    if let Some(order_by) = args.order_by {
        settings.order_by = order_by;
        changed = true;
    }
    if let Some(limit) = args.limit {
        settings.limit = limit;
        changed = true;
    }
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
        changed = true;
    }

    changed
}

fn print_settings(settings: &Settings) -> Result<()> {
    let query = settings.to_query()?;

    output::field("Minimum magnitude", &settings.min_magnitude.to_string());
    output::field("Order by", settings.order_by.as_str());
    output::field("Limit", &settings.limit.to_string());
    output::field("Feed URL", &settings.base_url);
    output::field("Query", &query.to_url());

    Ok(())
}
