//! List command implementation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use colored::Colorize;
use tracing::debug;

use quake_core::{FeedQuery, MinMagnitude, OrderBy, ParseMode};
use quake_http::{EarthquakeLoader, HttpFetcher};

use crate::output;
use crate::settings::{Settings, storage};

/// How long the DNS connectivity check may take before the network is considered down.
const CONNECTIVITY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Minimum magnitude (defaults to the stored setting)
    #[arg(long)]
    pub min_magnitude: Option<MinMagnitude>,

    /// Sort order: time, time-asc, magnitude or magnitude-asc
    #[arg(long)]
    pub order_by: Option<OrderBy>,

    /// Maximum number of earthquakes to request
    #[arg(long)]
    pub limit: Option<u32>,

    /// Event query endpoint
    #[arg(long, env = "QUAKE_FEED_URL")]
    pub base_url: Option<String>,

    /// Skip malformed entries and keep the ones after them
    #[arg(long, conflicts_with = "strict")]
    pub lenient: bool,

    /// Discard the whole response if any entry is malformed
    #[arg(long)]
    pub strict: bool,

    /// Output earthquakes as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let settings = storage::load_settings().context("Failed to load settings")?;
    let query = build_query(settings, &args)?;

    if !is_online(&query).await {
        eprintln!("{}", "No internet connection.".yellow());
        return Ok(());
    }

    let mode = parse_mode(&args);

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;
    let mut loader = EarthquakeLoader::new(Arc::new(fetcher)).with_parse_mode(mode);

    eprintln!("{}", "Loading earthquakes...".dimmed());

    let handle = loader.start(query.to_url());
    let token = handle.cancellation_token();

    let quakes = tokio::select! {
        quakes = handle.wait() => quakes,
        _ = tokio::signal::ctrl_c() => {
            token.cancel();
            None
        }
    };

    let Some(quakes) = quakes else {
        eprintln!("{}", "Cancelled.".dimmed());
        return Ok(());
    };

    if args.json {
        return if args.pretty {
            output::json_pretty(&quakes)
        } else {
            output::json(&quakes)
        };
    }

    if quakes.is_empty() {
        eprintln!("{}", "No earthquakes found.".dimmed());
        return Ok(());
    }

    for quake in &quakes {
        output::earthquake(quake, &Local);
    }

    Ok(())
}

/// By default the list stops at the first malformed entry.
fn parse_mode(args: &ListArgs) -> ParseMode {
    if args.lenient {
        ParseMode::SkipInvalid
    } else if args.strict {
        ParseMode::FailFast
    } else {
        ParseMode::Truncate
    }
}

/// Stored settings with any command-line overrides applied.
fn build_query(mut settings: Settings, args: &ListArgs) -> Result<FeedQuery> {
    if let Some(min_magnitude) = args.min_magnitude {
        settings.min_magnitude = min_magnitude;
    }
    if let Some(order_by) = args.order_by {
        settings.order_by = order_by;
    }
    if let Some(limit) = args.limit {
        settings.limit = limit;
    }
    if let Some(base_url) = &args.base_url {
        settings.base_url = base_url.clone();
    }

    settings.to_query()
}

/// Resolve the feed host to tell "offline" apart from "no results".
async fn is_online(query: &FeedQuery) -> bool {
    let (Some(host), Some(port)) = (query.host(), query.port()) else {
        return false;
    };

    match tokio::time::timeout(CONNECTIVITY_TIMEOUT, tokio::net::lookup_host((host, port))).await {
        Ok(Ok(mut addrs)) => addrs.next().is_some(),
        Ok(Err(e)) => {
            debug!(host, error = %e, "Feed host lookup failed");
            false
        }
        Err(_) => {
            debug!(host, "Feed host lookup timed out");
            false
        }
    }
}
