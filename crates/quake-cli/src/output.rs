//! Output formatting helpers.

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use colored::{Color, Colorize};
use serde::Serialize;

use quake_core::Earthquake;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Magnitude with one decimal place, e.g. `7.2`.
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{:.1}", magnitude)
}

/// Color used for a magnitude, by whole-number bucket.
pub fn magnitude_color(magnitude: f64) -> Color {
    let (r, g, b) = match magnitude.floor() as i64 {
        i64::MIN..=1 => (0x4A, 0x7B, 0xA7),
        2 => (0x04, 0xB4, 0xB3),
        3 => (0x10, 0xCA, 0xC9),
        4 => (0xF5, 0xA6, 0x23),
        5 => (0xFF, 0x7D, 0x50),
        6 => (0xFC, 0x66, 0x44),
        7 => (0xE7, 0x5F, 0x40),
        8 => (0xE1, 0x3A, 0x20),
        9 => (0xD9, 0x32, 0x18),
        _ => (0xC0, 0x38, 0x23),
    };
    Color::TrueColor { r, g, b }
}

/// Date in the form `Jan 30, 2016`.
pub fn format_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%b %d, %Y").to_string()
}

/// Time of day in the form `3:25 AM`.
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%-I:%M %p").to_string()
}

/// Print one earthquake as a two-line list entry.
pub fn earthquake<Tz: TimeZone>(quake: &Earthquake, tz: &Tz)
where
    Tz::Offset: std::fmt::Display,
{
    let magnitude = format!("{:>4}", format_magnitude(quake.magnitude()))
        .color(magnitude_color(quake.magnitude()))
        .bold();

    let (date, time) = match quake.time() {
        Some(utc) => {
            let local = utc.with_timezone(tz);
            (format_date(&local), format_time(&local))
        }
        None => ("unknown date".to_string(), String::new()),
    };

    println!(
        "{}  {} {}  {} {}",
        magnitude,
        quake.location_offset().dimmed(),
        quake.primary_location(),
        date.dimmed(),
        time.dimmed()
    );
    println!("      {}", quake.detail_url().dimmed());
}
