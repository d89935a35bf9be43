//! Settings storage on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use super::Settings;

/// Get the settings file path.
fn settings_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "quake").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("settings.json"))
}

/// Save settings to disk.
pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path()?;
    let json = serde_json::to_string_pretty(settings)?;

    fs::write(&path, &json).context("Failed to write settings file")?;
    debug!(path = %path.display(), "Saved settings");

    Ok(())
}

/// Load settings from disk, falling back to defaults when none are stored.
pub fn load_settings() -> Result<Settings> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read settings file")?;
    let settings = serde_json::from_str(&json).context("Invalid settings file")?;

    Ok(settings)
}

/// Remove the stored settings.
pub fn clear_settings() -> Result<()> {
    let path = settings_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove settings file")?;
    }

    Ok(())
}
