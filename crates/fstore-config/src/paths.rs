//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/fstore/`, `~/.cache/fstore/`
//! - macOS: `~/Library/Application Support/fstore/`, `~/Library/Caches/fstore/`
//! - Windows: `%APPDATA%\fstore\`, `%LOCALAPPDATA%\fstore\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "fstore";

/// Get the application config directory
/// Returns ~/.config/fstore/ on Linux, ~/Library/Application Support/fstore/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory (log files live here in release builds)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default target directory for downloads: the current working directory
pub fn download_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Could not determine working directory")
}

/// Get path to the global app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
