//! Centralized path resolution for terkode
//!
//! All default file and directory paths are resolved here so the rest of the
//! crate receives plain `PathBuf` values and never consults the home directory
//! itself.
//!
//! ## Path Strategy
//!
//! Config and logs live under the platform data directory:
//! - **macOS**: `~/Library/Application Support/Terkode/`
//! - **Windows**: `%LOCALAPPDATA%\Terkode\`
//! - **Linux**: `$XDG_DATA_HOME/Terkode/` (fallback `~/.local/share/Terkode/`)
//!
//! The watchlist keeps its historical location in the home directory:
//! `~/.terkode-watchlist.json`.

use once_cell::sync::Lazy;
use std::path::PathBuf;

const APP_DIR: &str = "Terkode";
const WATCHLIST_FILE: &str = ".terkode-watchlist.json";

/// Lazy-initialized base directory (thread-safe)
static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(resolve_base_directory);

fn resolve_base_directory() -> PathBuf {
  if let Some(dir) = dirs::data_local_dir() {
    return dir.join(APP_DIR);
  }

  if let Some(dir) = dirs::data_dir() {
    return dir.join(APP_DIR);
  }

  if let Some(home) = dirs::home_dir() {
    return home.join(APP_DIR);
  }

  PathBuf::from(APP_DIR)
}

/// Returns the base directory for all terkode data
pub fn get_base_directory() -> PathBuf {
  BASE_DIRECTORY.clone()
}

/// Returns the logs directory path
pub fn get_logs_directory() -> PathBuf {
  BASE_DIRECTORY.join("logs")
}

/// Returns the main configuration file path
pub fn get_config_path() -> PathBuf {
  BASE_DIRECTORY.join("config.toml")
}

/// Returns the default watchlist file path
///
/// Falls back to the working directory when no home directory is known.
pub fn get_default_watchlist_path() -> PathBuf {
  match dirs::home_dir() {
    Some(home) => home.join(WATCHLIST_FILE),
    None => PathBuf::from(WATCHLIST_FILE),
  }
}
