/// Persistent watchlist of token addresses
///
/// Stored as a pretty-printed JSON array of strings. Reads fail open (a
/// missing or corrupt file is an empty watchlist); writes replace the whole
/// file and propagate errors. There is no locking, so the last writer wins.
use crate::errors::WatchlistError;
use crate::logger::{self, LogTag};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct WatchlistStore {
    path: PathBuf,
}

impl WatchlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current addresses in insertion order; empty on any read problem
    pub fn load(&self) -> Vec<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                logger::warning(
                    LogTag::Watchlist,
                    &format!("Cannot read watchlist {}: {}", self.path.display(), e),
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(addresses) => addresses,
            Err(e) => {
                logger::warning(
                    LogTag::Watchlist,
                    &format!("Ignoring corrupt watchlist {}: {}", self.path.display(), e),
                );
                Vec::new()
            }
        }
    }

    /// Append `address` unless already present; `true` when added
    pub fn add(&self, address: &str) -> Result<bool, WatchlistError> {
        let address = non_blank(address)?;
        let mut addresses = self.load();
        if addresses.iter().any(|a| a == address) {
            return Ok(false);
        }

        addresses.push(address.to_string());
        self.save(&addresses)?;

        logger::info(LogTag::Watchlist, &format!("Added {} to watchlist", address));
        Ok(true)
    }

    /// Drop every occurrence of `address`; `true` when something was removed
    pub fn remove(&self, address: &str) -> Result<bool, WatchlistError> {
        let address = non_blank(address)?;
        let mut addresses = self.load();
        let before = addresses.len();
        addresses.retain(|a| a != address);
        let removed = addresses.len() != before;

        self.save(&addresses)?;

        if removed {
            logger::info(LogTag::Watchlist, &format!("Removed {} from watchlist", address));
        }
        Ok(removed)
    }

    fn save(&self, addresses: &[String]) -> Result<(), WatchlistError> {
        let json = serde_json::to_string_pretty(addresses)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| WatchlistError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, json).map_err(|source| WatchlistError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Addresses are stored trimmed; a blank one is never written
fn non_blank(address: &str) -> Result<&str, WatchlistError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(WatchlistError::BlankAddress);
    }
    Ok(address)
}
