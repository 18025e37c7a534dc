//! Configuration loading
//!
//! Settings live in a TOML file (default `<data dir>/Terkode/config.toml`).
//! A missing file means "all defaults"; a malformed one is an error so a typo
//! never silently changes which providers are queried.

pub mod macros;
pub mod schemas;

pub use schemas::{
    Config, EnrichmentConfig, LoggingConfig, MonitorConfig, ProvidersConfig, WatchlistConfig,
};

use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Load configuration from `path`, falling back to defaults when it does not exist
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        logger::debug(
            LogTag::Config,
            &format!("No config at {}, using defaults", path.display()),
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config =
        toml::from_str(&content).map_err(|e| ConfigError::parse(path, &content, &e))?;

    config.validate()?;

    if let Ok(table) = content.parse::<toml::Table>() {
        for key in unknown_keys(&table) {
            logger::warning(
                LogTag::Config,
                &format!("Unknown config key '{}' in {} (ignored)", key, path.display()),
            );
        }
    }

    logger::debug(
        LogTag::Config,
        &format!("Loaded config from {}", path.display()),
    );

    Ok(config)
}

/// Accepted keys for each top-level table
fn section_fields(section: &str) -> Option<&'static [&'static str]> {
    match section {
        "providers" => Some(ProvidersConfig::FIELDS),
        "enrichment" => Some(EnrichmentConfig::FIELDS),
        "monitor" => Some(MonitorConfig::FIELDS),
        "watchlist" => Some(WatchlistConfig::FIELDS),
        "logging" => Some(LoggingConfig::FIELDS),
        _ => None,
    }
}

/// Dotted paths of keys that no config struct declares
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();

    for (section, value) in table {
        let fields = match section_fields(section) {
            Some(fields) => fields,
            None => {
                unknown.push(section.clone());
                continue;
            }
        };

        if let Some(inner) = value.as_table() {
            unknown.extend(
                inner
                    .keys()
                    .filter(|key| !fields.contains(&key.as_str()))
                    .map(|key| format!("{}.{}", section, key)),
            );
        }
    }

    unknown
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.providers;
        if !p.dexscreener_enabled && !p.jupiter_enabled && !p.pumpfun_enabled {
            return Err(ConfigError::Invalid(
                "at least one provider must be enabled".to_string(),
            ));
        }
        if p.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "providers.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.monitor.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "monitor.refresh_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.providers.timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.monitor.refresh_interval_secs)
    }

    /// Configured watchlist path, or the default home-directory file
    pub fn watchlist_path(&self) -> PathBuf {
        if self.watchlist.path.trim().is_empty() {
            crate::paths::get_default_watchlist_path()
        } else {
            PathBuf::from(self.watchlist.path.trim())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.provider_timeout(), Duration::from_secs(10));
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[providers]\njupiter_enabled = false\n\n[monitor]\nrefresh_interval_secs = 5").unwrap();

        let config = load_config(file.path()).unwrap();

        assert!(config.providers.dexscreener_enabled);
        assert!(!config.providers.jupiter_enabled);
        assert_eq!(config.providers.timeout_secs, 10);
        assert_eq!(config.monitor.refresh_interval_secs, 5);
        assert!(config.enrichment.holder_count_enabled);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[providers\ntimeout_secs = ").unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_are_reported() {
        let table: toml::Table = "[providers]\ntimeout_sec = 5\njupiter_enabled = true\n\n[colors]\ntheme = \"dark\""
            .parse()
            .unwrap();

        let mut unknown = unknown_keys(&table);
        unknown.sort();
        assert_eq!(unknown, vec!["colors".to_string(), "providers.timeout_sec".to_string()]);
    }

    #[test]
    fn test_all_providers_disabled_is_rejected() {
        let mut config = Config::default();
        config.providers.dexscreener_enabled = false;
        config.providers.jupiter_enabled = false;
        config.providers.pumpfun_enabled = false;

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_watchlist_path_override() {
        let mut config = Config::default();
        assert!(config.watchlist_path().ends_with(".terkode-watchlist.json"));

        config.watchlist.path = "/tmp/custom-watchlist.json".to_string();
        assert_eq!(
            config.watchlist_path(),
            PathBuf::from("/tmp/custom-watchlist.json")
        );
    }
}
