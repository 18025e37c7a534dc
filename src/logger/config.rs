/// Logger configuration shared by all logging calls
///
/// The configuration is process-global and set once from the parsed command
/// line. Reads clone a snapshot so no lock is held while formatting.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped (errors always pass)
    pub min_level: LogLevel,
    /// Tags whose debug output was requested via --debug-<tag>
    pub debug_tags: HashSet<String>,
    /// Mirror log lines into the daily log file
    pub file_logging: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Warning,
            debug_tags: HashSet::new(),
            file_logging: false,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(cfg) => cfg.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut cfg) => *cfg = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

impl LoggerConfig {
    pub fn is_debug_enabled_for(&self, tag: &LogTag) -> bool {
        self.min_level >= LogLevel::Debug || self.debug_tags.contains(&tag.to_debug_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_enables_single_tag() {
        let mut cfg = LoggerConfig::default();
        cfg.debug_tags.insert("api".to_string());

        assert!(cfg.is_debug_enabled_for(&LogTag::Api));
        assert!(!cfg.is_debug_enabled_for(&LogTag::Watchlist));
    }

    #[test]
    fn test_debug_threshold_enables_all_tags() {
        let mut cfg = LoggerConfig::default();
        cfg.min_level = LogLevel::Debug;

        assert!(cfg.is_debug_enabled_for(&LogTag::Monitor));
    }
}
