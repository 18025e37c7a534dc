/// Core logging implementation with automatic filtering
///
/// Decides whether a message is displayed based on level and tag, then hands
/// it to the format module for console and file output.
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Debug level requires --debug-<tag> for that tag (or a debug threshold)
/// 3. Everything else is compared against the minimum level threshold
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level == LogLevel::Debug {
        return config.is_debug_enabled_for(tag);
    }

    level <= config.min_level
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log(&config, &tag, level) {
        return;
    }

    super::format::format_and_log(&config, tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shows_warnings_only() {
        let cfg = LoggerConfig::default();

        assert!(should_log(&cfg, &LogTag::Api, LogLevel::Error));
        assert!(should_log(&cfg, &LogTag::Api, LogLevel::Warning));
        assert!(!should_log(&cfg, &LogTag::Api, LogLevel::Info));
        assert!(!should_log(&cfg, &LogTag::Api, LogLevel::Debug));
        assert!(!should_log(&cfg, &LogTag::Api, LogLevel::Verbose));
    }

    #[test]
    fn test_verbose_threshold_shows_everything() {
        let mut cfg = LoggerConfig::default();
        cfg.min_level = LogLevel::Verbose;

        assert!(should_log(&cfg, &LogTag::Resolver, LogLevel::Debug));
        assert!(should_log(&cfg, &LogTag::Resolver, LogLevel::Verbose));
    }
}
