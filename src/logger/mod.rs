//! Structured logging system for terkode
//!
//! This module provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via --debug-<tag> flags
//! - Dual output: colored console (stderr) + daily log file
//!
//! ## Usage
//!
//! ```rust
//! use terkode::logger::{self, LogTag};
//!
//! logger::error(LogTag::Watchlist, "Failed to save watchlist");
//! logger::warning(LogTag::Config, "Ignoring unknown provider");
//! logger::info(LogTag::Resolver, "Resolved token via DexScreener");
//! logger::debug(LogTag::Api, "Request details: ..."); // Only if --debug-api
//! logger::verbose(LogTag::Api, "Raw payload: ...");   // Only if --verbose
//! ```
//!
//! ## Initialization
//!
//! Call once at startup, after the command line has been parsed:
//! ```rust,no_run
//! use terkode::logger::{self, LoggerConfig};
//!
//! logger::init(LoggerConfig::default(), None);
//! ```

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

use std::path::Path;

/// Initialize the logger system
///
/// Installs the configuration and, when `file_logging` is set and a logs
/// directory is given, opens the daily log file.
pub fn init(config: LoggerConfig, logs_dir: Option<&Path>) {
    let file_logging = config.file_logging;
    set_logger_config(config);

    if file_logging {
        if let Some(dir) = logs_dir {
            file::init_file_logging(dir);
        }
    }
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown by default)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (shown with --log-level info or lower)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Debug logs are ONLY shown when the --debug-<tag> flag for that tag is
/// provided, or the minimum level is debug or lower.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Force flush all pending log writes
pub fn flush() {
    file::flush_file_logging();
}
