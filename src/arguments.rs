/// Command-line interface definition
///
/// Global flags control configuration, watchlist location and logging; each
/// subcommand maps to one flow in `run`.
use crate::logger::{LogLevel, LogTag, LoggerConfig};
use crate::tokens::trending::DEFAULT_TRENDING_LIMIT;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "terkode",
    version,
    about = "Terminal-based memecoin data fetcher and tracker"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: <data dir>/Terkode/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Watchlist file (overrides the config value)
    #[arg(long, global = true, value_name = "PATH")]
    pub watchlist: Option<PathBuf>,

    /// Minimum console log level: error, warning, info, debug, verbose
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Show every log line, including verbose API bodies
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(flatten)]
    pub debug: DebugFlags,
}

/// Per-tag debug switches (`--debug-<tag>`)
#[derive(Args, Debug, Default, Clone)]
pub struct DebugFlags {
    #[arg(long, global = true)]
    pub debug_system: bool,
    #[arg(long, global = true)]
    pub debug_api: bool,
    #[arg(long, global = true)]
    pub debug_resolver: bool,
    #[arg(long, global = true)]
    pub debug_enrichment: bool,
    #[arg(long, global = true)]
    pub debug_watchlist: bool,
    #[arg(long, global = true)]
    pub debug_monitor: bool,
    #[arg(long, global = true)]
    pub debug_config: bool,
}

impl DebugFlags {
    /// Debug keys of every enabled flag
    pub fn enabled_keys(&self) -> Vec<String> {
        [
            (self.debug_system, LogTag::System),
            (self.debug_api, LogTag::Api),
            (self.debug_resolver, LogTag::Resolver),
            (self.debug_enrichment, LogTag::Enrichment),
            (self.debug_watchlist, LogTag::Watchlist),
            (self.debug_monitor, LogTag::Monitor),
            (self.debug_config, LogTag::Config),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, tag)| tag.to_debug_key())
        .collect()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get detailed information about a token by contract address
    Get {
        address: String,
        /// Watch the token, refreshing on the configured interval
        #[arg(short, long)]
        watch: bool,
    },

    /// Manage your token watchlist
    Watchlist(WatchlistArgs),

    /// Search for tokens by name or symbol
    Search { query: String },

    /// Show trending Solana tokens
    Trending {
        /// Number of tokens to show
        #[arg(short, long, default_value_t = DEFAULT_TRENDING_LIMIT)]
        limit: usize,
    },
}

#[derive(Args, Debug)]
pub struct WatchlistArgs {
    /// Add token to watchlist
    #[arg(short, long, value_name = "ADDRESS", conflicts_with_all = ["remove", "show"])]
    pub add: Option<String>,

    /// Remove token from watchlist
    #[arg(short, long, value_name = "ADDRESS", conflicts_with = "show")]
    pub remove: Option<String>,

    /// Show current watchlist (default when no other option is given)
    #[arg(short, long)]
    pub show: bool,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| format!("unknown log level '{}'", value))
}

impl Cli {
    /// Logger settings implied by the flags
    pub fn logger_config(&self, file_logging: bool) -> LoggerConfig {
        let min_level = if self.verbose {
            LogLevel::Verbose
        } else {
            self.log_level.unwrap_or(LogLevel::Warning)
        };

        LoggerConfig {
            min_level,
            debug_tags: self.debug.enabled_keys().into_iter().collect(),
            file_logging,
        }
    }
}
