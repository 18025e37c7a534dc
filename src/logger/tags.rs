/// Log tags identify which subsystem produced a log line.
///
/// Each tag maps to a `--debug-<key>` flag that enables its debug output.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Api,
    Resolver,
    Enrichment,
    Watchlist,
    Monitor,
    Config,
}

impl LogTag {
    /// Key used in `--debug-<key>` flags and in the enabled-tags filter
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Api => "api".to_string(),
            LogTag::Resolver => "resolver".to_string(),
            LogTag::Enrichment => "enrichment".to_string(),
            LogTag::Watchlist => "watchlist".to_string(),
            LogTag::Monitor => "monitor".to_string(),
            LogTag::Config => "config".to_string(),
        }
    }

    /// Uppercase label without colors, used in log files
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Api => "API".to_string(),
            LogTag::Resolver => "RESOLVER".to_string(),
            LogTag::Enrichment => "ENRICH".to_string(),
            LogTag::Watchlist => "WATCHLIST".to_string(),
            LogTag::Monitor => "MONITOR".to_string(),
            LogTag::Config => "CONFIG".to_string(),
        }
    }

    /// All tags that accept a `--debug-<key>` flag
    pub fn all_debug_keys() -> &'static [&'static str] {
        &[
            "system",
            "api",
            "resolver",
            "enrichment",
            "watchlist",
            "monitor",
            "config",
        ]
    }
}
