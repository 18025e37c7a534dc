use crate::config_struct;

// ============================================================================
// PROVIDERS
// ============================================================================

config_struct! {
    /// Upstream market-data providers, queried in fixed priority order
    pub struct ProvidersConfig {
        dexscreener_enabled: bool = true,
        jupiter_enabled: bool = true,
        pumpfun_enabled: bool = true,
        /// Per-request timeout for every provider call (seconds)
        timeout_secs: u64 = 10,
        dexscreener_base_url: String = "https://api.dexscreener.com".to_string(),
        jupiter_base_url: String = "https://price.jup.ag/v4".to_string(),
        pumpfun_base_url: String = "https://frontend-api.pump.fun".to_string(),
    }
}

// ============================================================================
// ENRICHMENT
// ============================================================================

config_struct! {
    /// Best-effort holder count lookup against Solana RPC
    pub struct EnrichmentConfig {
        holder_count_enabled: bool = true,
        rpc_url: String = "https://api.mainnet-beta.solana.com".to_string(),
    }
}

// ============================================================================
// MONITOR
// ============================================================================

config_struct! {
    /// Watch mode refresh loop
    pub struct MonitorConfig {
        refresh_interval_secs: u64 = 30,
    }
}

// ============================================================================
// WATCHLIST
// ============================================================================

config_struct! {
    pub struct WatchlistConfig {
        /// Empty means ~/.terkode-watchlist.json
        path: String = String::new(),
    }
}

// ============================================================================
// LOGGING
// ============================================================================

config_struct! {
    pub struct LoggingConfig {
        /// Mirror log lines into <data dir>/logs
        file_logging: bool = true,
    }
}

config_struct! {
    /// Root configuration loaded from config.toml
    pub struct Config {
        providers: ProvidersConfig = ProvidersConfig::default(),
        enrichment: EnrichmentConfig = EnrichmentConfig::default(),
        monitor: MonitorConfig = MonitorConfig::default(),
        watchlist: WatchlistConfig = WatchlistConfig::default(),
        logging: LoggingConfig = LoggingConfig::default(),
    }
}
