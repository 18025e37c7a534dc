/// Token resolution pipeline
///
/// `types` holds the canonical record and raw payloads, `normalize` maps
/// payloads to records, `resolver` runs the provider fallback chain and
/// `holders`/`trending` build on top of it.
pub mod holders;
pub mod normalize;
pub mod resolver;
pub mod trending;
pub mod types;

pub use holders::SolanaHolderCounter;
pub use resolver::{resolve_all, HolderCountSource, ProviderClient, Resolve, Resolver};
pub use trending::{fetch_trending, TrendingSource, DEFAULT_TRENDING_LIMIT};
pub use types::{ProviderId, ProviderResult, RawPayload, TokenRecord};

use crate::apis::{DexScreenerClient, JupiterClient, PumpFunClient};
use crate::config::Config;
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use std::sync::Arc;

/// Build the resolver from configuration
///
/// Providers are added in fixed priority order (DexScreener, Jupiter, pump.fun);
/// disabled providers are left out of the chain entirely.
pub fn build_resolver(config: &Config) -> Result<Resolver, ProviderError> {
    let timeout = config.provider_timeout();
    let providers_config = &config.providers;
    let mut providers: Vec<Arc<dyn ProviderClient>> = Vec::new();

    if providers_config.dexscreener_enabled {
        providers.push(Arc::new(DexScreenerClient::new(
            &providers_config.dexscreener_base_url,
            timeout,
            true,
        )?));
    }
    if providers_config.jupiter_enabled {
        providers.push(Arc::new(JupiterClient::new(
            &providers_config.jupiter_base_url,
            timeout,
        )?));
    }
    if providers_config.pumpfun_enabled {
        providers.push(Arc::new(PumpFunClient::new(
            &providers_config.pumpfun_base_url,
            timeout,
        )?));
    }

    let mut resolver = Resolver::new(providers, timeout);

    if config.enrichment.holder_count_enabled {
        match SolanaHolderCounter::new(&config.enrichment.rpc_url, timeout) {
            Ok(counter) => resolver = resolver.with_enrichment(Arc::new(counter)),
            Err(e) => logger::warning(
                LogTag::Enrichment,
                &format!("Holder counting disabled: {}", e),
            ),
        }
    }

    logger::debug(
        LogTag::Resolver,
        &format!("Provider chain: {:?}", resolver.provider_ids()),
    );

    Ok(resolver)
}

/// Trending source backed by DexScreener boosts
pub fn build_trending_source(config: &Config) -> Result<DexScreenerClient, ProviderError> {
    DexScreenerClient::new(
        &config.providers.dexscreener_base_url,
        config.provider_timeout(),
        config.providers.dexscreener_enabled,
    )
}
