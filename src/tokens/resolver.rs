/// Multi-provider token resolution
///
/// Providers are tried strictly in order. The first payload that passes the
/// usability check is normalized and returned; later providers are never
/// queried. Holder-count enrichment runs afterwards and can only ever add data.
use crate::errors::{EnrichmentError, ProviderError, ResolveError};
use crate::logger::{self, LogTag};
use crate::tokens::normalize::normalize;
use crate::tokens::types::{ProviderId, ProviderResult, RawPayload, TokenRecord};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// One upstream token data source
#[async_trait]
pub trait ProviderClient: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Issue a single request for `address`
    async fn fetch(&self, address: &str) -> ProviderResult;
}

/// Best-effort holder counting for a mint
#[async_trait]
pub trait HolderCountSource: Send + Sync {
    async fn holder_count(&self, address: &str) -> Result<u64, EnrichmentError>;
}

/// Anything that turns an address into a TokenRecord
///
/// Implemented by `Resolver`; the refresh loop and the trending/watchlist
/// flows depend on this instead of the concrete type.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, address: &str) -> Result<TokenRecord, ResolveError>;
}

pub struct Resolver {
    providers: Vec<Arc<dyn ProviderClient>>,
    enrichment: Option<Arc<dyn HolderCountSource>>,
    timeout: Duration,
}

impl Resolver {
    /// `providers` must already be in priority order
    pub fn new(providers: Vec<Arc<dyn ProviderClient>>, timeout: Duration) -> Self {
        Self {
            providers,
            enrichment: None,
            timeout,
        }
    }

    pub fn with_enrichment(mut self, source: Arc<dyn HolderCountSource>) -> Self {
        self.enrichment = Some(source);
        self
    }

    pub fn provider_ids(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Resolve a token, falling back through every configured provider
    pub async fn resolve(&self, address: &str) -> Result<TokenRecord, ResolveError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ResolveError::InvalidAddress);
        }

        let (payload, provider) = match self.first_usable(address).await {
            Some(found) => found,
            None => {
                logger::info(
                    LogTag::Resolver,
                    &format!("All {} providers failed for {}", self.providers.len(), address),
                );
                return Err(ResolveError::NotFound {
                    address: address.to_string(),
                });
            }
        };

        let record = normalize(&payload, address);
        logger::debug(
            LogTag::Resolver,
            &format!("Resolved {} ({}) via {}", record.symbol, address, provider),
        );

        if record.holder_count > 0 {
            return Ok(record);
        }

        let holders = self.enrich(address).await;
        Ok(record.with_holder_count(holders))
    }

    /// Fallback combinator: first provider whose payload is usable
    async fn first_usable(&self, address: &str) -> Option<(RawPayload, ProviderId)> {
        for provider in &self.providers {
            let id = provider.id();
            match self.fetch_bounded(provider.as_ref(), address).await {
                Ok(payload) if payload.is_usable(address) => return Some((payload, id)),
                Ok(_) => {
                    let err = ProviderError::NoUsableData { provider: id };
                    logger::debug(LogTag::Resolver, &format!("{} - trying next provider", err));
                }
                Err(err) => {
                    logger::debug(LogTag::Resolver, &format!("{} - trying next provider", err));
                }
            }
        }
        None
    }

    async fn fetch_bounded(&self, provider: &dyn ProviderClient, address: &str) -> ProviderResult {
        match tokio::time::timeout(self.timeout, provider.fetch(address)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                provider: provider.id(),
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    /// Holder count or 0; never fails
    async fn enrich(&self, address: &str) -> u64 {
        let source = match &self.enrichment {
            Some(source) => source,
            None => return 0,
        };

        let result = match tokio::time::timeout(self.timeout, source.holder_count(address)).await {
            Ok(result) => result,
            Err(_) => Err(EnrichmentError::Timeout(self.timeout.as_secs())),
        };

        match result {
            Ok(count) => count,
            Err(e) => {
                logger::debug(
                    LogTag::Enrichment,
                    &format!("Holder count unavailable for {}: {}", address, e),
                );
                0
            }
        }
    }
}

#[async_trait]
impl Resolve for Resolver {
    async fn resolve(&self, address: &str) -> Result<TokenRecord, ResolveError> {
        Resolver::resolve(self, address).await
    }
}

/// Resolve each address in order, keeping per-address outcomes
pub async fn resolve_all<R>(
    resolver: &R,
    addresses: &[String],
) -> Vec<(String, Result<TokenRecord, ResolveError>)>
where
    R: Resolve + ?Sized,
{
    let mut results = Vec::with_capacity(addresses.len());
    for address in addresses {
        let outcome = resolver.resolve(address).await;
        results.push((address.clone(), outcome));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::dexscreener::DexTokensResponse;
    use crate::apis::jupiter::JupiterPriceResponse;
    use crate::apis::pumpfun::PumpCoin;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

    enum Behavior {
        Fail,
        Hang,
        Payload(RawPayload),
    }

    struct FakeProvider {
        id: ProviderId,
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(id: ProviderId, behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                id,
                behavior,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProviderClient for FakeProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn fetch(&self, _address: &str) -> ProviderResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                Behavior::Fail => Err(ProviderError::Request {
                    provider: self.id,
                    message: "connection refused".to_string(),
                }),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(ProviderError::NoUsableData { provider: self.id })
                }
                Behavior::Payload(payload) => Ok(payload.clone()),
            }
        }
    }

    struct FakeHolders {
        result: Option<u64>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HolderCountSource for FakeHolders {
        async fn holder_count(&self, _address: &str) -> Result<u64, EnrichmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .ok_or_else(|| EnrichmentError::Request("rpc down".to_string()))
        }
    }

    fn dex_payload(value: serde_json::Value) -> RawPayload {
        let response: DexTokensResponse = serde_json::from_value(value).unwrap();
        RawPayload::DexScreener(response)
    }

    fn jupiter_payload() -> RawPayload {
        let response: JupiterPriceResponse = serde_json::from_value(json!({
            "data": {MINT: {"id": MINT, "mintSymbol": "BONK", "price": 0.00002}}
        }))
        .unwrap();
        RawPayload::Jupiter(response)
    }

    fn pump_payload() -> RawPayload {
        let coin: PumpCoin =
            serde_json::from_value(json!({"mint": MINT, "name": "Bonk", "holder_count": 7})).unwrap();
        RawPayload::PumpFun(coin)
    }

    fn as_dyn(providers: &[&Arc<FakeProvider>]) -> Vec<Arc<dyn ProviderClient>> {
        providers
            .iter()
            .map(|p| Arc::clone(*p) as Arc<dyn ProviderClient>)
            .collect()
    }

    #[tokio::test]
    async fn test_falls_back_to_second_provider() {
        let dex = FakeProvider::new(ProviderId::DexScreener, Behavior::Fail);
        let jup = FakeProvider::new(ProviderId::Jupiter, Behavior::Payload(jupiter_payload()));
        let pump = FakeProvider::new(ProviderId::PumpFun, Behavior::Payload(pump_payload()));

        let resolver = Resolver::new(as_dyn(&[&dex, &jup, &pump]), DEFAULT_PROVIDER_TIMEOUT);
        let record = resolver.resolve(MINT).await.unwrap();

        assert_eq!(record, normalize(&jupiter_payload(), MINT));
        assert_eq!(record.source, ProviderId::Jupiter);
        assert_eq!(dex.calls(), 1);
        assert_eq!(jup.calls(), 1);
        assert_eq!(pump.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_providers_failing_is_not_found() {
        let dex = FakeProvider::new(ProviderId::DexScreener, Behavior::Fail);
        let jup = FakeProvider::new(ProviderId::Jupiter, Behavior::Fail);
        let pump = FakeProvider::new(ProviderId::PumpFun, Behavior::Fail);

        let resolver = Resolver::new(as_dyn(&[&dex, &jup, &pump]), DEFAULT_PROVIDER_TIMEOUT);
        let err = resolver.resolve(MINT).await.unwrap_err();

        assert_eq!(
            err,
            ResolveError::NotFound {
                address: MINT.to_string()
            }
        );
        assert_eq!(pump.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_pairs_fall_through() {
        let dex = FakeProvider::new(
            ProviderId::DexScreener,
            Behavior::Payload(dex_payload(json!({"priceUsd": 0, "pairs": []}))),
        );
        let pump = FakeProvider::new(ProviderId::PumpFun, Behavior::Payload(pump_payload()));

        let resolver = Resolver::new(as_dyn(&[&dex, &pump]), DEFAULT_PROVIDER_TIMEOUT);
        let record = resolver.resolve(MINT).await.unwrap();

        assert_eq!(record.source, ProviderId::PumpFun);
        assert_eq!(record.holder_count, 7);
    }

    #[tokio::test]
    async fn test_blank_address_skips_providers() {
        let dex = FakeProvider::new(ProviderId::DexScreener, Behavior::Fail);
        let resolver = Resolver::new(as_dyn(&[&dex]), DEFAULT_PROVIDER_TIMEOUT);

        assert_eq!(resolver.resolve("   ").await.unwrap_err(), ResolveError::InvalidAddress);
        assert_eq!(dex.calls(), 0);
    }

    #[tokio::test]
    async fn test_enrichment_failure_keeps_zero_holders() {
        let jup = FakeProvider::new(ProviderId::Jupiter, Behavior::Payload(jupiter_payload()));
        let holders = Arc::new(FakeHolders {
            result: None,
            calls: AtomicUsize::new(0),
        });

        let resolver = Resolver::new(as_dyn(&[&jup]), DEFAULT_PROVIDER_TIMEOUT)
            .with_enrichment(holders.clone());
        let record = resolver.resolve(MINT).await.unwrap();

        assert_eq!(record.holder_count, 0);
        assert_eq!(holders.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_enrichment_fills_missing_holder_count() {
        let jup = FakeProvider::new(ProviderId::Jupiter, Behavior::Payload(jupiter_payload()));
        let holders = Arc::new(FakeHolders {
            result: Some(1234),
            calls: AtomicUsize::new(0),
        });

        let resolver =
            Resolver::new(as_dyn(&[&jup]), DEFAULT_PROVIDER_TIMEOUT).with_enrichment(holders);
        assert_eq!(resolver.resolve(MINT).await.unwrap().holder_count, 1234);
    }

    #[tokio::test]
    async fn test_enrichment_skipped_when_provider_reports_holders() {
        let pump = FakeProvider::new(ProviderId::PumpFun, Behavior::Payload(pump_payload()));
        let holders = Arc::new(FakeHolders {
            result: Some(1234),
            calls: AtomicUsize::new(0),
        });

        let resolver = Resolver::new(as_dyn(&[&pump]), DEFAULT_PROVIDER_TIMEOUT)
            .with_enrichment(holders.clone());
        assert_eq!(resolver.resolve(MINT).await.unwrap().holder_count, 7);
        assert_eq!(holders.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_provider_times_out_and_falls_back() {
        let dex = FakeProvider::new(ProviderId::DexScreener, Behavior::Hang);
        let jup = FakeProvider::new(ProviderId::Jupiter, Behavior::Payload(jupiter_payload()));

        let resolver = Resolver::new(as_dyn(&[&dex, &jup]), Duration::from_secs(10));
        let record = resolver.resolve(MINT).await.unwrap();

        assert_eq!(record.source, ProviderId::Jupiter);
    }

    #[tokio::test]
    async fn test_resolve_all_keeps_order_and_failures() {
        let jup = FakeProvider::new(ProviderId::Jupiter, Behavior::Payload(jupiter_payload()));
        let resolver = Resolver::new(as_dyn(&[&jup]), DEFAULT_PROVIDER_TIMEOUT);

        let addresses = vec![MINT.to_string(), "UnknownMint".to_string()];
        let results = resolve_all(&resolver, &addresses).await;

        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_ok());
        assert!(matches!(results[1].1, Err(ResolveError::NotFound { .. })));
    }
}
