/// DexScreener API client
///
/// API Documentation: https://docs.dexscreener.com/api/reference
///
/// Endpoints implemented:
/// 1. /latest/dex/tokens/{tokenAddress} - PRIMARY: all pairs for a token
/// 2. /token-boosts/top/v1 - Top boosted tokens (trending view)
pub mod types;

pub use self::types::{
    DexPair, DexPairInfo, DexSocial, DexToken, DexTokensResponse, DexVolume, DexWebsite,
    TokenBoost,
};

use crate::apis::client::HttpClient;
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use crate::tokens::resolver::ProviderClient;
use crate::tokens::trending::TrendingSource;
use crate::tokens::types::{ProviderId, ProviderResult, RawPayload};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com";

/// Chain filter for trending lookups
const SOLANA_CHAIN_ID: &str = "solana";

pub struct DexScreenerClient {
    http_client: HttpClient,
    base_url: String,
    enabled: bool,
}

impl DexScreenerClient {
    pub fn new(base_url: &str, timeout: Duration, enabled: bool) -> Result<Self, ProviderError> {
        let http_client = HttpClient::new("DEXSCREENER", timeout)
            .map_err(|e| ProviderError::from_http(ProviderId::DexScreener, e, timeout))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            enabled,
        })
    }

    fn ensure_enabled(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::Disabled {
                provider: ProviderId::DexScreener,
            })
        }
    }

    fn map_err(&self, err: crate::apis::client::HttpError) -> ProviderError {
        ProviderError::from_http(ProviderId::DexScreener, err, self.http_client.timeout())
    }

    /// Fetch all trading pairs for a token address
    /// Uses /latest/dex/tokens/{tokenAddress}
    pub async fn fetch_token_pairs(&self, address: &str) -> Result<DexTokensResponse, ProviderError> {
        self.ensure_enabled()?;

        let url = format!("{}/latest/dex/tokens/{}", self.base_url, address);

        logger::debug(
            LogTag::Api,
            &format!("[DEXSCREENER] Fetching token pairs: token={}", address),
        );

        self.http_client
            .get_json(&url, &[])
            .await
            .map_err(|e| self.map_err(e))
    }

    /// Get top boosted tokens (most promoted)
    /// Uses /token-boosts/top/v1
    pub async fn get_top_boosted_tokens(&self) -> Result<Vec<TokenBoost>, ProviderError> {
        self.ensure_enabled()?;

        let url = format!("{}/token-boosts/top/v1", self.base_url);

        logger::debug(LogTag::Api, "[DEXSCREENER] Fetching top boosted tokens");

        self.http_client
            .get_json(&url, &[])
            .await
            .map_err(|e| self.map_err(e))
    }
}

#[async_trait]
impl ProviderClient for DexScreenerClient {
    fn id(&self) -> ProviderId {
        ProviderId::DexScreener
    }

    async fn fetch(&self, address: &str) -> ProviderResult {
        self.fetch_token_pairs(address)
            .await
            .map(RawPayload::DexScreener)
    }
}

#[async_trait]
impl TrendingSource for DexScreenerClient {
    async fn trending_addresses(&self) -> Result<Vec<String>, ProviderError> {
        let boosts = self.get_top_boosted_tokens().await?;
        Ok(boosts
            .into_iter()
            .filter(|b| b.chain_id.as_deref() == Some(SOLANA_CHAIN_ID))
            .filter_map(|b| b.token_address)
            .collect())
    }
}
