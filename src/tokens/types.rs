/// Core types for token resolution
use serde::{Deserialize, Serialize};

use crate::apis::dexscreener::DexTokensResponse;
use crate::apis::jupiter::JupiterPriceResponse;
use crate::apis::pumpfun::PumpCoin;
use crate::errors::ProviderError;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_SYMBOL: &str = "N/A";

/// Upstream data source identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    DexScreener,
    Jupiter,
    PumpFun,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::DexScreener => "DexScreener",
            ProviderId::Jupiter => "Jupiter",
            ProviderId::PumpFun => "pump.fun",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TOKEN RECORD - canonical, fully defaulted
// ============================================================================

/// Canonical token market data
///
/// Produced only by the normalizer, so every field always holds a defined
/// value: numerics are finite and non-negative, name/symbol fall back to
/// "Unknown"/"N/A", and links are `None` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub price_usd: f64,
    pub market_cap_usd: f64,
    pub volume_24h_usd: f64,
    pub holder_count: u64,
    pub description: String,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    /// Provider whose payload produced this record
    pub source: ProviderId,
}

impl TokenRecord {
    /// Same record with the holder count replaced by an enrichment result
    pub fn with_holder_count(self, holder_count: u64) -> Self {
        Self {
            holder_count,
            ..self
        }
    }
}

// ============================================================================
// RAW PAYLOADS
// ============================================================================

/// Source-specific payload returned by a provider client
///
/// One variant per provider, so normalization can only ever apply the mapping
/// of the provider that produced the payload.
#[derive(Debug, Clone)]
pub enum RawPayload {
    DexScreener(DexTokensResponse),
    Jupiter(JupiterPriceResponse),
    PumpFun(PumpCoin),
}

impl RawPayload {
    pub fn provider(&self) -> ProviderId {
        match self {
            RawPayload::DexScreener(_) => ProviderId::DexScreener,
            RawPayload::Jupiter(_) => ProviderId::Jupiter,
            RawPayload::PumpFun(_) => ProviderId::PumpFun,
        }
    }

    /// Whether the payload carries the minimum identifying data for `address`
    ///
    /// A successful HTTP answer with an empty dataset is not usable and must
    /// make the resolver fall through to the next provider.
    pub fn is_usable(&self, address: &str) -> bool {
        match self {
            RawPayload::DexScreener(response) => response.primary_pair().is_some(),
            RawPayload::Jupiter(response) => response.entry(address).is_some(),
            RawPayload::PumpFun(coin) => {
                has_text(&coin.mint) || has_text(&coin.address) || has_text(&coin.name)
            }
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |s| !s.trim().is_empty())
}

/// Outcome of a single provider call; consumed immediately, never stored
pub type ProviderResult = Result<RawPayload, ProviderError>;
