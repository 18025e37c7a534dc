/// Provider payload → TokenRecord mapping
///
/// Every function here is pure and total: missing, empty, negative, or
/// non-finite inputs collapse to the record defaults.
use crate::apis::dexscreener::{DexPair, DexTokensResponse};
use crate::apis::jupiter::JupiterPriceResponse;
use crate::apis::pumpfun::PumpCoin;
use crate::tokens::types::{ProviderId, RawPayload, TokenRecord, UNKNOWN_NAME, UNKNOWN_SYMBOL};

pub const DEXSCREENER_DESCRIPTION: &str = "Data from DexScreener";
pub const JUPITER_DESCRIPTION: &str = "Data from Jupiter API (Solana mainnet)";
pub const NO_DESCRIPTION: &str = "No description available";

/// Normalize a payload for `requested_address`; the variant picks the mapping
pub fn normalize(payload: &RawPayload, requested_address: &str) -> TokenRecord {
    match payload {
        RawPayload::DexScreener(response) => normalize_dexscreener(response, requested_address),
        RawPayload::Jupiter(response) => normalize_jupiter(response, requested_address),
        RawPayload::PumpFun(coin) => normalize_pumpfun(coin, requested_address),
    }
}

pub fn normalize_dexscreener(response: &DexTokensResponse, requested_address: &str) -> TokenRecord {
    let pair = response.primary_pair();
    let base = pair.and_then(|p| p.base_token.as_ref());

    let market_cap = pair
        .and_then(|p| p.fdv.filter(|v| *v > 0.0).or(p.market_cap))
        .unwrap_or(0.0);

    TokenRecord {
        name: text_or(base.and_then(|b| b.name.as_deref()), UNKNOWN_NAME),
        symbol: text_or(base.and_then(|b| b.symbol.as_deref()), UNKNOWN_SYMBOL),
        address: text_or(base.and_then(|b| b.address.as_deref()), requested_address),
        price_usd: non_negative(pair.and_then(|p| p.price_usd)),
        market_cap_usd: non_negative(Some(market_cap)),
        volume_24h_usd: non_negative(pair.and_then(|p| p.volume.as_ref()).and_then(|v| v.h24)),
        holder_count: 0,
        description: DEXSCREENER_DESCRIPTION.to_string(),
        website: pair.and_then(first_website),
        twitter: pair.and_then(|p| social(p, "twitter")),
        telegram: pair.and_then(|p| social(p, "telegram")),
        source: ProviderId::DexScreener,
    }
}

fn first_website(pair: &DexPair) -> Option<String> {
    pair.info
        .as_ref()?
        .websites
        .as_ref()?
        .iter()
        .find_map(|w| non_empty(w.url.as_deref()))
}

fn social(pair: &DexPair, kind: &str) -> Option<String> {
    pair.info
        .as_ref()?
        .socials
        .as_ref()?
        .iter()
        .filter(|s| s.kind.as_deref().map_or(false, |k| k.eq_ignore_ascii_case(kind)))
        .find_map(|s| non_empty(s.url.as_deref()))
}

pub fn normalize_jupiter(response: &JupiterPriceResponse, requested_address: &str) -> TokenRecord {
    let entry = response.entry(requested_address);

    let symbol = entry.and_then(|e| {
        non_empty(e.symbol.as_deref()).or_else(|| non_empty(e.mint_symbol.as_deref()))
    });

    TokenRecord {
        name: text_or(entry.and_then(|e| e.name.as_deref()), UNKNOWN_NAME),
        symbol: symbol.unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
        address: text_or(Some(requested_address), ""),
        price_usd: non_negative(entry.and_then(|e| e.price)),
        market_cap_usd: non_negative(entry.and_then(|e| e.market_cap)),
        volume_24h_usd: 0.0,
        holder_count: 0,
        description: JUPITER_DESCRIPTION.to_string(),
        website: None,
        twitter: None,
        telegram: None,
        source: ProviderId::Jupiter,
    }
}

pub fn normalize_pumpfun(coin: &PumpCoin, requested_address: &str) -> TokenRecord {
    let market_cap = non_negative(coin.usd_market_cap);
    let supply = non_negative(coin.total_supply);
    let price = if market_cap > 0.0 && supply > 0.0 {
        non_negative(Some(market_cap / supply))
    } else {
        0.0
    };

    let address = non_empty(coin.mint.as_deref())
        .or_else(|| non_empty(coin.address.as_deref()))
        .unwrap_or_else(|| requested_address.to_string());

    TokenRecord {
        name: text_or(coin.name.as_deref(), UNKNOWN_NAME),
        symbol: text_or(coin.symbol.as_deref(), UNKNOWN_SYMBOL),
        address,
        price_usd: price,
        market_cap_usd: market_cap,
        volume_24h_usd: non_negative(coin.volume_24h),
        holder_count: coin.holder_count.unwrap_or(0),
        description: text_or(coin.description.as_deref(), NO_DESCRIPTION),
        website: non_empty(coin.website.as_deref()),
        twitter: non_empty(coin.twitter.as_deref()),
        telegram: non_empty(coin.telegram.as_deref()),
        source: ProviderId::PumpFun,
    }
}

/// Clamp to a finite, non-negative number; absent → 0
pub fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Trimmed string, or `None` when empty
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn text_or(value: Option<&str>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}
