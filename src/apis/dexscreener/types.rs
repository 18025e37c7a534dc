/// DexScreener response types
///
/// Every field is optional: DexScreener omits keys freely and returns
/// `"pairs": null` for unknown tokens.
use crate::apis::de::lenient_f64;
use serde::Deserialize;

/// Response of `/latest/dex/tokens/{address}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DexTokensResponse {
    pub schema_version: Option<String>,
    pub pairs: Option<Vec<DexPair>>,
}

impl DexTokensResponse {
    /// First listed pair, which DexScreener orders by relevance
    pub fn primary_pair(&self) -> Option<&DexPair> {
        self.pairs.as_ref().and_then(|pairs| pairs.first())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DexPair {
    pub chain_id: Option<String>,
    pub dex_id: Option<String>,
    pub url: Option<String>,
    pub pair_address: Option<String>,
    pub base_token: Option<DexToken>,
    pub quote_token: Option<DexToken>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price_usd: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub fdv: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
    pub volume: Option<DexVolume>,
    pub info: Option<DexPairInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DexToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DexVolume {
    #[serde(deserialize_with = "lenient_f64")]
    pub m5: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub h1: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub h6: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DexPairInfo {
    pub image_url: Option<String>,
    pub websites: Option<Vec<DexWebsite>>,
    pub socials: Option<Vec<DexSocial>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DexWebsite {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DexSocial {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}

/// Entry of `/token-boosts/top/v1`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenBoost {
    pub url: Option<String>,
    pub chain_id: Option<String>,
    pub token_address: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_amount: Option<f64>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_pairs_deserialize() {
        let response: DexTokensResponse =
            serde_json::from_value(json!({"schemaVersion": "1.0.0", "pairs": null})).unwrap();
        assert!(response.pairs.is_none());
        assert!(response.primary_pair().is_none());
    }

    #[test]
    fn test_pair_fields_deserialize() {
        let response: DexTokensResponse = serde_json::from_value(json!({
            "pairs": [{
                "chainId": "solana",
                "baseToken": {"address": "MintA", "name": "Alpha", "symbol": "ALP"},
                "priceUsd": "0.0123",
                "fdv": 1200000,
                "volume": {"h24": 5400.5},
                "info": {"socials": [{"type": "twitter", "url": "https://x.com/alpha"}]}
            }]
        }))
        .unwrap();

        let pair = response.primary_pair().unwrap();
        assert_eq!(pair.price_usd, Some(0.0123));
        assert_eq!(pair.fdv, Some(1_200_000.0));
        assert_eq!(pair.volume.as_ref().unwrap().h24, Some(5400.5));
        let info = pair.info.as_ref().unwrap();
        assert_eq!(info.socials.as_ref().unwrap()[0].kind.as_deref(), Some("twitter"));
        assert!(info.websites.is_none());
    }
}
