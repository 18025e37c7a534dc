/// pump.fun coin response types
use crate::apis::de::{lenient_f64, lenient_u64};
use serde::Deserialize;

/// Response of `/coins/{address}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PumpCoin {
    pub mint: Option<String>,
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub usd_market_cap: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_supply: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub volume_24h: Option<f64>,
    #[serde(deserialize_with = "lenient_u64")]
    pub holder_count: Option<u64>,
}
