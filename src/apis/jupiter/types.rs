/// Jupiter price API response types
use crate::apis::de::lenient_f64;
use serde::Deserialize;
use std::collections::HashMap;

/// Response of `/price?ids={address}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JupiterPriceResponse {
    /// Price entries keyed by the requested mint
    pub data: Option<HashMap<String, JupiterPriceEntry>>,
    #[serde(deserialize_with = "lenient_f64")]
    pub time_taken: Option<f64>,
}

impl JupiterPriceResponse {
    pub fn entry(&self, address: &str) -> Option<&JupiterPriceEntry> {
        self.data.as_ref().and_then(|data| data.get(address))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JupiterPriceEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub mint_symbol: Option<String>,
    pub vs_token: Option<String>,
    pub vs_token_symbol: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
}
