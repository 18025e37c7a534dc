/// Jupiter price API client
///
/// API Documentation: https://station.jup.ag/docs/apis/price-api
///
/// Endpoints implemented:
/// 1. /price?ids={address} - USD price for a Solana mint
pub mod types;

pub use self::types::{JupiterPriceEntry, JupiterPriceResponse};

use crate::apis::client::HttpClient;
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use crate::tokens::resolver::ProviderClient;
use crate::tokens::types::{ProviderId, ProviderResult, RawPayload};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://price.jup.ag/v4";

pub struct JupiterClient {
    http_client: HttpClient,
    base_url: String,
}

impl JupiterClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let http_client = HttpClient::new("JUPITER", timeout)
            .map_err(|e| ProviderError::from_http(ProviderId::Jupiter, e, timeout))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the price entry for a single mint
    pub async fn fetch_price(&self, address: &str) -> Result<JupiterPriceResponse, ProviderError> {
        let url = format!("{}/price", self.base_url);

        logger::debug(
            LogTag::Api,
            &format!("[JUPITER] Fetching price: token={}", address),
        );

        self.http_client
            .get_json(&url, &[("ids", address)])
            .await
            .map_err(|e| ProviderError::from_http(ProviderId::Jupiter, e, self.http_client.timeout()))
    }
}

#[async_trait]
impl ProviderClient for JupiterClient {
    fn id(&self) -> ProviderId {
        ProviderId::Jupiter
    }

    async fn fetch(&self, address: &str) -> ProviderResult {
        self.fetch_price(address).await.map(RawPayload::Jupiter)
    }
}
