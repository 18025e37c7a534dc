/// pump.fun frontend API client
///
/// Endpoints implemented:
/// 1. /coins/{address} - Launch-platform coin details
pub mod types;

pub use self::types::PumpCoin;

use crate::apis::client::HttpClient;
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use crate::tokens::resolver::ProviderClient;
use crate::tokens::types::{ProviderId, ProviderResult, RawPayload};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://frontend-api.pump.fun";

pub struct PumpFunClient {
    http_client: HttpClient,
    base_url: String,
}

impl PumpFunClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let http_client = HttpClient::new("PUMPFUN", timeout)
            .map_err(|e| ProviderError::from_http(ProviderId::PumpFun, e, timeout))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_coin(&self, address: &str) -> Result<PumpCoin, ProviderError> {
        let url = format!("{}/coins/{}", self.base_url, address);

        logger::debug(
            LogTag::Api,
            &format!("[PUMPFUN] Fetching coin: token={}", address),
        );

        self.http_client
            .get_json(&url, &[])
            .await
            .map_err(|e| ProviderError::from_http(ProviderId::PumpFun, e, self.http_client.timeout()))
    }
}

#[async_trait]
impl ProviderClient for PumpFunClient {
    fn id(&self) -> ProviderId {
        ProviderId::PumpFun
    }

    async fn fetch(&self, address: &str) -> ProviderResult {
        self.fetch_coin(address).await.map(RawPayload::PumpFun)
    }
}
