/// Minimal Solana JSON-RPC client
///
/// Only the `getProgramAccounts` call used for holder counting is implemented.
use crate::apis::client::HttpClient;
use crate::errors::EnrichmentError;
use crate::logger::{self, LogTag};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// SPL Token program (legacy token accounts)
pub const SPL_TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Size in bytes of an SPL token account
pub const TOKEN_ACCOUNT_SIZE: u64 = 165;

/// Filter type for getProgramAccounts
#[derive(Debug, Clone)]
pub enum RpcFilterType {
    DataSize(u64),
    /// Offset and base58 encoded bytes
    Memcmp { offset: usize, bytes: String },
}

impl RpcFilterType {
    fn to_json(&self) -> Value {
        match self {
            RpcFilterType::DataSize(size) => json!({ "dataSize": size }),
            RpcFilterType::Memcmp { offset, bytes } => json!({
                "memcmp": {
                    "offset": offset,
                    "bytes": bytes
                }
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

pub struct SolanaRpcClient {
    http_client: HttpClient,
    url: String,
}

impl SolanaRpcClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, EnrichmentError> {
        let http_client = HttpClient::new("SOLANA_RPC", timeout)
            .map_err(|e| EnrichmentError::from_http(e, timeout))?;

        Ok(Self {
            http_client,
            url: url.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.http_client.timeout()
    }

    async fn execute_raw(&self, method: &str, params: Value) -> Result<Value, EnrichmentError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response: RpcResponse = self
            .http_client
            .post_json(&self.url, &request)
            .await
            .map_err(|e| EnrichmentError::from_http(e, self.timeout()))?;

        if let Some(error) = response.error {
            return Err(EnrichmentError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        response
            .result
            .ok_or_else(|| EnrichmentError::InvalidResponse(format!("{} returned no result", method)))
    }

    /// Fetch all accounts owned by `program_id`, jsonParsed, matching `filters`
    pub async fn get_program_accounts(
        &self,
        program_id: &str,
        filters: &[RpcFilterType],
    ) -> Result<Vec<Value>, EnrichmentError> {
        let filters_json: Vec<Value> = filters.iter().map(RpcFilterType::to_json).collect();
        let params = json!([
            program_id,
            {
                "encoding": "jsonParsed",
                "filters": filters_json
            }
        ]);

        logger::debug(
            LogTag::Enrichment,
            &format!("[SOLANA_RPC] getProgramAccounts program={} filters={}", program_id, filters.len()),
        );

        let result = self.execute_raw("getProgramAccounts", params).await?;

        match result {
            Value::Array(accounts) => Ok(accounts),
            _ => Err(EnrichmentError::InvalidResponse(
                "expected array of accounts".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_serialize_like_rpc_expects() {
        let size = RpcFilterType::DataSize(TOKEN_ACCOUNT_SIZE).to_json();
        assert_eq!(size, json!({"dataSize": 165}));

        let memcmp = RpcFilterType::Memcmp {
            offset: 0,
            bytes: "Mint".to_string(),
        }
        .to_json();
        assert_eq!(memcmp, json!({"memcmp": {"offset": 0, "bytes": "Mint"}}));
    }

    #[test]
    fn test_error_object_parses() {
        let response: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32010, "message": "excluded from account secondary indexes"}
        }))
        .unwrap();

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32010);
    }
}
