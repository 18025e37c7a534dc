/// Token holder counting
///
/// Counts SPL token accounts for a mint that hold a non-zero balance, using
/// `getProgramAccounts` with a size filter and a mint memcmp at offset 0.
use crate::apis::solana_rpc::{
    RpcFilterType, SolanaRpcClient, SPL_TOKEN_PROGRAM_ID, TOKEN_ACCOUNT_SIZE,
};
use crate::errors::EnrichmentError;
use crate::logger::{self, LogTag};
use crate::tokens::resolver::HolderCountSource;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Mint pubkey sits at the start of the token account layout
const MINT_OFFSET: usize = 0;

pub struct SolanaHolderCounter {
    rpc: SolanaRpcClient,
}

impl SolanaHolderCounter {
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self, EnrichmentError> {
        Ok(Self {
            rpc: SolanaRpcClient::new(rpc_url, timeout)?,
        })
    }
}

#[async_trait]
impl HolderCountSource for SolanaHolderCounter {
    async fn holder_count(&self, address: &str) -> Result<u64, EnrichmentError> {
        let filters = [
            RpcFilterType::DataSize(TOKEN_ACCOUNT_SIZE),
            RpcFilterType::Memcmp {
                offset: MINT_OFFSET,
                bytes: address.to_string(),
            },
        ];

        let accounts = self
            .rpc
            .get_program_accounts(SPL_TOKEN_PROGRAM_ID, &filters)
            .await?;
        let holders = count_active_holders(&accounts);

        logger::debug(
            LogTag::Enrichment,
            &format!(
                "Holder count for {}: {} active of {} accounts",
                address,
                holders,
                accounts.len()
            ),
        );

        Ok(holders)
    }
}

/// Number of jsonParsed token accounts with `uiAmount > 0`
pub fn count_active_holders(accounts: &[Value]) -> u64 {
    accounts
        .iter()
        .filter(|account| ui_amount(account).map_or(false, |amount| amount > 0.0))
        .count() as u64
}

fn ui_amount(account: &Value) -> Option<f64> {
    account
        .pointer("/account/data/parsed/info/tokenAmount/uiAmount")
        .and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account(ui_amount: Value) -> Value {
        json!({
            "pubkey": "Acc",
            "account": {
                "data": {
                    "parsed": {
                        "info": {
                            "mint": "Mint",
                            "tokenAmount": {"uiAmount": ui_amount, "decimals": 6}
                        },
                        "type": "account"
                    },
                    "program": "spl-token"
                }
            }
        })
    }

    #[test]
    fn test_counts_only_non_zero_balances() {
        let accounts = vec![
            account(json!(12.5)),
            account(json!(0.0)),
            account(json!(null)),
            account(json!(0.000001)),
            json!({"pubkey": "Broken"}),
        ];

        assert_eq!(count_active_holders(&accounts), 2);
    }

    #[test]
    fn test_empty_account_list() {
        assert_eq!(count_active_holders(&[]), 0);
    }
}
