/// Trending tokens: top boosted Solana tokens, each resolved to a record
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use crate::tokens::resolver::Resolve;
use crate::tokens::types::TokenRecord;
use async_trait::async_trait;
use std::collections::HashSet;

pub const DEFAULT_TRENDING_LIMIT: usize = 10;

/// Ranked list of candidate addresses, best first
#[async_trait]
pub trait TrendingSource: Send + Sync {
    async fn trending_addresses(&self) -> Result<Vec<String>, ProviderError>;
}

/// Resolve the first `limit` distinct trending addresses, skipping failures
pub async fn fetch_trending<S, R>(
    source: &S,
    resolver: &R,
    limit: usize,
) -> Result<Vec<TokenRecord>, ProviderError>
where
    S: TrendingSource + ?Sized,
    R: Resolve + ?Sized,
{
    let addresses = dedupe(source.trending_addresses().await?, limit);

    let mut records = Vec::with_capacity(addresses.len());
    for address in &addresses {
        match resolver.resolve(address).await {
            Ok(record) => records.push(record),
            Err(e) => logger::debug(
                LogTag::Resolver,
                &format!("Skipping trending token {}: {}", address, e),
            ),
        }
    }

    logger::info(
        LogTag::Resolver,
        &format!("Trending: resolved {}/{} tokens", records.len(), addresses.len()),
    );

    Ok(records)
}

/// First `limit` unique non-blank addresses, preserving rank
fn dedupe(addresses: Vec<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    addresses
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty() && seen.insert(a.clone()))
        .take(limit)
        .collect()
}
