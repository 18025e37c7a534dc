/// Error types for terkode
///
/// Each layer has its own enum so callers can tell a recoverable provider
/// failure from a terminal resolution failure or a watchlist write failure.
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::apis::client::HttpError;
use crate::tokens::types::ProviderId;

/// One upstream source failed. Recovered by the resolver, never shown to users.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider} disabled via configuration")]
    Disabled { provider: ProviderId },

    #[error("{provider} request failed: {message}")]
    Request { provider: ProviderId, message: String },

    #[error("{provider} timed out after {seconds}s")]
    Timeout { provider: ProviderId, seconds: u64 },

    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: ProviderId,
        status: u16,
        body: String,
    },

    #[error("{provider} response could not be parsed: {message}")]
    Parse { provider: ProviderId, message: String },

    #[error("{provider} returned no usable data")]
    NoUsableData { provider: ProviderId },
}

impl ProviderError {
    /// Tag a transport-level failure with the provider it came from
    pub fn from_http(provider: ProviderId, err: HttpError, timeout: Duration) -> Self {
        match err {
            HttpError::Timeout => ProviderError::Timeout {
                provider,
                seconds: timeout.as_secs(),
            },
            HttpError::Status { status, body } => ProviderError::Status {
                provider,
                status,
                body,
            },
            HttpError::Parse(message) => ProviderError::Parse { provider, message },
            HttpError::Request(message) => ProviderError::Request { provider, message },
        }
    }

}

/// Terminal resolution failure. The display text is what users see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Token not found on Solana mainnet APIs")]
    NotFound { address: String },

    #[error("Invalid token address")]
    InvalidAddress,
}

/// Holder-count enrichment failure. Always suppressed by the resolver.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("RPC request failed: {0}")]
    Request(String),

    #[error("RPC timed out after {0}s")]
    Timeout(u64),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

impl EnrichmentError {
    pub fn from_http(err: HttpError, timeout: Duration) -> Self {
        match err {
            HttpError::Timeout => EnrichmentError::Timeout(timeout.as_secs()),
            HttpError::Parse(message) => EnrichmentError::InvalidResponse(message),
            other => EnrichmentError::Request(other.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("Address must not be blank")]
    BlankAddress,

    #[error("Failed to write watchlist {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize watchlist: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path} at line {line}, column {column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Flatten a TOML error into one line with a 1-based position
    pub fn parse(path: &Path, content: &str, err: &toml::de::Error) -> Self {
        let offset = err
            .span()
            .map(|span| span.start.min(content.len()))
            .unwrap_or(0);
        let before = content.get(..offset).unwrap_or("");
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count())
            + 1;

        ConfigError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            message: err.message().split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}
