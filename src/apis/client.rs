/// Base HTTP client shared by all API clients
///
/// Wraps `reqwest::Client` with a per-client timeout and uniform handling of
/// transport errors, non-success statuses, and body decoding.
use crate::logger::{self, LogTag};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;

const USER_AGENT: &str = concat!("terkode/", env!("CARGO_PKG_VERSION"));

/// Maximum number of body bytes echoed into an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// HTTP client wrapper with timeout
pub struct HttpClient {
    client: Client,
    timeout: Duration,
    name: &'static str,
}

impl HttpClient {
    pub fn new(name: &'static str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Request(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout,
            name,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` with optional query parameters and decode the JSON body
    pub async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let builder = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .query(query);
        self.send_json(url, builder).await
    }

    /// POST a JSON body to `url` and decode the JSON response
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.client.post(url).json(body);
        self.send_json(url, builder).await
    }

    async fn send_json<T>(&self, url: &str, builder: reqwest::RequestBuilder) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let start = Instant::now();
        logger::debug(LogTag::Api, &format!("[{}] -> {}", self.name, url));

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        let elapsed = start.elapsed().as_millis();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            logger::debug(
                LogTag::Api,
                &format!("[{}] <- HTTP {} in {}ms", self.name, status, elapsed),
            );
            return Err(HttpError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Request(e.to_string())
            }
        })?;

        logger::debug(
            LogTag::Api,
            &format!("[{}] <- HTTP {} in {}ms ({} bytes)", self.name, status, elapsed, text.len()),
        );
        logger::verbose(LogTag::Api, &format!("[{}] body: {}", self.name, text));

        serde_json::from_str(&text).map_err(|e| HttpError::Parse(e.to_string()))
    }
}
