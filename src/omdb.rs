//! Movie lookup against an OMDb-compatible HTTP API.
//!
//! [`lookup`] reports exactly what went wrong; [`fetch_movie`] is what the UI
//! calls and collapses every failure into `None`.

use std::time::{Duration, Instant};

use reqwest::Client;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::movie::{ApiErrorBody, MovieRecord};

/// Errors that can occur while looking up a movie.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connect, DNS, timeout or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// Endpoint answered with its own failure body
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// Body was not a movie record
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

/// Build a client for a single request. Dropped when the request finishes.
pub(crate) fn build_client(timeout_secs: Option<u64>) -> Result<Client, FetchError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(FetchError::Client)
}

/// Look up a movie by title.
pub async fn lookup(api: &ApiConfig, title: &str) -> Result<MovieRecord, FetchError> {
    let client = build_client(api.timeout_secs)?;

    tracing::debug!(url = %api.base_url, title = %title, "Sending movie lookup");
    let start = Instant::now();

    let response = client
        .get(&api.base_url)
        .query(&[("apikey", api.api_key.as_str()), ("t", title)])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    tracing::debug!(
        status = %status,
        latency_ms = start.elapsed().as_millis() as u64,
        bytes = body.len(),
        "Movie lookup response"
    );

    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    decode(&body)
}

/// Decode a response body, telling the API's own failure body apart from junk.
fn decode(body: &str) -> Result<MovieRecord, FetchError> {
    match serde_json::from_str::<MovieRecord>(body) {
        Ok(movie) => Ok(movie),
        Err(e) => match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(api_err) if api_err.is_failure() => Err(FetchError::NotFound(
                api_err.error.unwrap_or_else(|| "no result".to_string()),
            )),
            _ => Err(FetchError::Decode(e)),
        },
    }
}

/// Look up a movie by title, returning `None` on any failure.
///
/// The failure is logged; callers cannot tell "not found" from "network down".
pub async fn fetch_movie(api: &ApiConfig, title: &str) -> Option<MovieRecord> {
    match lookup(api, title).await {
        Ok(movie) => {
            tracing::info!("Found '{}' ({})", movie.title, movie.year);
            Some(movie)
        }
        Err(e) if e.is_not_found() => {
            tracing::info!("No result for '{}': {}", title, e);
            None
        }
        Err(e) => {
            tracing::warn!("Movie lookup for '{}' failed: {}", title, e);
            None
        }
    }
}
