//! Errors surfaced by the content API client

use thiserror::Error;

/// Failure of a content API fetch or parse step
///
/// Callers never surface these to the reader; pages degrade to an empty
/// listing or a loading placeholder. The error itself stays observable to
/// logs and tests.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode content API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("content API endpoint is not configured")]
    MissingEndpoint,
}
