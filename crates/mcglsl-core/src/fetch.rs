//! Release archive download.
//!
//! The archive is small enough to buffer whole; extraction needs random
//! access anyway, so there is no streaming to disk.

use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Errors from downloading a release archive.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or a non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an empty body.
    #[error("Empty response from {0}")]
    EmptyBody(String),
}

/// Download `url` into memory with a single GET request.
pub async fn download_archive(client: &Client, url: &str) -> Result<Bytes, FetchError> {
    debug!(url, "fetching release archive");

    let bytes = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    if bytes.is_empty() {
        return Err(FetchError::EmptyBody(url.to_string()));
    }

    debug!(url, len = bytes.len(), "release archive buffered");
    Ok(bytes)
}
