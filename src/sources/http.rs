// Shared HTTP client utilities

use crate::error::{Error, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("jarfetch/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Shared HTTP client with proper User-Agent
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Send a GET and reject anything that is not a 2xx, as a metadata failure
async fn get_metadata(url: &str) -> Result<Response> {
    let response = CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| Error::metadata(url, e))?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(Error::metadata(url, "resource not found (HTTP 404)"));
    }

    if !response.status().is_success() {
        return Err(Error::metadata(
            url,
            format!("HTTP request failed ({})", response.status()),
        ));
    }

    Ok(response)
}

/// Fetch JSON from a URL and deserialize it
///
/// The body is decoded with serde_json directly so a missing or mistyped
/// field keeps its precise message.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let body = fetch_text(url).await?;
    serde_json::from_str(&body).map_err(|e| Error::metadata(url, e))
}

/// Fetch a plain-text body
pub async fn fetch_text(url: &str) -> Result<String> {
    let response = get_metadata(url).await?;
    response.text().await.map_err(|e| Error::metadata(url, e))
}

/// Open the body stream of an artifact download
pub async fn open_stream(url: &str) -> Result<Response> {
    let response = CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| Error::artifact(url, e))?;

    if !response.status().is_success() {
        return Err(Error::artifact(
            url,
            format!("HTTP request failed ({})", response.status()),
        ));
    }

    Ok(response)
}
