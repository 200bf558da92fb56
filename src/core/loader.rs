//! core/loader.rs
//! Quote Loader: one GET to the quotes endpoint -> `Vec<Quote>`.
//!
//! - Exactly one request per `fetch_quotes` call (no retry).
//! - Every failure comes back as `Err(LoadFailure)`; nothing panics.
//! - `parse_payload` is the pure half so it can be tested without a server.

use std::time::Duration;

use super::error::LoadFailure;
use super::types::{Quote, QuotesPayload};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for the startup fetch.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, LoadFailure> {
    client_builder(timeout)
        .build()
        .map_err(|e| LoadFailure::Network(e.to_string()))
}

/// Timeout + user agent; everything else is reqwest's default.
fn client_builder(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
}

/// Fetch and parse the quote list.
///
/// Takes owned args so the future is `'static` (iced `Task::perform` needs that).
pub async fn fetch_quotes(
    client: reqwest::Client,
    endpoint: String,
) -> Result<Vec<Quote>, LoadFailure> {
    let response = client.get(&endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadFailure::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    parse_payload(&body)
}

/// Parse `{ "quotes": [{ "quote": .., "author": .. }, ...] }`.
pub fn parse_payload(body: &[u8]) -> Result<Vec<Quote>, LoadFailure> {
    let payload: QuotesPayload = serde_json::from_slice(body)?;
    Ok(payload.quotes)
}
