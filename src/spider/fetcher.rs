//! HTTP fetcher for the release-notes snapshot
//!
//! This module handles the single HTTP request the spider makes:
//! - Building the HTTP client with the fixed header set
//! - One GET per attempt, wrapped in the retry policy
//! - Decoding the response body on a 200, nothing otherwise

use crate::decode::{decode_page, DEFAULT_CHARSETS};
use crate::retry::RetryPolicy;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};

/// Headers sent with every request, matching what the archive expects
/// from a browser navigation
fn special_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "User-Agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/81.0.4044.129 Safari/537.36",
        ),
    );
    headers.insert(
        "Referer",
        HeaderValue::from_static("https://web.archive.org/web/*/http://www.serv-u.com/releasenotes"),
    );
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("navigate"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-origin"));
    headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
    headers
}

/// Builds the HTTP client used for the snapshot fetch
///
/// Certificate verification is disabled as an explicit client option; the
/// archive snapshot redirects through hosts whose certificates do not
/// always match. No request timeout is set beyond the client's defaults.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .default_headers(special_headers())
        .danger_accept_invalid_certs(true)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its decoded body, retrying transient failures
///
/// Each attempt issues one GET. A response with status exactly 200 has its
/// body decoded through the default charset list; any other status counts
/// as "no content" and is not retried. Request errors (connect failures,
/// broken transfers) are retried under the default policy: 3 attempts with
/// a 2 second minimum backoff. Exhausting the retries yields `None`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Some(String)` - Decoded page text
/// * `None` - Non-200 response, undecodable body, or retries exhausted
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    let policy = RetryPolicy::default();

    policy
        .run(|| {
            let client = client.clone();
            let url = url.to_owned();
            async move { request_page(&client, &url).await }
        })
        .await
        .flatten()
}

/// One GET attempt: 200 decodes to page text, anything else is no content
async fn request_page(client: &Client, url: &str) -> Result<Option<String>, reqwest::Error> {
    let response = client.get(url).send().await?;

    if response.status() != StatusCode::OK {
        return Ok(None);
    }

    let body = response.bytes().await?;
    Ok(decode_page(Some(&body), DEFAULT_CHARSETS))
}
