//! Spider module for fetching and parsing the release-notes snapshot
//!
//! This module contains the core pipeline:
//! - HTTP fetching with retry and charset fallback
//! - HTML parsing and version extraction
//! - Overall run coordination

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, fetch_page};
pub use parser::extract_versions;

use crate::output::save_versions;
use reqwest::Client;
use std::path::Path;

/// Web Archive snapshot of the Serv-U release-notes page
pub const RELEASE_NOTES_SNAPSHOT_URL: &str =
    "https://web.archive.org/web/20170613210635/http://www.serv-u.com/releasenotes";

/// Relative path the extracted version list is written to
pub const VERSIONS_FILE: &str = "serv_u_versions.txt";

/// Runs the complete fetch-extract-save pipeline
///
/// This is the main entry point. It builds the HTTP client (certificate
/// verification disabled as a client option) and runs the pipeline against
/// the fixed snapshot URL, writing the result to [`VERSIONS_FILE`].
///
/// # Returns
///
/// * `Ok(())` - Run completed; the output file exists (possibly empty)
/// * `Err(SpiderError)` - Client construction or the final write failed
pub async fn run() -> crate::Result<()> {
    let client = build_http_client()?;
    run_pipeline(&client, RELEASE_NOTES_SNAPSHOT_URL, Path::new(VERSIONS_FILE)).await
}

/// Runs fetch -> extract -> save against the given URL and output path
///
/// There is no branching between stages: a failed fetch flows through as
/// an empty extraction and an empty (but still written) output file.
pub async fn run_pipeline(client: &Client, url: &str, output_path: &Path) -> crate::Result<()> {
    let page_html = fetch_page(client, url).await;
    let versions = extract_versions(page_html.as_deref());
    save_versions(&versions, output_path)?;
    Ok(())
}
