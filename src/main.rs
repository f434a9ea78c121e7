//! Serv-U version spider main entry point
//!
//! Fetches the archived Serv-U release-notes page, extracts the version
//! numbers, and writes them to serv_u_versions.txt in the working
//! directory. Takes no arguments; everything is fixed at compile time.

use servu_versions::spider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    tracing::info!(
        "fetching release-notes snapshot: {}",
        spider::RELEASE_NOTES_SNAPSHOT_URL
    );

    spider::run().await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber with the fixed default filter
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("servu_versions=info,warn"))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
