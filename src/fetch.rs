use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

const USER_AGENT: &str = "foa_scraper/0.1 (grants ingest)";
const ACCEPT: &str = "text/html,application/xhtml+xml";
const TIMEOUT_SECS: u64 = 30;

/// Fetch one opportunity page. Non-2xx statuses are errors; everything past
/// this point works on the returned body.
pub async fn fetch_html(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;

    info!("Fetching {}", url);
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::ACCEPT, ACCEPT)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("Bad status from {}", url))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read body from {}", url))
}
