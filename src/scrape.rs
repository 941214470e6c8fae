use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::entry::Entry;
use crate::pipeline;

pub const PAGE_PREFIX: &str = "https://www.nintendo.co.jp/n02/dmg/b86j/";

const CONCURRENCY: usize = 4;
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 1000;

pub fn page_url(page: u8) -> String {
    format!("{PAGE_PREFIX}hamugo0{page}/index.html")
}

/// Fetched page bytes plus the Content-Type header as served.
pub struct FetchedPage {
    pub page: u8,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Fetch and extract the given pages concurrently. Any page failing its
/// fetch or extraction fails the whole run; on success the result holds
/// one `(page, entries)` item per page.
pub async fn scrape_pages(pages: RangeInclusive<u8>) -> Result<Vec<(u8, Vec<Entry>)>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")?;
    let semaphore = Arc::new(Semaphore::new(CONCURRENCY));

    let total = pages.clone().count();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut handles = Vec::with_capacity(total);
    for page in pages {
        let client = client.clone();
        let sem = Arc::clone(&semaphore);
        let pb = pb.clone();

        handles.push(tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let fetched = fetch_with_retry(&client, page).await?;
            debug!("page {}: {} bytes", fetched.page, fetched.body.len());
            // Parse and extract synchronously; the document tree never
            // crosses an await point.
            let entries = pipeline::extract_page(&fetched.body, &fetched.content_type, page)?;
            pb.inc(1);
            Ok::<(u8, Vec<Entry>), anyhow::Error>((page, entries))
        }));
    }

    let mut results = Vec::with_capacity(total);
    for handle in handles {
        results.push(handle.await??);
    }
    pb.finish_and_clear();

    Ok(results)
}

async fn fetch_with_retry(client: &reqwest::Client, page: u8) -> Result<FetchedPage> {
    let url = page_url(page);
    for attempt in 0..MAX_RETRIES {
        match fetch_one(client, page, &url).await {
            Ok(fetched) => return Ok(fetched),
            Err(e) => {
                let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
                warn!(
                    "Fetch failed for page {} (attempt {}/{}): {}. Backing off {:.1}s",
                    page,
                    attempt + 1,
                    MAX_RETRIES + 1,
                    e,
                    backoff.as_secs_f64()
                );
                tokio::time::sleep(backoff).await;
            }
        }
    }
    fetch_one(client, page, &url).await
}

async fn fetch_one(client: &reqwest::Client, page: u8, url: &str) -> Result<FetchedPage> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed for page {page} ({url})"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("page {page}: server returned {status} for {url}");
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let body = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read body for page {page}"))?
        .to_vec();

    Ok(FetchedPage { page, content_type, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_urls_follow_the_fixed_pattern() {
        assert_eq!(
            page_url(1),
            "https://www.nintendo.co.jp/n02/dmg/b86j/hamugo01/index.html"
        );
        assert_eq!(
            page_url(9),
            "https://www.nintendo.co.jp/n02/dmg/b86j/hamugo09/index.html"
        );
    }
}
