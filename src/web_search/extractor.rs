//! Result extraction contract and its headless-browser implementation.

use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use super::adapter::{ExtractionAdapter, SelectorSet};
use super::browser::BrowserSession;
use super::page_timeout::with_page_timeout;
use super::search::{navigate, progressive_scroll, snapshot};
use super::types::{ResultRecord, SearchQuery};
use crate::config::SearchConfig;
use crate::error::ExtractionError;

/// Produces the ranked result records for one query.
///
/// Either the full list (at most `cap` records, in page order) or an error;
/// never a partial list. All implementations must be `Send + Sync` so one
/// extractor serves concurrent searches.
pub trait RecordExtractor: Send + Sync {
    fn extract(
        &self,
        query: &SearchQuery,
        cap: usize,
    ) -> impl Future<Output = Result<Vec<ResultRecord>, ExtractionError>> + Send;
}

/// Extractor rendering the provider's results page in headless Chromium.
pub struct BrowserExtractor<A = SelectorSet> {
    config: SearchConfig,
    adapter: A,
}

impl<A: ExtractionAdapter> BrowserExtractor<A> {
    #[must_use]
    pub fn new(config: SearchConfig, adapter: A) -> Self {
        Self { config, adapter }
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    async fn extract_in_session(
        &self,
        session: &BrowserSession,
        query: &SearchQuery,
        cap: usize,
    ) -> Result<Vec<ResultRecord>, ExtractionError> {
        let url = self.adapter.search_url(self.config.search_url(), query)?;

        let page = session
            .blank_page(format!("search:{query}"))
            .await
            .map_err(|e| ExtractionError::from_chain(ExtractionError::Browser, &e))?;

        navigate(&page, &url, self.config.navigation_timeout_secs()).await?;
        progressive_scroll(&page, &self.config).await?;
        let document = snapshot(&page, self.config.snapshot_timeout_secs()).await?;
        page.close().await;

        if self.adapter.is_blocked(&document) {
            return Err(ExtractionError::Blocked(format!(
                "interstitial served at {}",
                document.url.as_deref().unwrap_or("unknown URL")
            )));
        }

        let records = self.adapter.extract_records(&document, cap);
        if records.is_empty() {
            warn!("No result containers found for '{}'", query);
        }
        Ok(records)
    }
}

impl<A: ExtractionAdapter> RecordExtractor for BrowserExtractor<A> {
    async fn extract(
        &self,
        query: &SearchQuery,
        cap: usize,
    ) -> Result<Vec<ResultRecord>, ExtractionError> {
        let launch_secs = self.config.launch_timeout_secs();
        let session = with_page_timeout(
            BrowserSession::launch(&self.config),
            Duration::from_secs(launch_secs),
            || ExtractionError::Launch(format!("timed out after {launch_secs}s")),
            ExtractionError::Launch,
        )
        .await?;

        // Close on both paths; a cancelled future falls back to the guards' Drop.
        let outcome = self.extract_in_session(&session, query, cap).await;
        session.close().await;

        if let Ok(records) = &outcome {
            info!("Extracted {} records for '{}'", records.len(), query);
        }
        outcome
    }
}
