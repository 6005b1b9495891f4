//! Core search execution logic
//!
//! Navigation, progressive loading and DOM snapshot for one results page.
//! Every step is time-bounded and fails with a typed [`ExtractionError`].

use anyhow::Context;
use chromiumoxide::page::Page;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

use super::page_helpers::{current_url, scroll_by, scroll_height};
use super::page_timeout::with_page_timeout;
use super::scroll::{ScrollProgress, ScrollStep};
use super::types::RenderedDocument;
use crate::config::SearchConfig;
use crate::error::ExtractionError;

/// Navigate to the results page.
///
/// `goto` resolves once the document has loaded; results further down may
/// still be loading, which [`progressive_scroll`] takes care of.
pub async fn navigate(page: &Page, url: &Url, timeout_secs: u64) -> Result<(), ExtractionError> {
    info!("Navigating to search results: {}", url);
    with_page_timeout(
        async {
            page.goto(url.as_str())
                .await
                .context("Failed to navigate to search page")?;
            Ok(())
        },
        Duration::from_secs(timeout_secs),
        || ExtractionError::NavigationTimeout(timeout_secs),
        ExtractionError::Navigation,
    )
    .await
}

/// Scroll in fixed increments until the scrolled distance reaches the
/// document height, re-reading the height after each pause.
///
/// Bounded by `max_scroll_steps` and `scroll_timeout`; hitting either is an
/// error, not a silent stop, since the page never settled.
pub async fn progressive_scroll(page: &Page, config: &SearchConfig) -> Result<(), ExtractionError> {
    let started = Instant::now();
    let step_px = config.scroll_step_px();
    let delay = config.scroll_delay();
    let timeout = config.scroll_timeout();

    let scrolling = async {
        let mut progress = ScrollProgress::new(step_px, config.max_scroll_steps());
        let mut height = scroll_height(page)
            .await
            .map_err(|e| ExtractionError::from_chain(ExtractionError::Browser, &e))?;

        loop {
            match progress.next(height) {
                ScrollStep::Settled => {
                    debug!(
                        "Scroll settled after {} steps ({}px) in {:?}",
                        progress.steps(),
                        progress.scrolled_px(),
                        started.elapsed()
                    );
                    return Ok(());
                }
                ScrollStep::Exhausted => {
                    return Err(ExtractionError::ScrollTimeout(format!(
                        "document still growing after {} steps ({}px scrolled, height {}px)",
                        progress.steps(),
                        progress.scrolled_px(),
                        height
                    )));
                }
                ScrollStep::Scroll => {
                    scroll_by(page, step_px)
                        .await
                        .map_err(|e| ExtractionError::from_chain(ExtractionError::Browser, &e))?;
                    tokio::time::sleep(delay).await;
                    height = scroll_height(page)
                        .await
                        .map_err(|e| ExtractionError::from_chain(ExtractionError::Browser, &e))?;
                }
            }
        }
    };

    match tokio::time::timeout(timeout, scrolling).await {
        Ok(result) => result,
        Err(_) => Err(ExtractionError::ScrollTimeout(format!(
            "scroll loop exceeded {}s",
            timeout.as_secs()
        ))),
    }
}

/// Read the rendered DOM and final URL back from the page.
pub async fn snapshot(page: &Page, timeout_secs: u64) -> Result<RenderedDocument, ExtractionError> {
    let html = with_page_timeout(
        async { page.content().await.context("Failed to read page content") },
        Duration::from_secs(timeout_secs),
        || ExtractionError::Snapshot(format!("timed out after {timeout_secs}s")),
        ExtractionError::Snapshot,
    )
    .await?;

    let url = current_url(page).await;
    debug!("Snapshot of {} bytes from {:?}", html.len(), url);
    Ok(RenderedDocument::new(url, html))
}
