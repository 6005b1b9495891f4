//! Helper functions for consistent chromiumoxide Page error handling
//!
//! These wrap the handful of Page calls the extractor makes, turning
//! `Ok(None)` and CDP failures into values or `anyhow` errors with context.

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use tracing::trace;

/// Scroll the viewport down by `dy` pixels.
pub async fn scroll_by(page: &Page, dy: u32) -> Result<()> {
    page.evaluate(format!("window.scrollBy(0, {dy})"))
        .await
        .context("Failed to scroll viewport")?;
    Ok(())
}

/// Current scrollable height of the document body.
///
/// A document without a body reports 0, which ends the scroll loop.
pub async fn scroll_height(page: &Page) -> Result<u64> {
    let height: f64 = page
        .evaluate("document.body ? document.body.scrollHeight : 0")
        .await
        .context("Failed to read document scroll height")?
        .into_value()
        .context("Scroll height was not a number")?;
    Ok(height.max(0.0) as u64)
}

/// Get page URL, `None` when the page has none or CDP fails.
pub async fn current_url(page: &Page) -> Option<String> {
    match page.url().await {
        Ok(url) => url,
        Err(e) => {
            trace!("Failed to get page URL (browser communication error): {}", e);
            None
        }
    }
}
