//! RAII guard closing a browser page on every exit path.

use chromiumoxide::page::Page;
use std::ops::Deref;
use tracing::{debug, warn};

/// Owns a page for the duration of one extraction.
///
/// [`PageGuard::close`] closes the page and waits for it. If the guard is
/// dropped instead (error path, or the search future was cancelled) `Drop`
/// spawns `page.close()` on the current runtime.
pub struct PageGuard {
    page: Option<Page>,
    label: String,
}

impl PageGuard {
    pub fn new(page: Page, label: impl Into<String>) -> Self {
        Self {
            page: Some(page),
            label: label.into(),
        }
    }

    /// Close the page now, logging rather than failing on CDP errors.
    pub async fn close(mut self) {
        if let Some(page) = self.page.take() {
            if let Err(e) = page.close().await {
                warn!("Failed to close page {}: {}", self.label, e);
            } else {
                debug!("Closed page {}", self.label);
            }
        }
    }
}

impl Deref for PageGuard {
    type Target = Page;

    fn deref(&self) -> &Page {
        // Only `close` takes the page, and it consumes the guard.
        self.page.as_ref().expect("page present until close")
    }
}

impl Drop for PageGuard {
    fn drop(&mut self) {
        let Some(page) = self.page.take() else {
            return;
        };
        let label = std::mem::take(&mut self.label);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = page.close().await {
                        debug!("Background close of page {} failed: {}", label, e);
                    }
                });
            }
            Err(_) => warn!("PageGuard for {} dropped outside a runtime; page left to browser shutdown", label),
        }
    }
}
