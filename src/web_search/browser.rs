//! Per-search browser lifecycle
//!
//! Each extraction launches its own Chromium with its own profile directory.
//! Nothing is pooled: concurrent searches never share browser state.

use anyhow::{Context, Result};
use chromiumoxide::browser::Browser;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::page_guard::PageGuard;
use crate::browser_setup::launch_browser;
use crate::config::SearchConfig;

/// Profile directory of one session, removed when dropped.
///
/// Created before Chrome starts, so a failed or cancelled launch cleans up
/// as well as a finished session.
struct ProfileDir {
    path: PathBuf,
}

impl ProfileDir {
    fn new(root: &Path) -> Self {
        Self {
            path: root.join(format!("serpscope_chrome_{}", uuid::Uuid::new_v4())),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ProfileDir {
    fn drop(&mut self) {
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => debug!("Removed profile directory {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                self.path.display(),
                e
            ),
        }
    }
}

/// Wrapper for Browser, its event handler task and its profile directory
///
/// [`BrowserSession::close`] shuts Chrome down gracefully. When dropped
/// without it the handler task is aborted, `Browser::drop` kills the Chrome
/// process and the profile directory is removed.
pub struct BrowserSession {
    // Field order is drop order: Chrome goes before its profile.
    browser: Browser,
    handler: JoinHandle<()>,
    profile: Option<ProfileDir>,
}

impl BrowserSession {
    /// Launch a fresh browser configured from `config`.
    pub async fn launch(config: &SearchConfig) -> Result<Self> {
        Self::launch_in(config, &std::env::temp_dir()).await
    }

    /// Launch with the profile directory placed under `root`.
    pub(crate) async fn launch_in(config: &SearchConfig, root: &Path) -> Result<Self> {
        let profile = ProfileDir::new(root);

        let (browser, handler) = launch_browser(
            config.headless(),
            profile.path(),
            config.chrome_executable(),
        )
        .await?;

        info!("Browser session started ({})", profile.path().display());
        Ok(Self {
            browser,
            handler,
            profile: Some(profile),
        })
    }

    /// Open a blank page owned by a [`PageGuard`].
    pub async fn blank_page(&self, label: impl Into<String>) -> Result<PageGuard> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("Failed to create blank page")?;
        Ok(PageGuard::new(page, label))
    }

    /// Close Chrome, wait for the process to exit and remove the profile.
    ///
    /// Cleanup failures are logged, never returned: the search result is
    /// already decided by the time the session closes.
    pub async fn close(mut self) {
        debug!("Closing browser session");
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.profile.take();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        if self.profile.is_some() {
            warn!("BrowserSession dropped without close - removing temp dir in Drop");
        }
    }
}
