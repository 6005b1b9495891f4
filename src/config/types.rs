//! Core configuration type for search requests
//!
//! `SearchConfig` carries the result cap, the browser launch mode and every
//! bound placed on the extraction step.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration shared by the extractor and the pipeline coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of result records extracted per search.
    ///
    /// **INVARIANT:** Always at least 1 (validated in builder).
    pub(crate) result_cap: usize,

    /// Provider search endpoint, without query string.
    pub(crate) search_url: String,

    pub(crate) headless: bool,

    /// Explicit Chromium binary; skips discovery when set.
    pub(crate) chrome_executable: Option<PathBuf>,

    /// Timeout in seconds for locating and starting the browser
    ///
    /// Includes the managed Chromium download on first use.
    ///
    /// Default: 60 seconds
    pub(crate) launch_timeout_secs: u64,

    /// Timeout in seconds for `page.goto()` operations
    ///
    /// Controls how long to wait for the results page to fire its `load`
    /// lifecycle event. Prevents hangs on slow DNS or unresponsive servers.
    ///
    /// Default: 30 seconds
    pub(crate) navigation_timeout_secs: u64,

    /// Pixels scrolled per progressive-loading step
    pub(crate) scroll_step_px: u32,

    /// Milliseconds to yield between scroll steps
    pub(crate) scroll_delay_ms: u64,

    /// Maximum number of scroll steps before giving up
    pub(crate) max_scroll_steps: u32,

    /// Timeout in seconds for the whole scroll loop
    ///
    /// Default: 30 seconds
    pub(crate) scroll_timeout_secs: u64,

    /// Timeout in seconds for reading the rendered DOM back
    ///
    /// Default: 10 seconds
    pub(crate) snapshot_timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        // The default builder only holds validated values.
        Self::builder().into_unchecked()
    }
}
