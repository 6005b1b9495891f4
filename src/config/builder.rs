//! Fluent builder for `SearchConfig`
//!
//! Every field has a sensible default; `build()` validates the combination
//! so a `SearchConfig` can never carry a zero cap or a zero timeout.

use crate::error::SearchError;
use crate::utils::{
    DEFAULT_LAUNCH_TIMEOUT_SECS, DEFAULT_MAX_SCROLL_STEPS, DEFAULT_NAVIGATION_TIMEOUT_SECS,
    DEFAULT_RESULT_CAP, DEFAULT_SCROLL_DELAY_MS, DEFAULT_SCROLL_STEP_PX,
    DEFAULT_SCROLL_TIMEOUT_SECS, DEFAULT_SNAPSHOT_TIMEOUT_SECS, GOOGLE_SEARCH_URL,
};
use std::path::PathBuf;
use url::Url;

use super::types::SearchConfig;

#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    pub(crate) result_cap: usize,
    pub(crate) search_url: String,
    pub(crate) headless: bool,
    pub(crate) chrome_executable: Option<PathBuf>,
    pub(crate) launch_timeout_secs: u64,
    pub(crate) navigation_timeout_secs: u64,
    pub(crate) scroll_step_px: u32,
    pub(crate) scroll_delay_ms: u64,
    pub(crate) max_scroll_steps: u32,
    pub(crate) scroll_timeout_secs: u64,
    pub(crate) snapshot_timeout_secs: u64,
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self {
            result_cap: DEFAULT_RESULT_CAP,
            search_url: GOOGLE_SEARCH_URL.to_string(),
            headless: true,
            chrome_executable: None,
            launch_timeout_secs: DEFAULT_LAUNCH_TIMEOUT_SECS,
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            scroll_step_px: DEFAULT_SCROLL_STEP_PX,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            max_scroll_steps: DEFAULT_MAX_SCROLL_STEPS,
            scroll_timeout_secs: DEFAULT_SCROLL_TIMEOUT_SECS,
            snapshot_timeout_secs: DEFAULT_SNAPSHOT_TIMEOUT_SECS,
        }
    }
}

impl SearchConfig {
    /// Create a builder for configuring a `SearchConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

impl SearchConfigBuilder {
    #[must_use]
    pub fn result_cap(mut self, cap: usize) -> Self {
        self.result_cap = cap;
        self
    }

    #[must_use]
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn chrome_executable(mut self, path: Option<PathBuf>) -> Self {
        self.chrome_executable = path;
        self
    }

    #[must_use]
    pub fn launch_timeout_secs(mut self, secs: u64) -> Self {
        self.launch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.navigation_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn scroll_step_px(mut self, px: u32) -> Self {
        self.scroll_step_px = px;
        self
    }

    #[must_use]
    pub fn scroll_delay_ms(mut self, ms: u64) -> Self {
        self.scroll_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn max_scroll_steps(mut self, steps: u32) -> Self {
        self.max_scroll_steps = steps;
        self
    }

    #[must_use]
    pub fn scroll_timeout_secs(mut self, secs: u64) -> Self {
        self.scroll_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn snapshot_timeout_secs(mut self, secs: u64) -> Self {
        self.snapshot_timeout_secs = secs;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Config` when the cap, a scroll parameter or a
    /// timeout is zero, or when the search URL does not parse.
    pub fn build(self) -> Result<SearchConfig, SearchError> {
        if self.result_cap == 0 {
            return Err(SearchError::Config("result_cap must be > 0".into()));
        }
        if self.scroll_step_px == 0 {
            return Err(SearchError::Config("scroll_step_px must be > 0".into()));
        }
        if self.max_scroll_steps == 0 {
            return Err(SearchError::Config("max_scroll_steps must be > 0".into()));
        }
        for (name, secs) in [
            ("launch_timeout_secs", self.launch_timeout_secs),
            ("navigation_timeout_secs", self.navigation_timeout_secs),
            ("scroll_timeout_secs", self.scroll_timeout_secs),
            ("snapshot_timeout_secs", self.snapshot_timeout_secs),
        ] {
            if secs == 0 {
                return Err(SearchError::Config(format!("{name} must be > 0")));
            }
        }
        Url::parse(&self.search_url).map_err(|e| {
            SearchError::Config(format!("invalid search_url '{}': {e}", self.search_url))
        })?;

        Ok(self.into_unchecked())
    }

    pub(crate) fn into_unchecked(self) -> SearchConfig {
        SearchConfig {
            result_cap: self.result_cap,
            search_url: self.search_url,
            headless: self.headless,
            chrome_executable: self.chrome_executable,
            launch_timeout_secs: self.launch_timeout_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            scroll_step_px: self.scroll_step_px,
            scroll_delay_ms: self.scroll_delay_ms,
            max_scroll_steps: self.max_scroll_steps,
            scroll_timeout_secs: self.scroll_timeout_secs,
            snapshot_timeout_secs: self.snapshot_timeout_secs,
        }
    }
}
