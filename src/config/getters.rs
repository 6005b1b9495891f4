//! Getter methods for `SearchConfig`

use std::path::Path;
use std::time::Duration;

use super::types::SearchConfig;

impl SearchConfig {
    #[must_use]
    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chrome_executable(&self) -> Option<&Path> {
        self.chrome_executable.as_deref()
    }

    #[must_use]
    pub fn launch_timeout_secs(&self) -> u64 {
        self.launch_timeout_secs
    }

    #[must_use]
    pub fn navigation_timeout_secs(&self) -> u64 {
        self.navigation_timeout_secs
    }

    #[must_use]
    pub fn scroll_step_px(&self) -> u32 {
        self.scroll_step_px
    }

    #[must_use]
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    #[must_use]
    pub fn max_scroll_steps(&self) -> u32 {
        self.max_scroll_steps
    }

    #[must_use]
    pub fn scroll_timeout(&self) -> Duration {
        Duration::from_secs(self.scroll_timeout_secs)
    }

    #[must_use]
    pub fn snapshot_timeout_secs(&self) -> u64 {
        self.snapshot_timeout_secs
    }
}
