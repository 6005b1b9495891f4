//! Shared configuration constants for serpscope
//!
//! Default values used by the config builder, the browser launcher and the
//! extraction loop, kept in one place to avoid magic numbers.

/// Default number of result records extracted per search.
///
/// The two values seen in practice are 10 (one classic results page) and 30
/// (after progressive loading). Callers raise it through the config builder.
pub const DEFAULT_RESULT_CAP: usize = 10;

/// Pixels scrolled per step of the progressive loading loop.
pub const DEFAULT_SCROLL_STEP_PX: u32 = 100;

/// Pause between scroll steps so lazy-loaded results can materialize.
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

/// Upper bound on scroll steps before the page is considered stalled.
///
/// 500 steps of 100px cover a 50_000px document, far beyond one results page.
pub const DEFAULT_MAX_SCROLL_STEPS: u32 = 500;

/// Wall-clock bound on the whole scroll loop.
pub const DEFAULT_SCROLL_TIMEOUT_SECS: u64 = 30;

/// Timeout for `page.goto()` to reach the frame's `load` event.
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Timeout for reading the rendered document back from the page.
pub const DEFAULT_SNAPSHOT_TIMEOUT_SECS: u64 = 10;

/// Timeout for finding/downloading and starting Chromium.
pub const DEFAULT_LAUNCH_TIMEOUT_SECS: u64 = 60;

/// Maximum accepted query length in bytes.
pub const MAX_QUERY_LENGTH: usize = 500;

/// Search endpoint of the targeted provider.
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Chrome user agent string for stealth mode
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
