//! Error types for search requests.
//!
//! Two layers: [`ExtractionError`] describes what went wrong while driving
//! the browser, [`SearchError`] is what a caller of the pipeline sees and
//! knows how to map onto a client or server failure.

/// Failures while rendering and scraping the results page.
///
/// Every variant aborts the whole extraction. The payload is the formatted
/// cause chain so it can be logged once at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// Browser executable could not be found, downloaded or started.
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// The results page failed to load.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// The results page did not finish loading in time.
    #[error("navigation timed out after {0}s")]
    NavigationTimeout(u64),

    /// The progressive scroll loop hit its step or time bound.
    #[error("progressive loading did not settle: {0}")]
    ScrollTimeout(String),

    /// The provider served a CAPTCHA or consent wall instead of results.
    #[error("search provider blocked the request: {0}")]
    Blocked(String),

    /// The rendered document could not be read back from the page.
    #[error("failed to snapshot rendered page: {0}")]
    Snapshot(String),

    /// Any other CDP/browser communication failure.
    #[error("browser error: {0}")]
    Browser(String),
}

impl ExtractionError {
    /// Build a variant from an `anyhow` chain, keeping every context layer.
    pub(crate) fn from_chain(make: fn(String) -> Self, err: &anyhow::Error) -> Self {
        make(format!("{err:#}"))
    }
}

/// Errors surfaced by [`crate::SearchPipeline::search`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Query missing, blank or too long. Raised before any browser work.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The results page could not be extracted.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The ranking or matching stage failed unexpectedly.
    #[error("analysis fault: {0}")]
    AnalysisFault(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// True when the caller sent a bad request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidQuery(_))
    }

    /// HTTP-style status for the request boundary: 400 for bad input, 500 otherwise.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }
}

/// Convenience alias for search results.
pub type Result<T> = std::result::Result<T, SearchError>;
