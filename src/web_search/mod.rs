//! Search results extraction using browser automation
//!
//! Renders the provider's results page in a dedicated headless Chromium,
//! scrolls until lazy-loaded results have materialized, and hands the
//! rendered DOM to an [`ExtractionAdapter`] that turns it into
//! [`ResultRecord`]s.

mod browser;
mod page_guard;
mod page_helpers;
mod search;

pub mod adapter;
pub mod extractor;
pub mod page_timeout;
pub mod scroll;
pub mod types;

pub use adapter::{ExtractionAdapter, SelectorSet};
pub use browser::BrowserSession;
pub use extractor::{BrowserExtractor, RecordExtractor};
pub use page_guard::PageGuard;
pub use scroll::{ScrollProgress, ScrollStep};
pub use types::{RenderedDocument, ResultRecord, SearchQuery};
