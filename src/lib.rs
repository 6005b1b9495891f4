pub mod analysis;
pub mod browser_setup;
pub mod config;
pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod utils;
pub mod web_search;

pub use analysis::{PhraseCount, rank_phrases, tokenize};
pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{SearchConfig, SearchConfigBuilder};
pub use error::{ExtractionError, SearchError};
pub use keywords::{
    HighlightMarker, HighlightPolicy, Keyword, KeywordRow, SelectedKeywords, export_rows,
    highlight, highlight_with, import_rows, keywords_from_json, match_keywords, normalize,
};
pub use pipeline::{SearchPipeline, SearchResponse};
pub use web_search::{
    BrowserExtractor, ExtractionAdapter, RecordExtractor, RenderedDocument, ResultRecord,
    SearchQuery, SelectorSet,
};

/// Run one search with a fresh browser and the default Google selector set.
///
/// Convenience wrapper over [`SearchPipeline`] for callers that do not need
/// to keep a pipeline around between searches.
pub async fn search(
    config: SearchConfig,
    query: &str,
    keywords: &[Keyword],
) -> Result<SearchResponse, SearchError> {
    let extractor = BrowserExtractor::new(config.clone(), SelectorSet::google());
    SearchPipeline::new(extractor, config).search(query, keywords).await
}
