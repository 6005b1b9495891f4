//! Search pipeline: extraction, then ranking and keyword matching over the
//! same records, composed into one response.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::analysis::{PhraseCount, rank_phrases};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::keywords::{HighlightMarker, HighlightPolicy, Keyword, highlight_with, match_keywords};
use crate::web_search::{RecordExtractor, ResultRecord, SearchQuery};

/// Everything one search produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub records: Vec<ResultRecord>,
    pub phrase_counts: Vec<PhraseCount>,
    pub matched_keywords: Vec<Keyword>,
}

impl SearchResponse {
    /// Each record URL annotated with the matched keywords.
    #[must_use]
    pub fn highlighted_urls(&self, marker: &HighlightMarker, policy: HighlightPolicy) -> Vec<String> {
        self.records
            .iter()
            .map(|record| highlight_with(&record.url, &self.matched_keywords, marker, policy))
            .collect()
    }
}

/// Coordinates one extractor with the pure analysis stages.
///
/// Holds no per-request state; `search` takes `&self`, so a single pipeline
/// serves concurrent requests.
pub struct SearchPipeline<E> {
    extractor: E,
    config: SearchConfig,
}

impl<E: RecordExtractor> SearchPipeline<E> {
    #[must_use]
    pub fn new(extractor: E, config: SearchConfig) -> Self {
        Self { extractor, config }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Run one search.
    ///
    /// # Errors
    ///
    /// * `InvalidQuery` before any extraction work when the query is blank
    /// * `Extraction` when the page could not be rendered or scraped; never
    ///   reported as an empty success
    /// * `AnalysisFault` if ranking or matching panicked
    pub async fn search(
        &self,
        query: &str,
        keywords: &[Keyword],
    ) -> Result<SearchResponse, SearchError> {
        let query = SearchQuery::parse(query)?;
        let cap = self.config.result_cap();

        info!("Starting search for '{}' (cap {})", query, cap);

        let mut records = self.extractor.extract(&query, cap).await.map_err(|e| {
            error!("Extraction failed for '{}': {}", query, e);
            SearchError::from(e)
        })?;

        if records.len() > cap {
            warn!(
                "Extractor returned {} records for cap {}; truncating",
                records.len(),
                cap
            );
            records.truncate(cap);
        }

        let (records, phrase_counts, matched_keywords) =
            analyze(records, keywords.to_vec()).await?;

        info!(
            "Search for '{}' finished: {} records, {} phrases, {} matched keywords",
            query,
            records.len(),
            phrase_counts.len(),
            matched_keywords.len()
        );

        Ok(SearchResponse {
            query: query.as_str().to_string(),
            records,
            phrase_counts,
            matched_keywords,
        })
    }
}

type Analysis = (Vec<ResultRecord>, Vec<PhraseCount>, Vec<Keyword>);

/// Rank and match on the blocking pool; a panic there fails the request.
async fn analyze(records: Vec<ResultRecord>, keywords: Vec<Keyword>) -> Result<Analysis, SearchError> {
    tokio::task::spawn_blocking(move || {
        let phrase_counts = rank_phrases(&records);
        let matched = match_keywords(&keywords, &records);
        (records, phrase_counts, matched)
    })
    .await
    .map_err(|e| {
        error!("Analysis task failed: {}", e);
        SearchError::AnalysisFault(e.to_string())
    })
}
