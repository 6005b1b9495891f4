//! Test utilities shared by the serpscope integration tests

use serpscope::{ExtractionError, RecordExtractor, ResultRecord, SearchQuery};
use std::sync::Mutex;

/// Creates a results page in Google's organic-result markup
#[allow(dead_code)]
pub fn create_results_page(results: &[(&str, &str, &str)]) -> String {
    let blocks: String = results
        .iter()
        .map(|(title, href, description)| result_block(title, href, description))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>results - Google Search</title></head>
<body>
    <div id="search"><div id="rso">{blocks}</div></div>
</body>
</html>"#
    )
}

/// One organic result container
#[allow(dead_code)]
pub fn result_block(title: &str, href: &str, description: &str) -> String {
    format!(
        r#"<div class="g"><div class="tF2Cxc">
    <div class="yuRUbf"><a href="{href}"><h3 class="LC20lb MBeuO DKV0Md">{title}</h3></a></div>
    <div class="VwiC3b yXK7lf">{description}</div>
</div></div>"#
    )
}

/// Extractor returning a canned outcome and recording the queries it saw
#[allow(dead_code)]
pub struct StubExtractor {
    outcome: Result<Vec<ResultRecord>, ExtractionError>,
    pub seen: Mutex<Vec<(String, usize)>>,
}

#[allow(dead_code)]
impl StubExtractor {
    pub fn returning(records: Vec<ResultRecord>) -> Self {
        Self {
            outcome: Ok(records),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ExtractionError) -> Self {
        Self {
            outcome: Err(error),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl RecordExtractor for StubExtractor {
    async fn extract(
        &self,
        query: &SearchQuery,
        cap: usize,
    ) -> Result<Vec<ResultRecord>, ExtractionError> {
        self.seen
            .lock()
            .unwrap()
            .push((query.as_str().to_string(), cap));
        self.outcome
            .clone()
            .map(|records| records.into_iter().take(cap).collect())
    }
}
