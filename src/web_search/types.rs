//! Data structures for search extraction

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::utils::MAX_QUERY_LENGTH;

/// A validated, trimmed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a raw query before any browser resources are acquired.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidQuery` for empty, whitespace-only or overlong input.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SearchError::InvalidQuery(
                "search query cannot be empty or whitespace-only".into(),
            ));
        }

        if trimmed.len() > MAX_QUERY_LENGTH {
            return Err(SearchError::InvalidQuery(format!(
                "search query is too long ({} bytes, maximum {MAX_QUERY_LENGTH})",
                trimmed.len()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Query-string form: each word percent-encoded, words joined by `+`.
    #[must_use]
    pub fn to_query_param(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| urlencoding::encode(word).into_owned())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One search hit, in page-rank order within its result list.
///
/// Fields are never absent: anything the page did not provide is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultRecord {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl ResultRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Snapshot of a rendered page: final URL and serialized DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    /// URL the page ended up on, after redirects.
    pub url: Option<String>,
    pub html: String,
}

impl RenderedDocument {
    #[must_use]
    pub fn new(url: Option<String>, html: impl Into<String>) -> Self {
        Self {
            url,
            html: html.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_queries() {
        for raw in ["", "   ", "\t\n"] {
            let err = SearchQuery::parse(raw).unwrap_err();
            assert!(err.is_client_error(), "{raw:?} should be a client error");
        }
    }

    #[test]
    fn rejects_overlong_query() {
        let raw = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert!(matches!(
            SearchQuery::parse(&raw),
            Err(SearchError::InvalidQuery(_))
        ));
    }

    #[test]
    fn trims_query() {
        let query = SearchQuery::parse("  hanoi hotels ").unwrap();
        assert_eq!(query.as_str(), "hanoi hotels");
    }

    #[test]
    fn query_param_joins_words_with_plus() {
        let query = SearchQuery::parse("hanoi   hotels").unwrap();
        assert_eq!(query.to_query_param(), "hanoi+hotels");
    }

    #[test]
    fn query_param_encodes_reserved_and_unicode() {
        let query = SearchQuery::parse("c++ & Hà Nội").unwrap();
        assert_eq!(query.to_query_param(), "c%2B%2B+%26+H%C3%A0+N%E1%BB%99i");
    }
}
