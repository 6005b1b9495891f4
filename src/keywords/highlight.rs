//! Marking matched keywords inside a URL for display.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::keyword::Keyword;

/// Opening and closing marker wrapped around each occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMarker {
    pub open: String,
    pub close: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

/// How overlapping keyword occurrences are annotated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightPolicy {
    /// Each keyword is applied in turn to the already annotated string.
    ///
    /// A later keyword that occurs inside an earlier one's span wraps again,
    /// producing nested markers; a later keyword that straddles an inserted
    /// marker no longer matches there.
    #[default]
    Nested,
    /// Spans are computed on the raw URL; a span intersecting one already
    /// kept (earlier keyword, or earlier position for the same keyword) is
    /// dropped. Never nests.
    FirstMatchWins,
}

fn keyword_pattern(formatted: &str) -> Option<Regex> {
    if formatted.is_empty() {
        return None;
    }
    // An escaped literal always compiles.
    RegexBuilder::new(&regex::escape(formatted))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Highlight with the default `<mark>` marker and nested policy.
#[must_use]
pub fn highlight(url: &str, matched: &[Keyword]) -> String {
    highlight_with(url, matched, &HighlightMarker::default(), HighlightPolicy::Nested)
}

/// Wrap every case-insensitive occurrence of each keyword's formatted value.
#[must_use]
pub fn highlight_with(
    url: &str,
    matched: &[Keyword],
    marker: &HighlightMarker,
    policy: HighlightPolicy,
) -> String {
    match policy {
        HighlightPolicy::Nested => highlight_nested(url, matched, marker),
        HighlightPolicy::FirstMatchWins => highlight_first_match(url, matched, marker),
    }
}

fn highlight_nested(url: &str, matched: &[Keyword], marker: &HighlightMarker) -> String {
    let mut annotated = url.to_string();
    for keyword in matched {
        let Some(pattern) = keyword_pattern(&keyword.formatted) else {
            continue;
        };
        annotated = pattern
            .replace_all(&annotated, |caps: &regex::Captures<'_>| {
                format!("{}{}{}", marker.open, &caps[0], marker.close)
            })
            .into_owned();
    }
    annotated
}

fn highlight_first_match(url: &str, matched: &[Keyword], marker: &HighlightMarker) -> String {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for keyword in matched {
        let Some(pattern) = keyword_pattern(&keyword.formatted) else {
            continue;
        };
        for found in pattern.find_iter(url) {
            let (start, end) = (found.start(), found.end());
            if spans.iter().all(|&(s, e)| end <= s || start >= e) {
                spans.push((start, end));
            }
        }
    }
    spans.sort_unstable();

    let mut annotated = String::with_capacity(url.len() + spans.len() * 16);
    let mut cursor = 0;
    for (start, end) in spans {
        annotated.push_str(&url[cursor..start]);
        annotated.push_str(&marker.open);
        annotated.push_str(&url[start..end]);
        annotated.push_str(&marker.close);
        cursor = end;
    }
    annotated.push_str(&url[cursor..]);
    annotated
}
