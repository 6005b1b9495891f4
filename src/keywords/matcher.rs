//! Keyword-to-URL matching.

use super::keyword::Keyword;
use crate::web_search::ResultRecord;

/// Case-insensitive substring test of a formatted keyword against one URL.
///
/// An empty keyword matches nothing.
#[must_use]
pub fn url_contains(url: &str, formatted: &str) -> bool {
    !formatted.is_empty() && url.to_lowercase().contains(&formatted.to_lowercase())
}

/// Keywords whose formatted value occurs in at least one record URL.
///
/// Matching is by substring, not by path segment, so `hanoi` matches
/// `/Hanoi-travel`. Input order is preserved.
#[must_use]
pub fn match_keywords(keywords: &[Keyword], records: &[ResultRecord]) -> Vec<Keyword> {
    let urls: Vec<String> = records.iter().map(|r| r.url.to_lowercase()).collect();

    keywords
        .iter()
        .filter(|keyword| {
            let needle = keyword.formatted.to_lowercase();
            !needle.is_empty() && urls.iter().any(|url| url.contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> ResultRecord {
        ResultRecord::new("", url, "")
    }

    #[test]
    fn matches_case_insensitively() {
        let keywords = vec![Keyword::new("hanoi")];
        let records = vec![with_url("https://example.com/Hanoi-travel")];
        assert_eq!(match_keywords(&keywords, &records), keywords);
    }

    #[test]
    fn matches_mid_segment() {
        assert!(url_contains("https://example.com/besthanoitours", "hanoi"));
    }

    #[test]
    fn hyphenated_form_does_not_fuzzy_match() {
        let keywords = vec![Keyword::new("Hà Nội")];
        let records = vec![with_url("https://example.com/hanoi-hotel")];
        assert!(match_keywords(&keywords, &records).is_empty());
    }

    #[test]
    fn preserves_keyword_order() {
        let keywords = vec![
            Keyword::new("travel"),
            Keyword::new("missing"),
            Keyword::new("example"),
        ];
        let records = vec![with_url("https://example.com/travel")];
        let matched = match_keywords(&keywords, &records);
        assert_eq!(matched, vec![keywords[0].clone(), keywords[2].clone()]);
    }

    #[test]
    fn empty_keyword_never_matches() {
        let keywords = vec![Keyword::new("")];
        let records = vec![with_url("https://example.com")];
        assert!(match_keywords(&keywords, &records).is_empty());
        assert!(!url_contains("https://example.com", ""));
    }

    #[test]
    fn no_records_no_matches() {
        assert!(match_keywords(&[Keyword::new("hanoi")], &[]).is_empty());
    }
}
