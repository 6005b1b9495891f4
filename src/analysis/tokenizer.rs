//! Token stream over result titles and descriptions.
//!
//! Dates and numbers dominate raw counts on results pages without carrying
//! lexical signal, so they are filtered out of the stream before any phrase
//! is formed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::web_search::ResultRecord;

/// `12 mar 2023` style dates.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2} [a-z]{3,4} \d{4}").expect("date pattern is valid"));

/// Join title and description of every record, in record order, lowercased.
#[must_use]
pub fn text_blob(records: &[ResultRecord]) -> String {
    records
        .iter()
        .flat_map(|record| [record.title.as_str(), record.description.as_str()])
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether a single token survives the noise filter.
#[must_use]
pub fn is_lexical_token(token: &str) -> bool {
    // Length in UTF-16 units: a lone astral character (emoji) counts as two.
    if token.encode_utf16().count() <= 1 {
        return false;
    }
    // Covers all-digit tokens too.
    if token.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    !DATE_PATTERN.is_match(token)
}

/// Split the records' text into filtered lowercase tokens.
#[must_use]
pub fn tokenize(records: &[ResultRecord]) -> Vec<String> {
    text_blob(records)
        .split_whitespace()
        .filter(|token| is_lexical_token(token))
        .map(str::to_owned)
        .collect()
}
