//! Tabular keyword import/export.
//!
//! Spreadsheet files are read and written elsewhere; this module only deals
//! in rows carrying a `Keyword` column.

use serde::{Deserialize, Serialize};

use super::keyword::Keyword;
use super::selection::SelectedKeywords;
use crate::error::SearchError;

/// One spreadsheet row with a `Keyword` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRow {
    #[serde(rename = "Keyword", default)]
    pub keyword: Option<String>,
}

impl KeywordRow {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
        }
    }
}

/// Normalize each row into a [`Keyword`], in row order.
///
/// Rows with a missing or blank `Keyword` cell are skipped.
#[must_use]
pub fn import_rows<I>(rows: I) -> Vec<Keyword>
where
    I: IntoIterator<Item = KeywordRow>,
{
    rows.into_iter()
        .filter_map(|row| row.keyword)
        .filter(|cell| !cell.trim().is_empty())
        .map(Keyword::new)
        .collect()
}

/// Rows for the selected set; only the original text is exported.
#[must_use]
pub fn export_rows(selected: &SelectedKeywords) -> Vec<KeywordRow> {
    selected
        .iter()
        .map(|keyword| KeywordRow::new(keyword.original.clone()))
        .collect()
}

/// Parse a JSON array of `{"Keyword": ...}` objects into keywords.
///
/// # Errors
///
/// Returns `SearchError::Config` if the document is not an array of rows.
pub fn keywords_from_json(json: &str) -> Result<Vec<Keyword>, SearchError> {
    let rows: Vec<KeywordRow> = serde_json::from_str(json)
        .map_err(|e| SearchError::Config(format!("invalid keyword rows: {e}")))?;
    Ok(import_rows(rows))
}
