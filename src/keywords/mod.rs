//! Keyword normalization, URL matching and highlighting
//!
//! The keyword list and the selected set are owned by the caller; everything
//! here is a pure function over explicit collections.

pub mod highlight;
pub mod keyword;
pub mod matcher;
pub mod normalize;
pub mod rows;
pub mod selection;

pub use highlight::{HighlightMarker, HighlightPolicy, highlight, highlight_with};
pub use keyword::Keyword;
pub use matcher::{match_keywords, url_contains};
pub use normalize::normalize;
pub use rows::{KeywordRow, export_rows, import_rows, keywords_from_json};
pub use selection::SelectedKeywords;
