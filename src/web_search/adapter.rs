//! Provider-specific DOM extraction
//!
//! The pipeline only knows how to render a page; which elements hold the
//! results is the adapter's business, so a provider markup change is a new
//! [`SelectorSet`] rather than a pipeline change.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::types::{RenderedDocument, ResultRecord, SearchQuery};
use crate::error::{ExtractionError, SearchError};

/// Turns a rendered results page into result records.
///
/// Implementations must be `Send + Sync`: one adapter serves concurrent
/// searches.
pub trait ExtractionAdapter: Send + Sync {
    /// Extract at most `cap` records in document order.
    ///
    /// A missing title, link or description yields `""` for that field; a
    /// container is never skipped for lacking one.
    fn extract_records(&self, document: &RenderedDocument, cap: usize) -> Vec<ResultRecord>;

    /// Build the results-page URL for `query` on top of the endpoint `base`.
    ///
    /// # Errors
    ///
    /// `ExtractionError::Navigation` if `base` is not a valid URL.
    fn search_url(&self, base: &str, query: &SearchQuery) -> Result<Url, ExtractionError> {
        let mut url = Url::parse(base)
            .map_err(|e| ExtractionError::Navigation(format!("invalid search URL '{base}': {e}")))?;
        url.set_query(Some(&format!("q={}", query.to_query_param())));
        Ok(url)
    }

    /// Whether the provider served an interstitial instead of results.
    ///
    /// Only the URL path is inspected; the query string echoes user input.
    fn is_blocked(&self, document: &RenderedDocument) -> bool {
        document
            .url
            .as_deref()
            .and_then(|url| Url::parse(url).ok())
            .is_some_and(|url| url.path().starts_with("/sorry/"))
    }
}

/// CSS selectors locating result containers and their fields.
#[derive(Debug, Clone)]
pub struct SelectorSet {
    container: Selector,
    title: Selector,
    link: Selector,
    description: Selector,
}

impl SelectorSet {
    /// Parse a selector set; `title`, `link` and `description` are matched
    /// inside each container.
    ///
    /// # Errors
    ///
    /// `SearchError::Config` naming the selector that failed to parse.
    pub fn new(
        container: &str,
        title: &str,
        link: &str,
        description: &str,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            container: parse_selector("container", container)?,
            title: parse_selector("title", title)?,
            link: parse_selector("link", link)?,
            description: parse_selector("description", description)?,
        })
    }

    /// Google's organic result markup.
    #[must_use]
    pub fn google() -> Self {
        Self::new(".tF2Cxc", ".DKV0Md", ".yuRUbf a", ".VwiC3b")
            .expect("built-in Google selectors are valid")
    }

    fn record_from(&self, container: ElementRef<'_>, base: Option<&Url>) -> ResultRecord {
        let title = container
            .select(&self.title)
            .next()
            .map(rendered_text)
            .unwrap_or_default();

        let url = container
            .select(&self.link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(|href| resolve_href(href, base))
            .unwrap_or_default();

        let description = container
            .select(&self.description)
            .next()
            .map(rendered_text)
            .unwrap_or_default();

        ResultRecord {
            title,
            url,
            description,
        }
    }
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self::google()
    }
}

impl ExtractionAdapter for SelectorSet {
    fn extract_records(&self, document: &RenderedDocument, cap: usize) -> Vec<ResultRecord> {
        let html = Html::parse_document(&document.html);
        let base = document.url.as_deref().and_then(|u| Url::parse(u).ok());

        html.select(&self.container)
            .take(cap)
            .map(|container| self.record_from(container, base.as_ref()))
            .collect()
    }
}

fn parse_selector(name: &str, css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css)
        .map_err(|e| SearchError::Config(format!("invalid {name} selector '{css}': {e}")))
}

/// Text content with whitespace runs collapsed, close to what `innerText`
/// reports for inline result markup.
fn rendered_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Absolute form of `href`, as the DOM `href` property would report it.
fn resolve_href(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    match base.and_then(|base| base.join(href).ok()) {
        Some(resolved) => resolved.into(),
        None => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_block(title: &str, href: &str, description: &str) -> String {
        format!(
            r#"<div class="tF2Cxc"><div class="yuRUbf"><a href="{href}"><h3 class="LC20lb DKV0Md">{title}</h3></a></div><div class="VwiC3b">{description}</div></div>"#
        )
    }

    #[test]
    fn extracts_fields_from_google_markup() {
        let html = format!(
            "<html><body>{}</body></html>",
            result_block("Hanoi  Hotels", "https://example.com/hanoi-hotel", "Best <b>hotels</b>\n in Hanoi")
        );
        let doc = RenderedDocument::new(Some("https://www.google.com/search?q=x".into()), html);
        let records = SelectorSet::google().extract_records(&doc, 10);
        assert_eq!(
            records,
            vec![ResultRecord::new(
                "Hanoi Hotels",
                "https://example.com/hanoi-hotel",
                "Best hotels in Hanoi"
            )]
        );
    }

    #[test]
    fn missing_parts_become_empty_strings() {
        let html = r#"<div class="tF2Cxc"><h3 class="DKV0Md">Only title</h3></div>"#;
        let doc = RenderedDocument::new(None, html);
        let records = SelectorSet::google().extract_records(&doc, 10);
        assert_eq!(records, vec![ResultRecord::new("Only title", "", "")]);
    }

    #[test]
    fn relative_href_resolves_against_page_url() {
        let html = result_block("t", "/url?q=https://example.com", "d");
        let doc = RenderedDocument::new(Some("https://www.google.com/search?q=x".into()), html);
        let records = SelectorSet::google().extract_records(&doc, 1);
        assert_eq!(records[0].url, "https://www.google.com/url?q=https://example.com");
    }

    #[test]
    fn search_url_uses_plus_separated_words() {
        let query = SearchQuery::parse("hanoi hotels").unwrap();
        let url = SelectorSet::google()
            .search_url("https://www.google.com/search", &query)
            .unwrap();
        assert_eq!(url.as_str(), "https://www.google.com/search?q=hanoi+hotels");
    }

    #[test]
    fn sorry_page_is_blocked() {
        let adapter = SelectorSet::google();
        let blocked = RenderedDocument::new(Some("https://www.google.com/sorry/index".into()), "");
        let fine = RenderedDocument::new(Some("https://www.google.com/search?q=x".into()), "");
        assert!(adapter.is_blocked(&blocked));
        assert!(!adapter.is_blocked(&fine));
    }

    #[test]
    fn query_text_never_marks_page_blocked() {
        let adapter = SelectorSet::google();
        for url in [
            "https://www.google.com/search?q=captcha+solver",
            "https://www.google.com/search?q=%2Fsorry%2F+page",
            "https://www.google.com/search?q=x#/sorry/",
        ] {
            let doc = RenderedDocument::new(Some(url.into()), "");
            assert!(!adapter.is_blocked(&doc), "{url} reported as blocked");
        }
        assert!(!adapter.is_blocked(&RenderedDocument::new(None, "")));
    }

    #[test]
    fn invalid_selector_is_config_error() {
        let err = SelectorSet::new("div[", "a", "a", "p").unwrap_err();
        assert!(err.to_string().contains("container selector"));
    }
}
