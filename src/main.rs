//! serpscope: run one search from the command line.
//!
//! Prints the search response as JSON on stdout; logs go to stderr.
//! Exit code 2 means the request itself was bad, 1 means the search failed.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use serpscope::{
    BrowserExtractor, HighlightMarker, HighlightPolicy, Keyword, SearchConfig, SearchPipeline,
    SelectedKeywords, SelectorSet, export_rows, keywords_from_json,
};

#[derive(Parser)]
#[command(name = "serpscope")]
#[command(about = "Extract a search results page, rank its bigrams and match keywords against result URLs")]
#[command(version)]
struct Cli {
    /// Search query
    query: String,

    /// JSON array of rows with a "Keyword" column
    #[arg(short, long)]
    keywords: Option<PathBuf>,

    /// Maximum number of results to extract
    #[arg(long, env = "SERPSCOPE_CAP", default_value_t = serpscope::utils::DEFAULT_RESULT_CAP)]
    cap: usize,

    /// Seconds to wait for the results page to load
    #[arg(long, default_value_t = serpscope::utils::DEFAULT_NAVIGATION_TIMEOUT_SECS)]
    navigation_timeout: u64,

    /// Seconds allowed for progressive loading
    #[arg(long, default_value_t = serpscope::utils::DEFAULT_SCROLL_TIMEOUT_SECS)]
    scroll_timeout: u64,

    /// Chrome/Chromium binary (otherwise discovered or downloaded)
    #[arg(long, env = "CHROMIUM_PATH")]
    chrome: Option<PathBuf>,

    /// Show the browser window
    #[arg(long)]
    headful: bool,

    /// Add highlighted result URLs to the output
    #[arg(long)]
    highlight: bool,

    /// Highlight without nesting overlapping keywords
    #[arg(long, requires = "highlight")]
    first_match_wins: bool,

    /// Write matched keywords as "Keyword" rows to this JSON file
    #[arg(long)]
    export_matched: Option<PathBuf>,
}

fn load_keywords(path: Option<&PathBuf>) -> Result<Vec<Keyword>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword file {}", path.display()))?;
    let keywords = keywords_from_json(&json)?;
    tracing::info!("Loaded {} keywords from {}", keywords.len(), path.display());
    Ok(keywords)
}

fn build_config(cli: &Cli) -> Result<SearchConfig> {
    Ok(SearchConfig::builder()
        .result_cap(cli.cap)
        .navigation_timeout_secs(cli.navigation_timeout)
        .scroll_timeout_secs(cli.scroll_timeout)
        .chrome_executable(cli.chrome.clone())
        .headless(!cli.headful)
        .build()?)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "serpscope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (config, keywords) = match build_config(&cli)
        .and_then(|config| Ok((config, load_keywords(cli.keywords.as_ref())?)))
    {
        Ok(setup) => setup,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let extractor = BrowserExtractor::new(config.clone(), SelectorSet::google());
    let pipeline = SearchPipeline::new(extractor, config);

    let response = match pipeline.search(&cli.query, &keywords).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Search failed: {e}");
            return ExitCode::from(if e.is_client_error() { 2 } else { 1 });
        }
    };

    match emit(&cli, &response) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn emit(cli: &Cli, response: &serpscope::SearchResponse) -> Result<()> {
    let mut output = serde_json::to_value(response).context("Failed to encode response")?;

    if cli.highlight {
        let policy = if cli.first_match_wins {
            HighlightPolicy::FirstMatchWins
        } else {
            HighlightPolicy::Nested
        };
        output["highlighted_urls"] =
            json!(response.highlighted_urls(&HighlightMarker::default(), policy));
    }

    if let Some(path) = &cli.export_matched {
        let selected: SelectedKeywords = response.matched_keywords.iter().cloned().collect();
        let rows = serde_json::to_string_pretty(&export_rows(&selected))?;
        std::fs::write(path, rows)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Exported {} keywords to {}", selected.len(), path.display());
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
