//! Tests for the search configuration builder

use serpscope::{SearchConfig, SearchError};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_builder_defaults() {
    let config = SearchConfig::builder().build().unwrap();

    assert_eq!(config.result_cap(), 10);
    assert_eq!(config.search_url(), "https://www.google.com/search");
    assert!(config.headless());
    assert_eq!(config.chrome_executable(), None);
    assert_eq!(config.launch_timeout_secs(), 60);
    assert_eq!(config.navigation_timeout_secs(), 30);
    assert_eq!(config.scroll_step_px(), 100);
    assert_eq!(config.scroll_delay(), Duration::from_millis(100));
    assert_eq!(config.max_scroll_steps(), 500);
    assert_eq!(config.scroll_timeout(), Duration::from_secs(30));
    assert_eq!(config.snapshot_timeout_secs(), 10);
}

#[test]
fn test_default_matches_builder() {
    assert_eq!(SearchConfig::default(), SearchConfig::builder().build().unwrap());
}

#[test]
fn test_builder_with_all_fields() {
    let temp_dir = TempDir::new().unwrap();
    let chrome = temp_dir.path().join("chrome");

    let config = SearchConfig::builder()
        .result_cap(30)
        .search_url("https://www.google.com.vn/search")
        .headless(false)
        .chrome_executable(Some(chrome.clone()))
        .launch_timeout_secs(90)
        .navigation_timeout_secs(45)
        .scroll_step_px(250)
        .scroll_delay_ms(50)
        .max_scroll_steps(40)
        .scroll_timeout_secs(20)
        .snapshot_timeout_secs(5)
        .build()
        .unwrap();

    assert_eq!(config.result_cap(), 30);
    assert_eq!(config.search_url(), "https://www.google.com.vn/search");
    assert!(!config.headless());
    assert_eq!(config.chrome_executable(), Some(chrome.as_path()));
    assert_eq!(config.launch_timeout_secs(), 90);
    assert_eq!(config.navigation_timeout_secs(), 45);
    assert_eq!(config.scroll_step_px(), 250);
    assert_eq!(config.scroll_delay(), Duration::from_millis(50));
    assert_eq!(config.max_scroll_steps(), 40);
    assert_eq!(config.scroll_timeout(), Duration::from_secs(20));
    assert_eq!(config.snapshot_timeout_secs(), 5);
}

#[test]
fn test_zero_values_are_rejected() {
    let cases = [
        ("result_cap", SearchConfig::builder().result_cap(0).build()),
        ("scroll_step_px", SearchConfig::builder().scroll_step_px(0).build()),
        ("max_scroll_steps", SearchConfig::builder().max_scroll_steps(0).build()),
        ("launch_timeout_secs", SearchConfig::builder().launch_timeout_secs(0).build()),
        (
            "navigation_timeout_secs",
            SearchConfig::builder().navigation_timeout_secs(0).build(),
        ),
        ("scroll_timeout_secs", SearchConfig::builder().scroll_timeout_secs(0).build()),
        ("snapshot_timeout_secs", SearchConfig::builder().snapshot_timeout_secs(0).build()),
    ];

    for (field, result) in cases {
        match result {
            Err(SearchError::Config(message)) => {
                assert!(message.contains(field), "{field}: {message}");
            }
            other => panic!("{field}: expected config error, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_search_url_is_rejected() {
    let err = SearchConfig::builder()
        .search_url("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(err, SearchError::Config(_)));
}
