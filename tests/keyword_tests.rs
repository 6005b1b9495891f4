//! Keyword normalization, matching, selection and export

use proptest::prelude::*;
use serpscope::{
    Keyword, KeywordRow, ResultRecord, SearchError, SelectedKeywords, export_rows, highlight,
    import_rows, keywords_from_json, match_keywords, normalize,
};
use tempfile::TempDir;

proptest! {
    #[test]
    fn normalize_is_idempotent(
        raw in "[a-zA-Z0-9 \t\n_.àáảãạăằắẳẵặâầấẩẫậđĐèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵÀÁÂÃÈÉÊÌÍÒÓÔÕÙÚĂƠƯỲÝ-]{0,40}"
    ) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_form_has_no_whitespace_or_uppercase(raw in "[a-zA-ZđĐàÁệỆ \t]{0,30}") {
        let formatted = normalize(&raw);
        prop_assert!(!formatted.chars().any(char::is_whitespace));
        prop_assert!(!formatted.chars().any(char::is_uppercase));
    }

    #[test]
    fn keyword_in_its_own_url_always_matches(word in "[a-z]{2,12}") {
        let records = vec![ResultRecord::new("", format!("https://example.com/{}-guide", word.to_uppercase()), "")];
        let keywords = vec![Keyword::new(word.as_str())];
        prop_assert_eq!(match_keywords(&keywords, &records), keywords);
    }
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("Điện Biên"), "dien-bien");
    assert_eq!(normalize("Hà Nội"), "ha-noi");
    assert_eq!(normalize("Đà   Nẵng"), "da-nang");
}

#[test]
fn test_match_is_case_insensitive_substring() {
    let records = vec![ResultRecord::new("", "https://example.com/Hanoi-travel", "")];
    let keywords = vec![Keyword::new("hanoi")];
    assert_eq!(keywords[0].formatted, "hanoi");
    assert_eq!(match_keywords(&keywords, &records), keywords);
}

#[test]
fn test_import_select_export_round() {
    let rows: Vec<KeywordRow> =
        serde_json::from_str(r#"[{"Keyword":"Hà Nội"},{"Keyword":"Sa Pa"},{"Keyword":""}]"#)
            .unwrap();
    let keywords = import_rows(rows);
    assert_eq!(keywords.len(), 2);

    let mut selected = SelectedKeywords::new();
    assert!(selected.insert(keywords[1].clone()));
    assert!(selected.insert(keywords[0].clone()));
    assert!(!selected.insert(keywords[1].clone()));

    let exported = serde_json::to_value(export_rows(&selected)).unwrap();
    assert_eq!(
        exported,
        serde_json::json!([{"Keyword": "Sa Pa"}, {"Keyword": "Hà Nội"}])
    );
}

#[test]
fn test_highlight_matched_keywords_in_url() {
    let records = vec![ResultRecord::new("", "https://vn.example.com/sa-pa/Sa-Pa-treks", "")];
    let matched = match_keywords(&[Keyword::new("Sa Pa"), Keyword::new("Hà Nội")], &records);
    assert_eq!(
        highlight(&records[0].url, &matched),
        "https://vn.example.com/<mark>sa-pa</mark>/<mark>Sa-Pa</mark>-treks"
    );
}

#[test]
fn test_keyword_file_round_trip_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keywords.json");
    std::fs::write(
        &path,
        r#"[{"Keyword": "Hà Nội"}, {"Other": "ignored"}, {"Keyword": "Điện Biên"}]"#,
    )
    .unwrap();

    let keywords = keywords_from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let formatted: Vec<&str> = keywords.iter().map(|k| k.formatted.as_str()).collect();
    assert_eq!(formatted, vec!["ha-noi", "dien-bien"]);
}

#[test]
fn test_malformed_keyword_file_is_config_error() {
    let err = keywords_from_json(r#"{"Keyword": "not an array"}"#).unwrap_err();
    assert!(matches!(err, SearchError::Config(_)));
}
