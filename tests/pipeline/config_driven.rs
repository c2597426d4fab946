//! Tokenizer behaviour driven by `keywords.toml`.

use crate::common::*;
use contract_keywords::{tokenize, Error, KeywordConfig, Tokenizer};

#[test]
fn default_file_matches_default_config() {
    let ws = TestWorkspace::new();
    let config = ws.config(KeywordConfig::default_toml());
    assert_eq!(config, KeywordConfig::default());
}

#[test]
fn facade_tokenize_uses_defaults() {
    let title = "1·2·3호선 냉난방·위생 유지관리 용역(1차)";
    assert_eq!(
        tokenize(title).unwrap(),
        Tokenizer::from_config(&KeywordConfig::default())
            .tokenize(title)
            .unwrap()
    );
}

#[test]
fn configured_stop_words_replace_defaults() {
    let ws = TestWorkspace::new();
    let config = ws.config("stop_words = [\"용역\"]\n");
    let tokenizer = Tokenizer::from_config(&config);

    assert_eq!(
        keywords(&tokenizer, "시설물 유지관리 용역"),
        vec!["시설물", "유지관리"]
    );
    assert_eq!(keywords(&tokenizer, "가 및 나"), vec!["가", "나", "및"]);
}

#[test]
fn configured_keyword_length_bound() {
    let ws = TestWorkspace::new();
    let config = ws.config("max_keyword_chars = 3\n");
    let tokenizer = Tokenizer::from_config(&config);

    assert_eq!(keywords(&tokenizer, "시설물 유지관리"), vec!["시설물"]);
}

#[test]
fn configured_title_bound_rejects_during_extract() {
    let ws = TestWorkspace::new();
    let config = ws.config("max_title_chars = 8\n");
    let csv = ws.write("contracts.csv", "a,시설물 유지관리 용역 공사\nb,선반\n");

    let tokenizer = Tokenizer::from_config(&config);
    assert!(matches!(
        tokenizer.tokenize("시설물 유지관리 용역 공사"),
        Err(Error::Capacity { .. })
    ));

    let stats = ws.extract(&csv, 1, &config);
    assert_eq!(stats.titles, 2);
    assert_eq!(stats.rejected, 1);
    assert_eq!(ws.export(&config), "선반,1\n");
}

#[test]
fn zero_bound_is_config_error() {
    let ws = TestWorkspace::new();
    let path = ws.write("keywords.toml", "max_depth = 0\n");
    assert!(matches!(
        KeywordConfig::from_file(&path),
        Err(Error::Config(_))
    ));
}
