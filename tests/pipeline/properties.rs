//! Accumulation properties over random title batches.

use std::collections::BTreeMap;

use contract_keywords::{tokenize, Extractor, KeywordCounter, KeywordStore, Result, Tokenizer};
use proptest::prelude::*;
use tempfile::TempDir;

const TITLE: &str = r"[가나다 a0-9,()\-]{0,24}";

fn expected_counts(titles: &[String]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for title in titles {
        for keyword in tokenize(title).unwrap() {
            *counts.entry(keyword).or_insert(0) += 1;
        }
    }
    counts
}

fn run_into(store: &KeywordStore, titles: &[String]) {
    let tokenizer = Tokenizer::new();
    let counter = KeywordCounter::new();
    let input: Vec<Result<String>> = titles.iter().cloned().map(Ok).collect();
    Extractor::new(&tokenizer)
        .with_batch_size(3)
        .run(input, &counter)
        .unwrap();
    store.merge(&counter);
    store.flush().unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn stored_count_is_titles_containing_keyword(
        titles in proptest::collection::vec(TITLE, 0..12)
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keywords.json");
        let expected = expected_counts(&titles);

        {
            let store = KeywordStore::open(&path).unwrap();
            run_into(&store, &titles);
        }
        let store = KeywordStore::open(&path).unwrap();
        run_into(&store, &titles);

        prop_assert_eq!(store.len(), expected.len());
        for (keyword, n) in &expected {
            prop_assert_eq!(store.get(keyword), 2 * n);
        }
    }
}
