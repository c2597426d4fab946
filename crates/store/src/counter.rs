//! Per-run keyword frequency counter
//!
//! Tokenization runs on a rayon pool, so the counter takes `&self` and is
//! safe to share between workers. Each recorded title adds one to every
//! keyword in its set; a keyword appearing twice in one title still counts
//! once, because the set already collapsed it.

use dashmap::DashMap;
use keyword_tokenizer::KeywordSet;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrent keyword occurrence counter
#[derive(Debug, Default)]
pub struct KeywordCounter {
    counts: DashMap<String, u64>,
    titles: AtomicU64,
}

impl KeywordCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one title's keywords.
    pub fn record(&self, keywords: &KeywordSet) {
        self.titles.fetch_add(1, Ordering::Relaxed);
        for keyword in keywords {
            if let Some(mut count) = self.counts.get_mut(keyword.as_str()) {
                *count += 1;
                continue;
            }
            *self.counts.entry(keyword.clone()).or_insert(0) += 1;
        }
    }

    /// Occurrences of `keyword` so far
    pub fn get(&self, keyword: &str) -> u64 {
        self.counts.get(keyword).map_or(0, |c| *c)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of titles recorded
    pub fn titles(&self) -> u64 {
        self.titles.load(Ordering::Relaxed)
    }

    /// Sorted copy of the counts
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
