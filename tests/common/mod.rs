//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use contract_keywords::{
    CsvTitleSource, ExtractStats, Extractor, KeywordConfig, KeywordCounter, KeywordStore,
    Tokenizer,
};
use tempfile::TempDir;

// ============================================================================
// TestWorkspace - temp directory holding config, CSV input and store
// ============================================================================

/// A scratch directory laid out like a working directory of `ckw`.
pub struct TestWorkspace {
    pub dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` inside the workspace.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Write a `keywords.toml` and load it back.
    pub fn config(&self, toml: &str) -> KeywordConfig {
        let path = self.write("keywords.toml", toml);
        KeywordConfig::from_file(&path).expect("Failed to load config")
    }

    /// Store path resolved against the workspace.
    pub fn store_path(&self, config: &KeywordConfig) -> PathBuf {
        self.path().join(&config.store_path)
    }

    /// One full `extract` run: read, count, merge, flush.
    pub fn extract(&self, csv: &Path, field: usize, config: &KeywordConfig) -> ExtractStats {
        let store = KeywordStore::open(self.store_path(config)).expect("Failed to open store");
        let tokenizer = Tokenizer::from_config(config);
        let counter = KeywordCounter::new();
        let source =
            CsvTitleSource::open(csv, field, config.has_headers).expect("Failed to open CSV");
        let stats = Extractor::new(&tokenizer)
            .with_progress_interval(config.progress_interval)
            .run(source, &counter)
            .expect("Extraction failed");
        store.merge(&counter);
        store.flush().expect("Failed to flush store");
        stats
    }

    /// Exported CSV text of the store.
    pub fn export(&self, config: &KeywordConfig) -> String {
        let store = KeywordStore::open(self.store_path(config)).expect("Failed to open store");
        let mut out = Vec::new();
        store.export_csv(&mut out).expect("Export failed");
        String::from_utf8(out).expect("Export is not UTF-8")
    }
}

/// Sorted keyword list, for readable assertions.
pub fn keywords(tokenizer: &Tokenizer, title: &str) -> Vec<String> {
    tokenizer
        .tokenize(title)
        .expect("Tokenize failed")
        .into_iter()
        .collect()
}
