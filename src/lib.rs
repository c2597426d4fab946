//! contract-keywords - keyword candidates for procurement contract titles
//!
//! Breaks short, irregular contract titles into the fragments worth indexing
//! and keeps a cumulative count of every fragment seen across runs.
//!
//! # Quick Start
//!
//! ```
//! use contract_keywords::tokenize;
//!
//! let keywords = tokenize("'09년 전산장비(PC) 정비용역").unwrap();
//! assert!(keywords.contains("PC"));
//! assert!(keywords.contains("정비용역"));
//! ```
//!
//! # Architecture
//!
//! - `keyword-core`: errors, limits and `keywords.toml` config
//! - `keyword-tokenizer`: normalizer, recursive decomposer, candidate filter
//! - `keyword-store`: CSV title source, parallel counting, persistent store
//!
//! The `ckw` binary in `keyword-cli` drives all three.

pub use keyword_core::{Error, KeywordConfig, LimitError, Limits, Result};
pub use keyword_store::{CsvTitleSource, ExtractStats, Extractor, KeywordCounter, KeywordStore};
pub use keyword_tokenizer::{
    normalize, strip_punctuation, tokenize, CandidateFilter, KeywordSet, Tokenizer,
};
