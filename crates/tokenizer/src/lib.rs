//! Keyword candidate extraction for contract titles
//!
//! Procurement contract names are short and irregular: `'09년 전산장비(PC)
//! 정비용역`, `1·2·3호선 냉난방·위생 유지관리 용역(1차)`. This crate breaks
//! such a title into the fragments worth indexing by repeatedly peeling off
//! structural markers and recursing into what remains.
//!
//! - [`normalize`]: per-call cleanup (entities, `00` prefix, `·`, brackets)
//! - [`Tokenizer::decompose`]: the recursive rule cascade
//! - [`CandidateFilter`]: punctuation strip, stop words, dedup, length bound
//!
//! Candidates are lexical only. Nothing here ranks or validates them.
//!
//! # Usage
//!
//! ```
//! use keyword_tokenizer::tokenize;
//!
//! let keywords = tokenize("120다산콜센터").unwrap();
//! assert!(keywords.contains("다산콜센터"));
//! assert!(keywords.contains("120"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decompose;
pub mod filter;
pub mod normalize;

use std::collections::BTreeSet;

use decompose::Decomposer;
use keyword_core::{Error, KeywordConfig, Limits, Result};
use once_cell::sync::Lazy;
use tracing::debug;

pub use filter::{strip_punctuation, CandidateFilter};
pub use normalize::normalize;

/// Deduplicated keyword candidates in sorted order
pub type KeywordSet = BTreeSet<String>;

static DEFAULT_TOKENIZER: Lazy<Tokenizer> = Lazy::new(Tokenizer::new);

/// Tokenize a title with the default stop words and limits.
pub fn tokenize(title: &str) -> Result<KeywordSet> {
    DEFAULT_TOKENIZER.tokenize(title)
}

/// Title tokenizer
///
/// Holds no state between calls; one instance can be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    filter: CandidateFilter,
    limits: Limits,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Tokenizer with default stop words and limits
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Tokenizer with default stop words and the given limits
    pub fn with_limits(limits: Limits) -> Self {
        let filter = CandidateFilter::new().with_max_chars(limits.max_keyword_chars);
        Self { filter, limits }
    }

    /// Tokenizer described by a `keywords.toml` config
    pub fn from_config(config: &KeywordConfig) -> Self {
        let limits = config.limits();
        let filter = CandidateFilter::new()
            .with_stop_words(config.stop_words.iter().cloned())
            .with_max_chars(limits.max_keyword_chars);
        Self { filter, limits }
    }

    /// Extract the keyword set of one raw title.
    ///
    /// Keywords come back trimmed, since the store counts them by trimmed
    /// string. A keyword whose edge punctuation sat behind whitespace (`a- `)
    /// is stripped again after trimming; any that end up blank or a stop word
    /// are dropped.
    ///
    /// # Errors
    ///
    /// `Error::Capacity` if the title is longer than `max_title_chars` or its
    /// markers nest deeper than `max_depth`.
    ///
    /// # Example
    ///
    /// ```
    /// use keyword_tokenizer::Tokenizer;
    ///
    /// let keywords = Tokenizer::new().tokenize("선반, NC").unwrap();
    /// assert_eq!(keywords.into_iter().collect::<Vec<_>>(), vec!["NC", "선반"]);
    /// ```
    pub fn tokenize(&self, title: &str) -> Result<KeywordSet> {
        if let Err(e) = self.limits.validate_title(title) {
            debug!(target: "ckw::tokenizer", error = %e, "Title rejected");
            return Err(Error::from(e));
        }

        let raw = self.decompose(title, false)?;
        Ok(raw
            .into_iter()
            .map(|k| {
                let trimmed = k.trim();
                if trimmed.len() == k.len() {
                    k
                } else {
                    // Whitespace hid an edge from the filter's strip.
                    strip_punctuation(trimmed).trim().to_string()
                }
            })
            .filter(|k| self.filter.accepts(k) && !self.filter.is_stop_word(k))
            .collect())
    }

    /// Run the recursive decomposition directly.
    ///
    /// `opaque` keeps the top-level string from being split on whitespace
    /// when no structural marker applies; recursive calls never inherit it.
    /// Results are not trimmed.
    pub fn decompose(&self, s: &str, opaque: bool) -> Result<KeywordSet> {
        Decomposer::new(&self.filter, &self.limits)
            .decompose(s, opaque)
            .map_err(|e| {
                debug!(target: "ckw::tokenizer", error = %e, "Decomposition aborted");
                e
            })
    }
}
