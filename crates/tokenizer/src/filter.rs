//! Candidate filter
//!
//! Pass applied to the candidates gathered at each decomposition return point:
//! strip one leading then one trailing ASCII punctuation character, drop stop
//! words, deduplicate, drop blank or over-long candidates.

use crate::KeywordSet;
use keyword_core::limits::DEFAULT_MAX_KEYWORD_CHARS;
use keyword_core::DEFAULT_STOP_WORDS;
use rustc_hash::FxHashSet;

/// Strip at most one ASCII punctuation character from each end.
///
/// The trailing strip sees the result of the leading one, so a lone `"@"`
/// becomes empty.
#[inline]
pub fn strip_punctuation(candidate: &str) -> &str {
    let s = match candidate.chars().next() {
        Some(c) if c.is_ascii_punctuation() => &candidate[1..],
        _ => candidate,
    };
    match s.chars().next_back() {
        Some(c) if c.is_ascii_punctuation() => &s[..s.len() - 1],
        _ => s,
    }
}

/// Stop-word and length filter for keyword candidates
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    stop_words: FxHashSet<String>,
    max_chars: usize,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateFilter {
    /// Filter with the default stop words and a 50 character bound
    pub fn new() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            max_chars: DEFAULT_MAX_KEYWORD_CHARS,
        }
    }

    /// Replace the stop-word set
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the length bound
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Exact-match stop-word check
    #[inline]
    pub fn is_stop_word(&self, candidate: &str) -> bool {
        self.stop_words.contains(candidate)
    }

    /// Maximum keyword length in characters
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Non-blank after trimming and within the length bound
    #[inline]
    pub fn accepts(&self, candidate: &str) -> bool {
        !candidate.trim().is_empty() && candidate.chars().count() <= self.max_chars
    }

    /// Run the full pass over a batch of candidates.
    ///
    /// # Example
    ///
    /// ```
    /// use keyword_tokenizer::CandidateFilter;
    ///
    /// let filter = CandidateFilter::new();
    /// let out = filter.apply(vec!["'09년".to_string(), "및".to_string(), "@".to_string()]);
    /// assert_eq!(out.into_iter().collect::<Vec<_>>(), vec!["09년"]);
    /// ```
    pub fn apply<I>(&self, candidates: I) -> KeywordSet
    where
        I: IntoIterator<Item = String>,
    {
        candidates
            .into_iter()
            .filter_map(|c| {
                let stripped = strip_punctuation(&c);
                if self.is_stop_word(stripped) || !self.accepts(stripped) {
                    return None;
                }
                if stripped.len() == c.len() {
                    Some(c)
                } else {
                    Some(stripped.to_string())
                }
            })
            .collect()
    }
}
