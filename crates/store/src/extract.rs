//! Title → keyword counting run
//!
//! Titles are pulled from a source in batches and tokenized in parallel on
//! the rayon pool, each worker recording straight into the shared counter.
//! A title rejected for capacity is logged and skipped; any other error
//! (an unreadable CSV record) aborts the run before anything is merged.

use crate::counter::KeywordCounter;
use keyword_core::Result;
use keyword_tokenizer::Tokenizer;
use rayon::prelude::*;
use tracing::{info, warn};

/// Titles tokenized per parallel batch.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Outcome of one extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Titles pulled from the source
    pub titles: u64,
    /// Titles rejected for capacity
    pub rejected: u64,
    /// Distinct keywords in the counter at the end of the run
    pub keywords: usize,
}

/// Drives a tokenizer over a title source
#[derive(Debug)]
pub struct Extractor<'a> {
    tokenizer: &'a Tokenizer,
    batch_size: usize,
    progress_interval: u64,
}

impl<'a> Extractor<'a> {
    /// Extractor with default batch size and a progress line every 1000 titles
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self {
            tokenizer,
            batch_size: DEFAULT_BATCH_SIZE,
            progress_interval: 1000,
        }
    }

    /// Titles per parallel batch (minimum 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Titles between progress log lines; 0 disables them
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Tokenize every title and record its keywords into `counter`.
    pub fn run<I>(&self, titles: I, counter: &KeywordCounter) -> Result<ExtractStats>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut stats = ExtractStats::default();
        let mut next_report = self.progress_interval;
        let mut batch = Vec::with_capacity(self.batch_size);
        let mut titles = titles.into_iter();

        loop {
            batch.clear();
            for title in titles.by_ref().take(self.batch_size) {
                batch.push(title?);
            }
            if batch.is_empty() {
                break;
            }

            stats.rejected += self.tokenize_batch(&batch, counter)?;
            stats.titles += batch.len() as u64;

            if self.progress_interval > 0 && stats.titles >= next_report {
                info!(
                    target: "ckw::extract",
                    rows = stats.titles,
                    keywords = counter.len(),
                    "Progress"
                );
                next_report = (stats.titles / self.progress_interval + 1) * self.progress_interval;
            }
        }

        stats.keywords = counter.len();
        info!(
            target: "ckw::extract",
            titles = stats.titles,
            rejected = stats.rejected,
            keywords = stats.keywords,
            "Extraction complete"
        );
        Ok(stats)
    }

    fn tokenize_batch(&self, batch: &[String], counter: &KeywordCounter) -> Result<u64> {
        let outcomes = batch
            .par_iter()
            .map(|title| match self.tokenizer.tokenize(title) {
                Ok(keywords) => {
                    counter.record(&keywords);
                    Ok(false)
                }
                Err(e) if e.is_capacity() => {
                    warn!(target: "ckw::extract", error = %e, "Title rejected, skipping");
                    Ok(true)
                }
                Err(e) => Err(e),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(outcomes.into_iter().filter(|rejected| *rejected).count() as u64)
    }
}
