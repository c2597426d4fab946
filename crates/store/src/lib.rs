//! Title sources and keyword frequency accumulation
//!
//! This crate provides:
//! - CsvTitleSource: titles from one column of a CSV export
//! - KeywordCounter: concurrent per-run occurrence counter
//! - Extractor: parallel tokenize-and-count over a title source
//! - KeywordStore: locked, file-backed cumulative counts with CSV export
//!
//! # Usage
//!
//! ```no_run
//! use keyword_store::{CsvTitleSource, Extractor, KeywordCounter, KeywordStore};
//! use keyword_tokenizer::Tokenizer;
//!
//! # fn main() -> keyword_core::Result<()> {
//! let tokenizer = Tokenizer::new();
//! let counter = KeywordCounter::new();
//! let source = CsvTitleSource::open("contracts.csv", 3, false)?;
//! Extractor::new(&tokenizer).run(source, &counter)?;
//!
//! let store = KeywordStore::open("keywords.json")?;
//! store.merge(&counter);
//! store.flush()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod counter;
pub mod extract;
pub mod source;
pub mod store;

pub use counter::KeywordCounter;
pub use extract::{ExtractStats, Extractor, DEFAULT_BATCH_SIZE};
pub use source::CsvTitleSource;
pub use store::KeywordStore;
