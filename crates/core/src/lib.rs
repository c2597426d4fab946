//! Core types for contract keyword extraction
//!
//! This crate defines the foundational pieces shared by every other crate:
//! - Error: Error type hierarchy
//! - Limits: capacity bounds for titles, recursion and keywords
//! - KeywordConfig: `keywords.toml` configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;

pub use config::{KeywordConfig, CONFIG_FILE_NAME, DEFAULT_STOP_WORDS};
pub use error::{Error, Result};
pub use limits::{LimitError, Limits};
