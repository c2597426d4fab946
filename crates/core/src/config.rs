//! Keyword extraction configuration via `keywords.toml`
//!
//! Every field has a default, so an empty or partial file is valid. The CLI
//! writes a commented default file on first use; edit it and rerun.

use crate::limits::{
    Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_KEYWORD_CHARS, DEFAULT_MAX_TITLE_CHARS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "keywords.toml";

/// Keywords excluded from every result.
pub const DEFAULT_STOP_WORDS: &[&str] = &["및"];

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect()
}

fn default_max_keyword_chars() -> usize {
    DEFAULT_MAX_KEYWORD_CHARS
}

fn default_max_title_chars() -> usize {
    DEFAULT_MAX_TITLE_CHARS
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_store_path() -> String {
    "keywords.json".to_string()
}

fn default_progress_interval() -> u64 {
    1000
}

/// Configuration loaded from `keywords.toml`.
///
/// # Example
///
/// ```toml
/// stop_words = ["및", "등"]
/// max_keyword_chars = 50
/// store_path = "keywords.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordConfig {
    /// Exact-match stop words.
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
    /// Candidate filter length bound, in characters.
    #[serde(default = "default_max_keyword_chars")]
    pub max_keyword_chars: usize,
    /// Titles longer than this are rejected.
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,
    /// Recursion bound of a single decomposition.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Path of the persistent keyword store.
    #[serde(default = "default_store_path")]
    pub store_path: String,
    /// Treat the first CSV record as a header.
    #[serde(default)]
    pub has_headers: bool,
    /// Rows between progress log lines during `extract`.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            max_keyword_chars: default_max_keyword_chars(),
            max_title_chars: default_max_title_chars(),
            max_depth: default_max_depth(),
            store_path: default_store_path(),
            has_headers: false,
            progress_interval: default_progress_interval(),
        }
    }
}

impl KeywordConfig {
    /// Tokenizer limits described by this config.
    pub fn limits(&self) -> Limits {
        Limits {
            max_title_chars: self.max_title_chars,
            max_depth: self.max_depth,
            max_keyword_chars: self.max_keyword_chars,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Contract keyword extraction configuration

# Keywords dropped from every result (exact match)
stop_words = ["및"]

# Keywords longer than this many characters are dropped
max_keyword_chars = 50

# Titles longer than this many characters are rejected
max_title_chars = 4096

# Maximum recursion depth while decomposing one title
max_depth = 256

# Cumulative keyword counts
store_path = "keywords.json"

# Skip the first CSV record (default: false, every record is data)
has_headers = false

# Rows between progress log lines
progress_interval = 1000
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// numeric bound is zero.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: KeywordConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds that would make every title fail.
    pub fn validate(&self) -> Result<()> {
        if self.max_keyword_chars == 0 || self.max_title_chars == 0 || self.max_depth == 0 {
            return Err(Error::config(
                "max_keyword_chars, max_title_chars and max_depth must be positive",
            ));
        }
        Ok(())
    }

    /// Write the commented default config if no file exists at `path`.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
