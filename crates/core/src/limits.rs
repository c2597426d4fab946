//! Capacity limits for titles and keywords
//!
//! The decomposer recurses once per structural marker it peels off, so an
//! adversarial title (thousands of nested quotes) could otherwise exhaust the
//! stack. These limits bound the input and the recursion; violations surface
//! as `Error::Capacity` and the title is rejected whole, never truncated.
//!
//! All lengths are measured in characters, not bytes.

use thiserror::Error;

/// Default maximum keyword length in characters.
pub const DEFAULT_MAX_KEYWORD_CHARS: usize = 50;

/// Default maximum title length in characters.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 4096;

/// Default maximum decomposition depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Size limits applied by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum title length (default: 4096)
    pub max_title_chars: usize,

    /// Maximum recursion depth of one decomposition (default: 256)
    pub max_depth: usize,

    /// Keywords longer than this are dropped by the candidate filter (default: 50)
    pub max_keyword_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            max_depth: DEFAULT_MAX_DEPTH,
            max_keyword_chars: DEFAULT_MAX_KEYWORD_CHARS,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// This is useful for unit tests that need to test limit enforcement
    /// without building very long titles.
    pub fn with_small_limits() -> Self {
        Limits {
            max_title_chars: 64,
            max_depth: 4,
            max_keyword_chars: 10,
        }
    }

    /// Validate a title length
    pub fn validate_title(&self, title: &str) -> Result<(), LimitError> {
        let len = title.chars().count();
        if len > self.max_title_chars {
            return Err(LimitError::TitleTooLong {
                actual: len,
                max: self.max_title_chars,
            });
        }
        Ok(())
    }

    /// Validate the depth of a recursive decomposition call
    pub fn validate_depth(&self, depth: usize) -> Result<(), LimitError> {
        if depth > self.max_depth {
            return Err(LimitError::DepthExceeded {
                actual: depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}

/// Limit validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// Title exceeds maximum length
    #[error("Title too long: {actual} chars exceeds maximum {max}")]
    TitleTooLong {
        /// Actual title length in characters
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Decomposition recursed deeper than allowed
    #[error("Recursion too deep: {actual} levels exceeds maximum {max}")]
    DepthExceeded {
        /// Depth reached
        actual: usize,
        /// Maximum allowed depth
        max: usize,
    },
}

impl LimitError {
    /// Get the reason code reported in `Error::Capacity`
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::TitleTooLong { .. } => "title_too_long",
            LimitError::DepthExceeded { .. } => "recursion_too_deep",
        }
    }
}
