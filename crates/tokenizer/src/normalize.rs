//! One-shot cleanup applied at the start of every decomposition call
//!
//! Steps, in order:
//! 1. Unescape HTML entities, but only when a numeric entity (`&#39;`) is present
//! 2. Drop a leading `00` unit prefix (`00부대` → `부대`)
//! 3. Middle-dot `·` → `,` so the comma rule handles both separators
//! 4. Square brackets → space

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#[0-9]+;").expect("numeric entity pattern is valid"));

static ZERO_UNIT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^00[\s\w]").expect("zero prefix pattern is valid"));

const MIDDLE_DOT: char = '·';

const BRACKETS: &[char] = &['[', ']'];

/// Normalize a (sub)title before decomposition.
///
/// Borrows when nothing changes, which is the common case for the short
/// fragments the decomposer recurses into.
///
/// # Example
///
/// ```
/// use keyword_tokenizer::normalize;
///
/// assert_eq!(normalize("[긴급]공사"), " 긴급 공사");
/// assert_eq!(normalize("1·2호선"), "1,2호선");
/// ```
pub fn normalize(s: &str) -> Cow<'_, str> {
    let mut s = Cow::Borrowed(s);

    if NUMERIC_ENTITY.is_match(&s) {
        s = Cow::Owned(html_escape::decode_html_entities(&*s).into_owned());
    }

    // The prefix is pure ASCII, so slicing off two bytes is safe.
    if ZERO_UNIT_PREFIX.is_match(s.trim()) {
        s = Cow::Owned(s.trim()[2..].trim().to_string());
    }

    if s.contains(MIDDLE_DOT) {
        s = Cow::Owned(s.replace(MIDDLE_DOT, ","));
    }

    if s.contains(BRACKETS) {
        s = Cow::Owned(s.replace(BRACKETS, " "));
    }

    s
}
