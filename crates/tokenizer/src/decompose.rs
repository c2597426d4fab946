//! Recursive decomposition of a title into keyword candidates
//!
//! Each call normalizes its input, then applies the first matching rule:
//!
//! 1. parenthesis: recurse into inside, before and after; return the union
//!    *without* the candidate filter
//! 2. quoted span (first quote to last quote): before, the interior as a
//!    whole, the interior decomposed, after
//! 3. dash: the whole string, then every dash-separated piece
//! 4. comma: every trimmed non-empty comma-separated piece
//! 5. opaque flag: the trimmed string as one candidate
//! 6. leading digits followed by text: the digits, the whole string, and the
//!    text decomposed; otherwise fall back to rule 7
//! 7. whitespace split
//!
//! Matching is greedy and not nesting-aware. `a(b(c)d)` pairs the first `(`
//! with the first `)` after it, and a quoted span runs to the last quote of
//! either kind.
//!
//! Every recursive call works on a strictly shorter string, so decomposition
//! terminates; the depth bound in `Limits` keeps adversarial nesting from
//! exhausting the stack.

use crate::filter::CandidateFilter;
use crate::normalize::normalize;
use crate::KeywordSet;
use keyword_core::{Limits, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Leftmost quote through the rightmost quote on the same line.
static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"].*['"]"#).expect("quoted span pattern is valid"));

/// Byte offsets of the first `(` and the first `)` after it.
fn paren_span(s: &str) -> Option<(usize, usize)> {
    let open = s.find('(')?;
    let close = s[open + 1..].find(')')? + open + 1;
    Some((open, close))
}

/// Length in bytes of the leading ASCII digit run, if any.
fn leading_digits(s: &str) -> Option<usize> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    (end > 0).then_some(end)
}

fn whitespace_pieces(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split_whitespace().map(String::from)
}

/// Recursive decomposer bound to one filter and one set of limits
pub(crate) struct Decomposer<'a> {
    filter: &'a CandidateFilter,
    limits: &'a Limits,
}

impl<'a> Decomposer<'a> {
    pub(crate) fn new(filter: &'a CandidateFilter, limits: &'a Limits) -> Self {
        Self { filter, limits }
    }

    /// Decompose `s`; `opaque` stops rule 7 from splitting on whitespace.
    pub(crate) fn decompose(&self, s: &str, opaque: bool) -> Result<KeywordSet> {
        self.split(s, opaque, 0)
    }

    fn split(&self, s: &str, opaque: bool, depth: usize) -> Result<KeywordSet> {
        self.limits.validate_depth(depth)?;
        if s.is_empty() {
            return Ok(KeywordSet::new());
        }

        let normalized = normalize(s);
        if paren_span(&normalized).is_none() {
            return self.split_unit(&normalized, opaque, depth);
        }

        // Parenthesized groups are a unit; this union skips the filter. The
        // text after each group is taken in the loop, so a run of groups
        // costs one level of depth, not one per group.
        let next = depth + 1;
        self.limits.validate_depth(next)?;
        let mut out = KeywordSet::new();
        let mut rest = normalized.into_owned();
        while let Some((open, close)) = paren_span(&rest) {
            out.extend(self.split(&rest[open + 1..close], false, next)?);
            out.extend(self.split(&rest[..open], false, next)?);
            rest = normalize(&rest[close + 1..]).into_owned();
        }
        out.extend(self.split_unit(&rest, false, next)?);
        Ok(out)
    }

    /// Rules 2 to 7 on an already normalized string without parentheses.
    fn split_unit(&self, s: &str, opaque: bool, depth: usize) -> Result<KeywordSet> {
        let next = depth + 1;

        let mut candidates: Vec<String> = Vec::new();

        if let Some(span) = QUOTED_SPAN.find(s) {
            // Quotes are ASCII, so the interior starts and ends one byte in.
            let interior = &s[span.start() + 1..span.end() - 1];
            candidates.extend(self.split(&s[..span.start()], false, next)?);
            candidates.push(interior.to_string());
            candidates.extend(self.split(interior, false, next)?);
            candidates.extend(self.split(&s[span.end()..], false, next)?);
        } else if s.contains('-') {
            candidates.push(s.to_string());
            for piece in s.split('-') {
                candidates.extend(self.split(piece, false, next)?);
            }
        } else if s.contains(',') {
            for piece in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                candidates.extend(self.split(piece, false, next)?);
            }
        } else if opaque {
            candidates.push(s.trim().to_string());
        } else if let Some(end) = leading_digits(s) {
            let rest = &s[end..];
            let text_follows = rest
                .trim()
                .chars()
                .next()
                .map_or(false, |c| !c.is_ascii_digit());
            if text_follows {
                candidates.push(s[..end].to_string());
                candidates.push(s.to_string());
                candidates.extend(self.split(rest, false, next)?);
            } else {
                candidates.extend(whitespace_pieces(s));
            }
        } else {
            candidates.extend(whitespace_pieces(s));
        }

        Ok(self.filter.apply(candidates))
    }
}
