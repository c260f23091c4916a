//! Parser combinator core
//!
//! A small combinator algebra the node grammars are composed from:
//! 1. Primitive matchers (`literal`, `regex`) succeed or fail at one position
//! 2. Composition operators (`seq`, `alt`, `optional`, `many`, `map`) build
//!    larger parsers out of smaller ones
//! 3. `scan_text` drives a parser across a whole document, tiling it with
//!    non-overlapping matches
//!
//! Failure is never an error: a parser communicates "no match here" through
//! the `matched` flag and nothing else. No combinator panics and none
//! allocates beyond its outcome.
//!
//! `alt` is ordered choice, not longest match. The first sub-parser that
//! succeeds wins, so the order of a pattern list is the disambiguation
//! mechanism and must be preserved by callers.

use regex::Regex;
use std::sync::Arc;

/// Scan positions are capped at this many characters to bound worst-case
/// cost on adversarial input. Text beyond the cap is silently ignored by
/// `scan_text`, which also bounds every statistic derived downstream.
pub const MAX_SCAN_CHARS: usize = 50_000;

/// Outcome of one matcher attempt at one position.
///
/// Ephemeral by design: produced, inspected, and discarded within a single
/// parse step. `end` and `consumed` are byte-based; both equal the attempt
/// position and zero respectively on failure.
#[derive(Debug, Clone)]
pub struct ParseOutcome<T> {
    pub matched: bool,
    pub value: Option<T>,
    pub end: usize,
    pub consumed: usize,
    pub captures: Vec<String>,
}

impl<T> ParseOutcome<T> {
    pub fn success(value: T, end: usize, consumed: usize, captures: Vec<String>) -> Self {
        Self {
            matched: true,
            value: Some(value),
            end,
            consumed,
            captures,
        }
    }

    pub fn failure(at: usize) -> Self {
        Self {
            matched: false,
            value: None,
            end: at,
            consumed: 0,
            captures: Vec::new(),
        }
    }
}

/// A parser is a shareable function from (text, position) to an outcome.
///
/// Built once as an immutable composition; `Send + Sync` so a compiled
/// grammar can serve concurrent callers without locks.
pub type Parser<T> = Arc<dyn Fn(&str, usize) -> ParseOutcome<T> + Send + Sync>;

/// Match an exact substring at the current position.
///
/// Case-insensitive comparison is done per character through Unicode
/// lowercasing, so it behaves sensibly for Turkish input as well.
pub fn literal(expected: &str, case_insensitive: bool) -> Parser<String> {
    let expected = expected.to_string();
    Arc::new(move |text: &str, pos: usize| {
        let Some(rest) = text.get(pos..) else {
            return ParseOutcome::failure(pos);
        };
        if case_insensitive {
            let mut matched_bytes = 0;
            let mut rest_chars = rest.char_indices();
            for want in expected.chars() {
                match rest_chars.next() {
                    Some((idx, have)) if have.to_lowercase().eq(want.to_lowercase()) => {
                        matched_bytes = idx + have.len_utf8();
                    }
                    _ => return ParseOutcome::failure(pos),
                }
            }
            ParseOutcome::success(
                rest[..matched_bytes].to_string(),
                pos + matched_bytes,
                matched_bytes,
                Vec::new(),
            )
        } else if rest.starts_with(expected.as_str()) {
            ParseOutcome::success(
                expected.clone(),
                pos + expected.len(),
                expected.len(),
                Vec::new(),
            )
        } else {
            ParseOutcome::failure(pos)
        }
    })
}

/// Match a regex pattern anchored strictly at the current position.
///
/// The pattern is wrapped as `^(?:...)` and run against the remainder of the
/// text, so this is positional matching, not a free search. The matched text
/// becomes the value; capture groups land in `captures` in group order, with
/// non-participating groups as empty strings.
///
/// An invalid pattern yields a parser that never matches.
pub fn regex(pattern: &str) -> Parser<String> {
    let compiled = Regex::new(&format!("^(?:{pattern})")).ok();
    Arc::new(move |text: &str, pos: usize| {
        let Some(re) = compiled.as_ref() else {
            return ParseOutcome::failure(pos);
        };
        let Some(rest) = text.get(pos..) else {
            return ParseOutcome::failure(pos);
        };
        match re.captures(rest) {
            Some(caps) => {
                let full = caps.get(0).unwrap();
                let captures = caps
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect();
                ParseOutcome::success(
                    full.as_str().to_string(),
                    pos + full.end(),
                    full.end(),
                    captures,
                )
            }
            None => ParseOutcome::failure(pos),
        }
    })
}

/// Require every sub-parser to succeed contiguously, threading each end
/// position into the next start. Fails atomically: no partial match is
/// exposed. Captures accumulate across the sequence.
pub fn seq<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    Arc::new(move |text: &str, pos: usize| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut captures = Vec::new();
        let mut cursor = pos;
        for parser in &parsers {
            let outcome = parser(text, cursor);
            if !outcome.matched {
                return ParseOutcome::failure(pos);
            }
            if let Some(value) = outcome.value {
                values.push(value);
            }
            captures.extend(outcome.captures);
            cursor = outcome.end;
        }
        ParseOutcome::success(values, cursor, cursor - pos, captures)
    })
}

/// Ordered choice: try sub-parsers in declaration order and commit to the
/// first success.
pub fn alt<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    Arc::new(move |text: &str, pos: usize| {
        for parser in &parsers {
            let outcome = parser(text, pos);
            if outcome.matched {
                return outcome;
            }
        }
        ParseOutcome::failure(pos)
    })
}

/// Never fails: yields the default, consuming nothing, when the inner parser
/// does not match.
pub fn optional<T: Clone + Send + Sync + 'static>(parser: Parser<T>, default: T) -> Parser<T> {
    Arc::new(move |text: &str, pos: usize| {
        let outcome = parser(text, pos);
        if outcome.matched {
            outcome
        } else {
            ParseOutcome::success(default.clone(), pos, 0, Vec::new())
        }
    })
}

/// Repeat a parser while it keeps matching. Always succeeds, possibly with
/// zero repetitions.
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Arc::new(move |text: &str, pos: usize| {
        let mut values = Vec::new();
        let mut captures = Vec::new();
        let mut cursor = pos;
        loop {
            let outcome = parser(text, cursor);
            // A zero-length match must terminate the loop or it would never advance.
            if !outcome.matched || outcome.consumed == 0 {
                break;
            }
            if let Some(value) = outcome.value {
                values.push(value);
            }
            captures.extend(outcome.captures);
            cursor = outcome.end;
        }
        ParseOutcome::success(values, cursor, cursor - pos, captures)
    })
}

/// Reshape a matched value into a domain object. The mapper also sees the
/// accumulated captures, which is how raw capture groups become typed nodes.
pub fn map<T, U, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T, &[String]) -> U + Send + Sync + 'static,
{
    Arc::new(move |text: &str, pos: usize| {
        let outcome = parser(text, pos);
        if !outcome.matched {
            return ParseOutcome::failure(pos);
        }
        match outcome.value {
            Some(value) => {
                let mapped = f(value, &outcome.captures);
                ParseOutcome::success(mapped, outcome.end, outcome.consumed, outcome.captures)
            }
            None => ParseOutcome::failure(pos),
        }
    })
}

/// Guard a parser so it only applies at the start of a line.
///
/// The regex crate has no lookbehind, so "am I right after a newline" is
/// checked on the raw bytes instead of inside the pattern.
pub fn at_line_start<T: 'static>(parser: Parser<T>) -> Parser<T> {
    Arc::new(move |text: &str, pos: usize| {
        if pos == 0 || text.as_bytes().get(pos - 1) == Some(&b'\n') {
            parser(text, pos)
        } else {
            ParseOutcome::failure(pos)
        }
    })
}

/// One recorded match from a whole-text scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanMatch<T> {
    pub value: T,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

/// Drive a parser across the text from position 0.
///
/// On a success that consumed input, the match is recorded and scanning jumps
/// past it, which is what makes the resulting spans non-overlapping. On a
/// failure, or a success that consumed nothing, scanning advances exactly one
/// character. Positions past [`MAX_SCAN_CHARS`] characters are never
/// attempted.
pub fn scan_text<T>(parser: &Parser<T>, text: &str) -> Vec<ScanMatch<T>> {
    let limit = scan_byte_limit(text);
    let mut matches = Vec::new();
    let mut pos = 0;
    while pos < limit {
        let outcome = parser(text, pos);
        if outcome.matched && outcome.consumed > 0 {
            if let Some(value) = outcome.value {
                matches.push(ScanMatch {
                    value,
                    start: pos,
                    end: outcome.end,
                });
            }
            pos = outcome.end;
        } else {
            pos = next_char_boundary(text, pos);
        }
    }
    matches
}

/// Byte offset of the scan cap: end of text, or the start of the character
/// at index [`MAX_SCAN_CHARS`], whichever comes first.
fn scan_byte_limit(text: &str) -> usize {
    // A char is at least one byte, so short-by-bytes means short-by-chars.
    if text.len() <= MAX_SCAN_CHARS {
        return text.len();
    }
    text.char_indices()
        .nth(MAX_SCAN_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

// pos is always on a char boundary: the loop only moves by whole matches or
// whole characters.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    match text[pos..].chars().next() {
        Some(ch) => pos + ch.len_utf8(),
        None => text.len(),
    }
}
