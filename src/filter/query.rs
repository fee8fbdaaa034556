//! Search Query Parsing and Matching
//!
//! A raw search string is either empty, a `/pattern/flags` regex literal, or
//! a plain substring. [`SearchQuery`] records which one was typed and
//! [`SearchMatcher`] holds the compiled form used to test card fields.
//!
//! Regex literals use JavaScript-style flags:
//!
//! | flag | effect |
//! |------|--------|
//! | `i`  | case-insensitive |
//! | `m`  | `^`/`$` match at line boundaries |
//! | `s`  | `.` matches newlines |
//! | `y`  | match must start at the beginning of the field |
//! | `u`  | unicode (always on) |
//! | `g`, `d`, `v` | accepted, no effect on a yes/no match |
//!
//! A regex literal that does not compile falls back to a literal,
//! case-insensitive substring match on the whole raw query.

use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Flags that are accepted but do not change whether a field matches
const NO_OP_FLAGS: [char; 4] = ['g', 'd', 'u', 'v'];

/// Parsed form of a raw search string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// No query, everything matches
    Empty,
    /// Case-insensitive substring
    Literal(String),
    /// `/pattern/flags` regex literal
    Regex { pattern: String, flags: String },
}

impl SearchQuery {
    /// Classify a raw search string
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }

        if let Some((pattern, flags)) = split_regex_literal(raw) {
            return Self::Regex {
                pattern: pattern.to_string(),
                flags: flags.to_string(),
            };
        }

        Self::Literal(raw.to_string())
    }

    /// Check if this is a regex literal
    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex { .. })
    }
}

/// Split `/pattern/flags` into its pattern and flags
///
/// The pattern runs to the last `/`, must be non-empty, and the flags must be
/// ASCII letters.
fn split_regex_literal(raw: &str) -> Option<(&str, &str)> {
    let body = raw.strip_prefix('/')?;
    let end = body.rfind('/')?;
    let (pattern, flags) = (&body[..end], &body[end + 1..]);

    if pattern.is_empty() || !flags.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((pattern, flags))
}

/// Compile a regex literal's pattern with its flags
pub fn compile_regex(pattern: &str, flags: &str) -> Result<Regex> {
    let mut seen = HashSet::new();
    let mut builder_flags = RegexFlags::default();

    for flag in flags.chars() {
        if !seen.insert(flag) {
            return Err(Error::DuplicateRegexFlag { flag });
        }
        match flag {
            'i' => builder_flags.case_insensitive = true,
            'm' => builder_flags.multi_line = true,
            's' => builder_flags.dot_matches_new_line = true,
            'y' => builder_flags.sticky = true,
            f if NO_OP_FLAGS.contains(&f) => {}
            f => return Err(Error::UnsupportedRegexFlag { flag: f }),
        }
    }

    let source = if builder_flags.sticky {
        format!(r"\A(?:{})", pattern)
    } else {
        pattern.to_string()
    };

    let regex = RegexBuilder::new(&source)
        .case_insensitive(builder_flags.case_insensitive)
        .multi_line(builder_flags.multi_line)
        .dot_matches_new_line(builder_flags.dot_matches_new_line)
        .build()?;
    Ok(regex)
}

#[derive(Debug, Default)]
struct RegexFlags {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    sticky: bool,
}

/// Compiled matcher for card text fields
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    /// The query as typed
    raw: String,
    /// Parse result of `raw`
    query: SearchQuery,
    /// What actually runs against text
    kind: MatcherKind,
}

#[derive(Debug, Clone)]
enum MatcherKind {
    All,
    /// Lowercased needle
    Literal(String),
    Regex(Regex),
}

impl SearchMatcher {
    /// Parse and compile a raw search string
    pub fn new(raw: &str) -> Self {
        let query = SearchQuery::parse(raw);
        let kind = match &query {
            SearchQuery::Empty => MatcherKind::All,
            SearchQuery::Literal(text) => MatcherKind::Literal(text.to_lowercase()),
            SearchQuery::Regex { pattern, flags } => match compile_regex(pattern, flags) {
                Ok(regex) => MatcherKind::Regex(regex),
                Err(e) => {
                    warn!("Search query '{}' is not a usable regex ({}), matching literally", raw, e);
                    MatcherKind::Literal(raw.to_lowercase())
                }
            },
        };

        Self {
            raw: raw.to_string(),
            query,
            kind,
        }
    }

    /// The query as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parse result of the raw query
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Check if the query is empty and matches everything
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, MatcherKind::All)
    }

    /// Check if a regex literal failed to compile and literal matching is used instead
    pub fn is_fallback(&self) -> bool {
        self.query.is_regex() && matches!(self.kind, MatcherKind::Literal(_))
    }

    /// Test a single text field
    pub fn is_match(&self, text: &str) -> bool {
        match &self.kind {
            MatcherKind::All => true,
            MatcherKind::Literal(needle) => text.to_lowercase().contains(needle.as_str()),
            MatcherKind::Regex(regex) => regex.is_match(text),
        }
    }
}

impl Default for SearchMatcher {
    fn default() -> Self {
        Self::new("")
    }
}
