//! Prefix to case-insensitive include pattern

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix matching whatever follows the prefix
const MATCH_REST: &str = ".*";

/// Characters with special meaning in the Lucene regular expression syntax
const RESERVED: &[char] = &[
    '.', '?', '+', '*', '|', '{', '}', '[', ']', '(', ')', '"', '\\', '#', '@', '&', '<', '>', '~',
];

/// How non-letter characters of a prefix end up in the pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternPolicy {
    /// Copy them unchanged; regex metacharacters keep their meaning
    #[default]
    Verbatim,
    /// Backslash-escape reserved characters so they match literally
    Escaped,
}

/// Case-insensitive prefix pattern for a terms aggregation `include` filter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(String);

impl Pattern {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build a pattern using the default (verbatim) policy.
///
/// `"sze"` becomes `[sS][zZ][eE].*`.
pub fn build_pattern(prefix: &str) -> Pattern {
    build_pattern_with(prefix, PatternPolicy::Verbatim)
}

/// Build a pattern with an explicit policy for non-letter characters.
pub fn build_pattern_with(prefix: &str, policy: PatternPolicy) -> Pattern {
    let mut out = String::with_capacity(prefix.len() * 4 + MATCH_REST.len());

    for ch in prefix.chars() {
        if ch.is_ascii_alphabetic() {
            out.push('[');
            out.push(ch.to_ascii_lowercase());
            out.push(ch.to_ascii_uppercase());
            out.push(']');
        } else {
            if policy == PatternPolicy::Escaped && RESERVED.contains(&ch) {
                out.push('\\');
            }
            out.push(ch);
        }
    }

    out.push_str(MATCH_REST);
    Pattern(out)
}
