//! Caller-supplied regular expressions for the pattern rule.
//!
//! Patterns use `regex` crate syntax: no look-around and no backreferences.

use std::str::FromStr;

use regex::Regex;

/// Error returned when a pattern does not compile.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern {pattern:?}: {error}")]
    Invalid {
        pattern: String,
        #[source]
        error: regex::Error,
    },
}

/// A compiled pattern. Matching is unanchored unless the pattern anchors itself.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|error| PatternError::Invalid { pattern: pattern.to_owned(), error })
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
