//! Reading TDB databases and writing PIF records.
//!
//! - [`tdb`] – The TDB reader: comment stripping, statement splitting,
//!   keyword dispatch and entity extraction.
//! - [`pif`] – JSON serialization of the resulting record tree.
//!
//! Parsing behaviour that real-world databases disagree on is controlled by
//! [`ParseConfig`].

use serde::Deserialize;
use std::fmt;

pub mod error;
pub mod pif;
pub mod tdb;

pub use error::Error;
pub use pif::PifStyle;

/// How the leading token of a statement is matched against the keywords
/// `ELEMENT`, `SPECIES`, `PHASE` and `CONSTITUENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordMatch {
    /// The token is the keyword, singular or plural, in any case.
    #[default]
    Exact,
    /// The token is a case-insensitive abbreviation of the keyword, at least
    /// three characters long (`ELEM`, `CONST`, `SPECIE`).
    Abbreviation,
    /// The keyword literal contains the token as a substring, case-sensitive.
    Legacy,
}

impl fmt::Display for KeywordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordMatch::Exact => write!(f, "exact"),
            KeywordMatch::Abbreviation => write!(f, "abbreviation"),
            KeywordMatch::Legacy => write!(f, "legacy"),
        }
    }
}

/// Which source lines count as `$` comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentMode {
    /// `$` is the first non-whitespace character.
    #[default]
    Indented,
    /// `$` is the very first character of the line.
    Leading,
}

impl CommentMode {
    pub fn is_comment(&self, line: &str) -> bool {
        match self {
            CommentMode::Indented => line.trim_start().starts_with('$'),
            CommentMode::Leading => line.starts_with('$'),
        }
    }
}

impl fmt::Display for CommentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentMode::Indented => write!(f, "indented"),
            CommentMode::Leading => write!(f, "leading"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    pub keyword_match: KeywordMatch,
    pub comments: CommentMode,
}
