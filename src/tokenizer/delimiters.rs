//! Delimiter sets for the splitter

use std::collections::{BTreeSet, btree_set};
use std::iter::Copied;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a delimiter set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelimiterError {
    /// A delimiter string was empty or longer than one character
    #[error("delimiter must be a single character, got {0:?}")]
    NotSingleChar(String),
}

/// A set of single-character delimiters
///
/// Serialized as a list of one-character strings, so a TOML config reads
/// `argument_delimiters = [",", ";"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DelimiterSet {
    chars: BTreeSet<char>,
}

impl DelimiterSet {
    /// Create an empty delimiter set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chars: BTreeSet::new(),
        }
    }

    /// Build a set from delimiter strings, each of which must be exactly one character
    pub fn from_strs<I, S>(delimiters: I) -> Result<Self, DelimiterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        delimiters.into_iter().map(|d| single_char(d.as_ref())).collect()
    }

    /// Check whether `c` is a delimiter
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Add a delimiter
    pub fn insert(&mut self, c: char) {
        self.chars.insert(c);
    }

    /// Number of distinct delimiters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the set has no delimiters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate delimiters in sorted order
    pub fn iter(&self) -> Copied<btree_set::Iter<'_, char>> {
        self.chars.iter().copied()
    }
}

impl<'a> IntoIterator for &'a DelimiterSet {
    type Item = char;
    type IntoIter = Copied<btree_set::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn single_char(s: &str) -> Result<char, DelimiterError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DelimiterError::NotSingleChar(s.to_string())),
    }
}

impl FromIterator<char> for DelimiterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl From<char> for DelimiterSet {
    fn from(c: char) -> Self {
        std::iter::once(c).collect()
    }
}

impl TryFrom<Vec<String>> for DelimiterSet {
    type Error = DelimiterError;

    fn try_from(delimiters: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_strs(delimiters)
    }
}

impl From<DelimiterSet> for Vec<String> {
    fn from(set: DelimiterSet) -> Self {
        set.iter().map(String::from).collect()
    }
}

impl std::fmt::Display for DelimiterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:?}")?;
        }
        write!(f, "}}")
    }
}
