//! Multi-delimiter string splitting
//!
//! Cuts a string at every occurrence of any character in a [`DelimiterSet`],
//! keeping tokens in source order.
//!
//! - Consecutive delimiters, or a delimiter at the start, produce an empty token
//! - A delimiter at the very end does not produce a trailing empty token
//!
//! # Examples
//!
//! ```
//! use sigparse::tokenizer::{split_by_delimiters, DelimiterSet};
//!
//! let commas = DelimiterSet::from(',');
//! assert_eq!(split_by_delimiters("a,b,,c", &commas), ["a", "b", "", "c"]);
//! assert_eq!(split_by_delimiters("a,b,", &commas), ["a", "b"]);
//! ```

mod delimiters;
mod span;

pub use delimiters::{DelimiterError, DelimiterSet};
pub use span::Span;

/// Split `source` at every delimiter, returning owned tokens
#[must_use]
pub fn split_by_delimiters(source: &str, delimiters: &DelimiterSet) -> Vec<String> {
    // Spans from split_spans always sit on char boundaries of `source`
    split_spans(source, delimiters)
        .into_iter()
        .filter_map(|span| span.slice(source))
        .map(str::to_string)
        .collect()
}

/// Split `source` at every delimiter, returning the byte span of each token
///
/// Never fails and always returns at least one span. A source made up of
/// delimiters only yields one empty span per delimiter.
#[must_use]
pub fn split_spans(source: &str, delimiters: &DelimiterSet) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut ends_on_delimiter = false;

    for (idx, c) in source.char_indices() {
        if delimiters.contains(c) {
            spans.push(Span::new(start, idx));
            start = idx + c.len_utf8();
            ends_on_delimiter = true;
        } else {
            ends_on_delimiter = false;
        }
    }

    // The tail after the last delimiter is dropped only when it is empty
    // because the source ended on that delimiter.
    if !ends_on_delimiter {
        spans.push(Span::new(start, source.len()));
    }

    spans
}
