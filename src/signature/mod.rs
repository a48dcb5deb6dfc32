//! Method signature parsing
//!
//! Parses single-line signatures of the form
//!
//! ```text
//! [accessModifier] [returnType] methodName(argType argName, ...)
//! ```
//!
//! into a [`Signature`] holding the method name and its arguments.
//!
//! # Field recovery
//!
//! The text before the first `(` is split on whitespace. Its last word, joined
//! with the parenthesized argument list, is the method token. Leading words fill
//! fixed slots: index 0 is the access modifier, index 1 the return type. Both are
//! read and then dropped, since [`Signature`] only carries the name and arguments.
//!
//! | tokens | access modifier | return type | method token |
//! |--------|-----------------|-------------|--------------|
//! | 0      | -               | -           | -            |
//! | 1      | -               | -           | 0            |
//! | 2      | 0               | -           | 1            |
//! | 3+     | 0               | 1           | last         |
//!
//! Input without any `(` is counted as plain words instead. Fewer than four
//! words leave the method token absent, so `public void log` parses to
//! [`Signature::empty`]. With four or more, the last word is the method token
//! and its missing `(` is an error.
//!
//! # Examples
//!
//! ```
//! use sigparse::signature::{parse_signature, Argument, Signature};
//!
//! let sig = parse_signature("Vector3 distort(int x, float magnitude)").unwrap();
//! assert_eq!(sig.method_name(), Some("distort"));
//! assert_eq!(sig.arguments(), [Argument::new("int", "x"), Argument::new("float", "magnitude")]);
//!
//! // No tokens at all: absent name, not an error
//! assert_eq!(parse_signature("   ").unwrap().method_name(), None);
//!
//! // Too few words for a method token: absent name, not an error
//! assert_eq!(parse_signature("public void log").unwrap(), Signature::empty());
//!
//! // A method token without '(' is malformed
//! assert!(parse_signature("public static void main").is_err());
//! ```

mod error;
mod model;

pub use error::ParseError;
pub use model::{Argument, Signature};

use crate::config::ParserConfig;
use crate::tokenizer::split_spans;

/// Parse a signature with the default [`ParserConfig`]
pub fn parse_signature(signature: &str) -> Result<Signature, ParseError> {
    SignatureParser::default().parse(signature)
}

/// Positional fields recovered from a signature string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Fields<'a> {
    access_modifier: Option<&'a str>,
    return_type: Option<&'a str>,
    method_token: Option<&'a str>,
}

impl<'a> Fields<'a> {
    fn recover(signature: &'a str) -> Self {
        let Some(header_end) = signature.find('(') else {
            return Self::from_words(signature);
        };
        let header = signature[..header_end].trim_end();

        // Start of the last header word; the method token runs from here on
        let last_start = header
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(idx, c)| idx + c.len_utf8());

        let leading: Vec<&str> = header[..last_start].split_whitespace().collect();
        let method_token = Some(signature[last_start..].trim()).filter(|t| !t.is_empty());

        let count = leading.len() + usize::from(method_token.is_some());
        match count {
            0 => Self::default(),
            1 => Self {
                method_token,
                ..Self::default()
            },
            2 => Self {
                access_modifier: leading.first().copied(),
                method_token,
                ..Self::default()
            },
            _ => Self {
                access_modifier: leading.first().copied(),
                return_type: leading.get(1).copied(),
                method_token,
            },
        }
    }

    /// Input without `(` is plain words; a method token needs at least four
    fn from_words(signature: &'a str) -> Self {
        let words: Vec<&str> = signature.split_whitespace().collect();
        let count = words.len();
        Self {
            access_modifier: words.first().copied().filter(|_| count > 1),
            return_type: words.get(1).copied().filter(|_| count > 2),
            method_token: words.last().copied().filter(|_| count > 3),
        }
    }
}

/// Signature parser with a fixed configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureParser {
    config: ParserConfig,
}

impl SignatureParser {
    /// Create a parser with the given configuration
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser uses
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a signature string
    ///
    /// Input too short to carry a method token yields [`Signature::empty`].
    /// A method token without `(`, with nothing before the `(`, or (when
    /// enabled in config) without a closing `)` is an error. Argument segments
    /// that are not exactly two words are skipped.
    pub fn parse(&self, signature: &str) -> Result<Signature, ParseError> {
        let fields = Fields::recover(signature);
        log::trace!(
            "signature {signature:?}: access modifier {:?}, return type {:?}",
            fields.access_modifier,
            fields.return_type
        );

        let Some(token) = fields.method_token else {
            return Ok(Signature::empty());
        };

        let (name, rest) = token
            .split_once('(')
            .ok_or_else(|| ParseError::MissingOpenParen(token.to_string()))?;
        let name = name.trim_end();
        if name.is_empty() {
            return Err(ParseError::EmptyMethodName(signature.to_string()));
        }

        let raw_arguments = match rest.strip_suffix(')') {
            Some(inner) => inner,
            None if self.config.require_close_paren => {
                return Err(ParseError::MissingCloseParen(token.to_string()));
            },
            None => rest,
        };

        Ok(Signature::new(name, self.parse_arguments(raw_arguments)))
    }

    fn parse_arguments(&self, raw: &str) -> Vec<Argument> {
        if raw.is_empty() {
            return Vec::new();
        }

        split_spans(raw, &self.config.argument_delimiters)
            .into_iter()
            .filter_map(|span| span.slice(raw))
            .filter_map(|segment| {
                let argument = Argument::parse(segment);
                if argument.is_none() {
                    log::debug!("skipping argument segment {segment:?}: expected `type name`");
                }
                argument
            })
            .collect()
    }
}
