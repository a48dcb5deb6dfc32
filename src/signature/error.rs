//! Signature parse errors

use thiserror::Error;

/// Errors raised for structurally malformed signatures
///
/// Input too short to carry a method token is not an error; it parses to
/// [`Signature::empty`].
///
/// [`Signature::empty`]: super::Signature::empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The method name token has no `(`
    #[error("missing '(' in method token: {0:?}")]
    MissingOpenParen(String),

    /// The argument list is not closed by a trailing `)` (strict mode only)
    #[error("missing closing ')' in method token: {0:?}")]
    MissingCloseParen(String),

    /// Nothing precedes the `(`
    #[error("missing method name before '(' in: {0:?}")]
    EmptyMethodName(String),
}
