//! sigparse - Method signature parsing and multi-delimiter splitting
//!
//! This library parses simplified single-line method signatures into a method
//! name and ordered `(type, name)` arguments, and provides the general-purpose
//! delimiter splitter it is built on.
//!
//! - [`tokenizer`] - Split strings on a set of single-character delimiters
//! - [`signature`] - Parse `[modifier] [type] name(type arg, ...)` signatures
//! - [`config`] - TOML-backed parser settings

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod signature;
pub mod tokenizer;

pub use config::{ConfigError, ParserConfig};
pub use signature::{parse_signature, Argument, ParseError, Signature, SignatureParser};
pub use tokenizer::{split_by_delimiters, split_spans, DelimiterError, DelimiterSet, Span};
