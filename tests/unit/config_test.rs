//! Tests for parser configuration loading and saving

use sigparse::config::{ConfigError, ParserConfig};
use sigparse::signature::{Argument, SignatureParser};
use sigparse::tokenizer::DelimiterSet;

use crate::common::{init_logging, ConfigDir};

#[test]
fn test_default_config() {
    let config = ParserConfig::default();
    assert_eq!(config.argument_delimiters, DelimiterSet::from(','));
    assert!(!config.require_close_paren);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = ParserConfig::from_toml_str("").unwrap();
    assert_eq!(config, ParserConfig::default());
}

#[test]
fn test_partial_toml() {
    let config = ParserConfig::from_toml_str("require_close_paren = true\n").unwrap();
    assert!(config.require_close_paren);
    assert_eq!(config.argument_delimiters, DelimiterSet::from(','));
}

#[test]
fn test_custom_delimiters_toml() {
    let config = ParserConfig::from_toml_str(r#"argument_delimiters = [",", ";"]"#).unwrap();
    assert_eq!(config.argument_delimiters.len(), 2);
    assert!(config.argument_delimiters.contains(';'));
}

#[test]
fn test_multi_char_delimiter_rejected() {
    let result = ParserConfig::from_toml_str(r#"argument_delimiters = ["::"]"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_toml_rejected() {
    let result = ParserConfig::from_toml_str("require_close_paren = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_from_file() {
    init_logging();
    let dir = ConfigDir::new();
    let path = dir.write(
        "sigparse.toml",
        "argument_delimiters = [\";\"]\nrequire_close_paren = false\n",
    );

    let config = ParserConfig::load(&path).unwrap();
    let sig = SignatureParser::new(config).parse("void f(int a; int b").unwrap();
    assert_eq!(sig.arguments(), [Argument::new("int", "a"), Argument::new("int", "b")]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = ConfigDir::new();
    let path = dir.file("missing.toml");

    let err = ParserConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = ConfigDir::new();
    let config = ParserConfig::load_or_default(&dir.file("missing.toml")).unwrap();
    assert_eq!(config, ParserConfig::default());
}

#[test]
fn test_save_and_reload() {
    let dir = ConfigDir::new();
    let path = dir.file("nested/dir/sigparse.toml");
    let config = ParserConfig::default()
        .with_argument_delimiters([',', '|'].into_iter().collect())
        .with_require_close_paren(true);

    config.save(&path).unwrap();
    assert!(path.exists());
    assert_eq!(ParserConfig::load(&path).unwrap(), config);
}

#[test]
fn test_to_toml_string_lists_delimiters() {
    let toml = ParserConfig::default().to_toml_string().unwrap();
    assert!(toml.contains("argument_delimiters"));
    assert!(toml.contains("require_close_paren = false"));
}
