//! Parsed signature values

use serde::{Deserialize, Serialize};

/// A single `(type, name)` entry of an argument list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    /// Declared type, e.g. `String`
    #[serde(rename = "type")]
    arg_type: String,
    /// Argument name, e.g. `value`
    name: String,
}

impl Argument {
    /// Create a new argument
    #[must_use]
    pub fn new(arg_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            arg_type: arg_type.into(),
            name: name.into(),
        }
    }

    /// Parse one argument segment such as `int x`
    ///
    /// Returns `None` unless the trimmed segment holds exactly two
    /// whitespace-separated words.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        let mut words = segment.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(arg_type), Some(name), None) => Some(Self::new(arg_type, name)),
            _ => None,
        }
    }

    /// Declared type
    #[must_use]
    pub fn arg_type(&self) -> &str {
        &self.arg_type
    }

    /// Argument name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.arg_type, self.name)
    }
}

/// A parsed method signature: name plus ordered arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// Method name, absent when the input had no tokens
    method_name: Option<String>,
    /// Arguments in source order
    #[serde(default)]
    arguments: Vec<Argument>,
}

impl Signature {
    /// Create a signature with a method name
    #[must_use]
    pub fn new(method_name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            method_name: Some(method_name.into()),
            arguments,
        }
    }

    /// A signature with no method name and no arguments
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            method_name: None,
            arguments: Vec::new(),
        }
    }

    /// Method name, if one was present
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// Arguments in source order
    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Find an argument by name
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.method_name().unwrap_or_default())?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}
