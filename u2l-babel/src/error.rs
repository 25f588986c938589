//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while configuring or running a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Accent mode other than `text`, `math` or `auto`
    InvalidAccentMode(String),
    /// Codepoint key that is not a valid Unicode scalar value
    InvalidCodepoint(String),
    /// Error while reading a definition source
    Io(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidAccentMode(mode) => write!(
                f,
                "accent mode must be 'text', 'math', or 'auto', got '{mode}'"
            ),
            ConvertError::InvalidCodepoint(raw) => write!(f, "Invalid codepoint '{raw}'"),
            ConvertError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err.to_string())
    }
}
